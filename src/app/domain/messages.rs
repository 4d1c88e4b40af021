use crate::app::controllers::catalog::{CardAction, CardId};
use crate::app::controllers::execution::RequestToken;
use crate::app::domain::catalog::Catalog;
use crate::app::services::executor::ExecutionOutcome;

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks, worker threads and timers send one of these; the
/// dispatch loop in main hands them to `AppState`.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    OpenInBrowser,
    FileQuit,
    WindowClose,

    // View
    ToggleDarkMode,

    // Help
    ShowAbout,

    // Catalog
    CatalogLoaded(Catalog),
    CatalogLoadFailed,
    SelectLanguage(String),

    // Snippet cards
    Card { card: CardId, action: CardAction },
    CopyConfirmationExpired(CardId),

    // Background execution
    ExecutionFinished {
        token: RequestToken,
        outcome: ExecutionOutcome,
    },
}
