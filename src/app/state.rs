use std::sync::Arc;
use std::thread;

use fltk::{
    app::{self, Sender},
    dialog,
    menu::MenuBar,
    prelude::*,
    text::TextDisplay,
    window::Window,
};

use super::controllers::catalog::{
    COPIED_LABEL, COPY_CONFIRMATION, COPY_LABEL, CardAction, CardEffect, CardId, CatalogController,
};
use super::controllers::execution::{ExecutionTracker, RequestToken};
use super::domain::catalog::Catalog;
use super::domain::messages::Message;
use super::domain::settings::{AppSettings, ThemeMode};
use super::infrastructure::clipboard::{Clipboard, FltkClipboard};
use super::services::catalog_loader::load_catalog;
use super::services::executor::{self, ExecutionOutcome, ExecutionService, HttpExecutionService};
use super::services::export;
use super::services::markup::help_text;
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::main_window::MainWidgets;
use crate::ui::selector_bar::SelectorBar;
use crate::ui::snippet_cards::CardList;
use crate::ui::theme::apply_theme;

pub struct AppState {
    pub window: Window,
    pub menu: MenuBar,
    pub selector: SelectorBar,
    pub cards: CardList,
    pub output: TextDisplay,
    pub sender: Sender<Message>,
    pub settings: AppSettings,
    pub dark_mode: bool,
    pub catalog: CatalogController,
    pub execution: ExecutionTracker,
    executor: Arc<dyn ExecutionService>,
    clipboard: Box<dyn Clipboard>,
}

impl AppState {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>, settings: AppSettings) -> Self {
        let executor = Arc::new(HttpExecutionService::new(settings.execute_endpoint.clone()));
        let dark_mode = settings.is_dark();

        let mut state = Self {
            window: widgets.wind,
            menu: widgets.menu,
            selector: widgets.selector,
            cards: widgets.cards,
            output: widgets.output,
            sender,
            settings,
            dark_mode,
            catalog: CatalogController::new(),
            execution: ExecutionTracker::new(),
            executor,
            clipboard: Box::new(FltkClipboard),
        };
        state.apply_theme();
        state.render_cards();
        state
    }

    /// Fetch the catalog on a worker thread; the result comes back as a message.
    pub fn start_catalog_load(&self) {
        let source = self.settings.catalog_source.clone();
        let s = self.sender;
        thread::spawn(move || match load_catalog(&source) {
            Ok(catalog) => s.send(Message::CatalogLoaded(catalog)),
            Err(e) => {
                eprintln!("Error fetching snippet data from {}: {}", source, e);
                s.send(Message::CatalogLoadFailed);
            }
        });
    }

    /// Handle one message from the channel. Returns `true` if the app should exit.
    pub fn handle_message(&mut self, msg: Message) -> bool {
        match msg {
            Message::OpenInBrowser => self.open_in_browser(),
            Message::FileQuit | Message::WindowClose => {
                self.window.hide();
                return true;
            }
            Message::ToggleDarkMode => self.toggle_dark_mode(),
            Message::ShowAbout => {
                show_about_dialog(&self.settings.catalog_source, &self.settings.execute_endpoint)
            }
            Message::CatalogLoaded(catalog) => self.catalog_loaded(catalog),
            Message::CatalogLoadFailed => {
                self.catalog.load_failed();
                self.selector.rebuild(&[], self.dark_mode);
                self.render_cards();
            }
            Message::SelectLanguage(name) => self.select_language(&name),
            Message::Card { card, action } => self.card_action(card, action),
            Message::CopyConfirmationExpired(card) => self.copy_confirmation_expired(card),
            Message::ExecutionFinished { token, outcome } => self.execution_finished(token, outcome),
        }
        false
    }

    // --- Catalog ---

    pub fn catalog_loaded(&mut self, catalog: Catalog) {
        let names = self.catalog.load(catalog);
        self.selector.rebuild(&names, self.dark_mode);
        self.render_selection();
    }

    pub fn select_language(&mut self, name: &str) {
        self.catalog.select_language(name);
        self.render_selection();
    }

    fn render_selection(&mut self) {
        self.selector.set_active(self.catalog.active_name(), self.dark_mode);
        self.render_cards();
    }

    fn render_cards(&mut self) {
        let cards = self.catalog.cards();
        self.cards.rebuild(
            self.catalog.display(),
            &cards,
            self.settings.code_font_size as i32,
            self.dark_mode,
        );
    }

    // --- Card actions ---

    pub fn card_action(&mut self, card: CardId, action: CardAction) {
        match self.catalog.dispatch(card, action) {
            CardEffect::Execute { language, code } => self.execute(language, code),
            CardEffect::Copy { code } => self.copy_code(card, &code),
            CardEffect::Help { explanation } => dialog::message_default(&help_text(&explanation)),
            CardEffect::NoActiveLanguage => {
                self.execution.no_language();
                self.refresh_output();
            }
            CardEffect::Ignored => {}
        }
    }

    fn execute(&mut self, language: String, code: String) {
        let token = self.execution.begin();
        self.refresh_output();

        let service = Arc::clone(&self.executor);
        let s = self.sender;
        thread::spawn(move || {
            let outcome = executor::run(service.as_ref(), &language, &code);
            s.send(Message::ExecutionFinished { token, outcome });
        });
    }

    fn execution_finished(&mut self, token: RequestToken, outcome: ExecutionOutcome) {
        if self.execution.finish(token, &outcome) {
            self.refresh_output();
        }
    }

    fn refresh_output(&mut self) {
        if let Some(mut buffer) = self.output.buffer() {
            buffer.set_text(self.execution.output());
        }
        self.output.redraw();
    }

    fn copy_code(&mut self, card: CardId, code: &str) {
        match self.clipboard.write_text(code) {
            Ok(()) => {
                if self.catalog.copy_succeeded(card) {
                    self.cards.set_copy_label(card, COPIED_LABEL);
                    let s = self.sender;
                    app::add_timeout3(COPY_CONFIRMATION.as_secs_f64(), move |_| {
                        s.send(Message::CopyConfirmationExpired(card));
                    });
                }
            }
            Err(e) => {
                eprintln!("Failed to copy code: {}", e);
                dialog::alert_default("Failed to copy code to clipboard.");
            }
        }
    }

    fn copy_confirmation_expired(&mut self, card: CardId) {
        if self.catalog.copy_expired(card) {
            self.cards.set_copy_label(card, COPY_LABEL);
        }
    }

    // --- Menu actions ---

    pub fn open_in_browser(&mut self) {
        let Some(group) = self.catalog.active_group() else {
            dialog::alert_default("Select a language first.");
            return;
        };
        if let Err(e) = export::open_in_browser(group) {
            eprintln!("Failed to open snippets in browser: {}", e);
            dialog::alert_default("Failed to open the snippets in a browser.");
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.settings.theme_mode = if self.dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        };
        self.apply_theme();
        self.selector.set_active(self.catalog.active_name(), self.dark_mode);
        self.render_cards();
    }

    fn apply_theme(&mut self) {
        apply_theme(&mut self.window, &mut self.menu, &mut self.output, self.dark_mode);
    }
}
