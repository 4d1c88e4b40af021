//! Catalog controller: owns the loaded catalog, the active language and the
//! table of rendered cards.
//!
//! The controller never touches widgets. The UI layer asks it what to show
//! (`display`, `cards`, `names`) and feeds user actions back through
//! `select_language` and `dispatch`, which return what the UI must do next.

use std::time::Duration;

use crate::app::domain::catalog::{Catalog, LanguageGroup, Snippet};

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";
pub const COPY_CONFIRMATION: Duration = Duration::from_secs(2);

pub const LOAD_ERROR_TEXT: &str = "Error loading snippets. Please try again later.";
pub const NOT_FOUND_TEXT: &str = "No snippets found for this language.";
pub const LOADING_TEXT: &str = "Loading snippets...";

/// Identity of a rendered card. `epoch` changes on every re-render, so an id
/// held by a late click or a pending timer never resolves to a newer card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId {
    pub epoch: u64,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Run,
    Copy,
    Help,
}

/// What the card area currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Cards,
    LoadError,
    NotFound,
}

impl DisplayState {
    /// Message text for the non-card states.
    pub fn message(self) -> Option<&'static str> {
        match self {
            DisplayState::Loading => Some(LOADING_TEXT),
            DisplayState::Cards => None,
            DisplayState::LoadError => Some(LOAD_ERROR_TEXT),
            DisplayState::NotFound => Some(NOT_FOUND_TEXT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Shown { index: usize, cards: usize },
    NotFound,
}

/// Result of resolving a click on a card control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardEffect {
    Execute { language: String, code: String },
    Copy { code: String },
    Help { explanation: String },
    NoActiveLanguage,
    /// The card no longer exists (stale id) or never did.
    Ignored,
}

/// Read-only view of one card for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView<'a> {
    pub id: CardId,
    pub title: &'a str,
    pub code: &'a str,
    pub explanation: &'a str,
    pub copy_label: &'static str,
}

struct CardState {
    group: usize,
    snippet: usize,
    copy_label: &'static str,
}

pub struct CatalogController {
    catalog: Catalog,
    active: Option<usize>,
    epoch: u64,
    cards: Vec<CardState>,
    display: DisplayState,
}

impl Default for CatalogController {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogController {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::default(),
            active: None,
            epoch: 0,
            cards: Vec::new(),
            display: DisplayState::Loading,
        }
    }

    /// Store a freshly loaded catalog and activate its first group.
    /// Returns the selector names in display order.
    pub fn load(&mut self, catalog: Catalog) -> Vec<String> {
        self.catalog = catalog;
        self.clear_cards();
        self.active = None;

        match self.catalog.get(0).map(|g| g.name.clone()) {
            Some(first) => {
                self.select_language(&first);
            }
            None => self.display = DisplayState::NotFound,
        }
        self.catalog.names()
    }

    /// The catalog could not be fetched or parsed; the feature stays inert.
    pub fn load_failed(&mut self) {
        self.catalog = Catalog::default();
        self.active = None;
        self.clear_cards();
        self.display = DisplayState::LoadError;
    }

    /// Switch the displayed group. An unknown name clears the active
    /// language as well as the cards.
    pub fn select_language(&mut self, name: &str) -> Selection {
        self.clear_cards();

        let Some(index) = self.catalog.position(name) else {
            self.active = None;
            self.display = DisplayState::NotFound;
            return Selection::NotFound;
        };

        self.active = Some(index);
        self.display = DisplayState::Cards;
        let count = self.catalog.get(index).map_or(0, |g| g.snippets.len());
        self.cards = (0..count)
            .map(|snippet| CardState {
                group: index,
                snippet,
                copy_label: COPY_LABEL,
            })
            .collect();

        Selection::Shown {
            index,
            cards: count,
        }
    }

    /// Resolve a click on one of a card's controls.
    pub fn dispatch(&self, card: CardId, action: CardAction) -> CardEffect {
        let Some(snippet) = self.snippet(card) else {
            return CardEffect::Ignored;
        };

        match action {
            CardAction::Run => match self.active_name() {
                Some(language) => CardEffect::Execute {
                    language: language.to_string(),
                    code: snippet.code.clone(),
                },
                None => CardEffect::NoActiveLanguage,
            },
            CardAction::Copy => CardEffect::Copy {
                code: snippet.code.clone(),
            },
            CardAction::Help => CardEffect::Help {
                explanation: snippet.explanation.clone(),
            },
        }
    }

    /// Flip the card's copy label to the confirmation text.
    /// Returns false when the card is gone.
    pub fn copy_succeeded(&mut self, card: CardId) -> bool {
        self.set_copy_label(card, COPIED_LABEL)
    }

    /// A confirmation timer fired. Returns false when the card was replaced
    /// in the meantime, in which case nothing must be redrawn.
    pub fn copy_expired(&mut self, card: CardId) -> bool {
        self.set_copy_label(card, COPY_LABEL)
    }

    pub fn copy_label(&self, card: CardId) -> Option<&'static str> {
        self.card_state(card).map(|c| c.copy_label)
    }

    pub fn names(&self) -> Vec<String> {
        self.catalog.names()
    }

    pub fn active_name(&self) -> Option<&str> {
        let index = self.active?;
        self.catalog.get(index).map(|g| g.name.as_str())
    }

    pub fn active_group(&self) -> Option<&LanguageGroup> {
        self.catalog.get(self.active?)
    }

    pub fn display(&self) -> DisplayState {
        self.display
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn cards(&self) -> Vec<CardView<'_>> {
        self.cards
            .iter()
            .enumerate()
            .filter_map(|(index, state)| {
                let snippet = self.catalog.get(state.group)?.snippets.get(state.snippet)?;
                Some(CardView {
                    id: CardId {
                        epoch: self.epoch,
                        index,
                    },
                    title: &snippet.title,
                    code: &snippet.code,
                    explanation: &snippet.explanation,
                    copy_label: state.copy_label,
                })
            })
            .collect()
    }

    fn clear_cards(&mut self) {
        self.cards.clear();
        self.epoch += 1;
    }

    fn card_state(&self, card: CardId) -> Option<&CardState> {
        if card.epoch != self.epoch {
            return None;
        }
        self.cards.get(card.index)
    }

    fn snippet(&self, card: CardId) -> Option<&Snippet> {
        let state = self.card_state(card)?;
        self.catalog.get(state.group)?.snippets.get(state.snippet)
    }

    fn set_copy_label(&mut self, card: CardId, label: &'static str) -> bool {
        if card.epoch != self.epoch {
            return false;
        }
        match self.cards.get_mut(card.index) {
            Some(state) => {
                state.copy_label = label;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(title: &str, code: &str, explanation: &str) -> Snippet {
        Snippet {
            title: title.to_string(),
            code: code.to_string(),
            explanation: explanation.to_string(),
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            LanguageGroup {
                name: "Python".to_string(),
                snippets: vec![
                    snippet("Hello", "print(\"<hi> & 'bye'\")", "Prints a <greeting>"),
                    snippet("Loop", "for i in range(3):\n    print(i)", "Counts to two"),
                ],
            },
            LanguageGroup {
                name: "Bash".to_string(),
                snippets: vec![snippet("Echo", "echo \"$HOME\"", "Shows home")],
            },
            LanguageGroup {
                name: "Kotlin".to_string(),
                snippets: vec![],
            },
        ])
        .unwrap()
    }

    fn loaded() -> CatalogController {
        let mut controller = CatalogController::new();
        controller.load(sample_catalog());
        controller
    }

    #[test]
    fn test_initial_state_is_loading() {
        let controller = CatalogController::new();
        assert_eq!(controller.display(), DisplayState::Loading);
        assert_eq!(controller.active_name(), None);
        assert!(controller.cards().is_empty());
    }

    #[test]
    fn test_load_returns_names_in_order() {
        let mut controller = CatalogController::new();
        let names = controller.load(sample_catalog());
        assert_eq!(names, vec!["Python", "Bash", "Kotlin"]);
    }

    #[test]
    fn test_load_activates_first_group() {
        let controller = loaded();
        assert_eq!(controller.active_name(), Some("Python"));
        assert_eq!(controller.display(), DisplayState::Cards);

        let cards = controller.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "Hello");
        assert_eq!(cards[1].title, "Loop");
    }

    #[test]
    fn test_load_empty_catalog_has_no_active_group() {
        let mut controller = CatalogController::new();
        let names = controller.load(Catalog::default());
        assert!(names.is_empty());
        assert_eq!(controller.active_name(), None);
        assert_eq!(controller.display(), DisplayState::NotFound);
    }

    #[test]
    fn test_load_failed_is_inert() {
        let mut controller = CatalogController::new();
        controller.load_failed();
        assert_eq!(controller.display(), DisplayState::LoadError);
        assert_eq!(controller.display().message(), Some(LOAD_ERROR_TEXT));
        assert!(controller.names().is_empty());
        assert!(controller.cards().is_empty());
    }

    #[test]
    fn test_select_language_renders_its_snippets_only() {
        let mut controller = loaded();
        let selection = controller.select_language("Bash");
        assert_eq!(selection, Selection::Shown { index: 1, cards: 1 });
        assert_eq!(controller.active_name(), Some("Bash"));

        let cards = controller.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Echo");
        assert_eq!(cards[0].code, "echo \"$HOME\"");
    }

    #[test]
    fn test_select_group_without_snippets() {
        let mut controller = loaded();
        let selection = controller.select_language("Kotlin");
        assert_eq!(selection, Selection::Shown { index: 2, cards: 0 });
        assert_eq!(controller.display(), DisplayState::Cards);
        assert!(controller.cards().is_empty());
    }

    #[test]
    fn test_select_unknown_language_clears_active() {
        let mut controller = loaded();
        assert_eq!(controller.select_language("Cobol"), Selection::NotFound);
        assert_eq!(controller.active_name(), None);
        assert_eq!(controller.display(), DisplayState::NotFound);
        assert_eq!(controller.display().message(), Some(NOT_FOUND_TEXT));
        assert!(controller.cards().is_empty());
    }

    #[test]
    fn test_dispatch_run_uses_active_language_and_raw_code() {
        let controller = loaded();
        let card = controller.cards()[0].id;
        assert_eq!(
            controller.dispatch(card, CardAction::Run),
            CardEffect::Execute {
                language: "Python".to_string(),
                code: "print(\"<hi> & 'bye'\")".to_string(),
            }
        );
    }

    #[test]
    fn test_dispatch_copy_returns_unescaped_code() {
        let controller = loaded();
        let card = controller.cards()[0].id;
        assert_eq!(
            controller.dispatch(card, CardAction::Copy),
            CardEffect::Copy {
                code: "print(\"<hi> & 'bye'\")".to_string(),
            }
        );
    }

    #[test]
    fn test_dispatch_help_returns_explanation() {
        let controller = loaded();
        let card = controller.cards()[1].id;
        assert_eq!(
            controller.dispatch(card, CardAction::Help),
            CardEffect::Help {
                explanation: "Counts to two".to_string(),
            }
        );
    }

    #[test]
    fn test_dispatch_stale_card_is_ignored() {
        let mut controller = loaded();
        let stale = controller.cards()[0].id;
        controller.select_language("Bash");
        assert_eq!(controller.dispatch(stale, CardAction::Copy), CardEffect::Ignored);

        let out_of_range = CardId {
            epoch: controller.epoch(),
            index: 7,
        };
        assert_eq!(controller.dispatch(out_of_range, CardAction::Run), CardEffect::Ignored);
    }

    #[test]
    fn test_reselecting_same_language_invalidates_old_ids() {
        let mut controller = loaded();
        let before = controller.cards()[0].id;
        controller.select_language("Python");
        let after = controller.cards()[0].id;
        assert_ne!(before, after);
        assert_eq!(controller.dispatch(before, CardAction::Help), CardEffect::Ignored);
    }

    #[test]
    fn test_copy_label_flips_and_reverts() {
        let mut controller = loaded();
        let card = controller.cards()[0].id;
        assert_eq!(controller.copy_label(card), Some(COPY_LABEL));

        assert!(controller.copy_succeeded(card));
        assert_eq!(controller.copy_label(card), Some(COPIED_LABEL));
        assert_eq!(controller.cards()[0].copy_label, COPIED_LABEL);
        assert_eq!(controller.cards()[1].copy_label, COPY_LABEL);

        assert!(controller.copy_expired(card));
        assert_eq!(controller.copy_label(card), Some(COPY_LABEL));
    }

    #[test]
    fn test_overlapping_copy_timers_are_independent() {
        let mut controller = loaded();
        let card = controller.cards()[0].id;
        controller.copy_succeeded(card);
        controller.copy_succeeded(card);

        // The first timer reverts the label even though a second one is pending.
        assert!(controller.copy_expired(card));
        assert_eq!(controller.copy_label(card), Some(COPY_LABEL));
        assert!(controller.copy_expired(card));
        assert_eq!(controller.copy_label(card), Some(COPY_LABEL));
    }

    #[test]
    fn test_copy_timer_after_rerender_is_noop() {
        let mut controller = loaded();
        let card = controller.cards()[0].id;
        controller.copy_succeeded(card);
        controller.select_language("Bash");

        assert!(!controller.copy_expired(card));
        assert_eq!(controller.cards()[0].copy_label, COPY_LABEL);
    }

    #[test]
    fn test_copy_confirmation_window() {
        assert_eq!(COPY_CONFIRMATION, Duration::from_secs(2));
    }
}
