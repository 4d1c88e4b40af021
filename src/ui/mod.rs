pub mod dialogs;
pub mod main_window;
pub mod menu;
pub mod selector_bar;
pub mod snippet_cards;
pub mod theme;
