//! SnippetDeck: a native browser for a catalog of code snippets.
//!
//! `app` holds the domain model, controllers and services; `ui` builds the
//! FLTK widgets that render them.

pub mod app;
pub mod ui;
