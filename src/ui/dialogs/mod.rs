pub mod about;

use fltk::{app, prelude::*, window::Window};

/// Block on a modal dialog until it closes. A pending program quit hides it.
pub fn run_dialog(dialog: &Window) {
    let mut d = dialog.clone();
    while d.shown() && app::wait() {
        if app::should_program_quit() {
            d.hide();
        }
    }
}
