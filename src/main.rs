use fltk::{app, enums::Event, prelude::*};

use snippet_deck::app::domain::messages::Message;
use snippet_deck::app::domain::settings::AppSettings;
use snippet_deck::app::state::AppState;
use snippet_deck::ui::main_window::build_main_window;
use snippet_deck::ui::menu::build_menu;

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let mut widgets = build_main_window(&sender, settings.code_font_size as i32);
    build_menu(&mut widgets.menu, &sender, settings.is_dark());

    // Route the window's close button through the message loop
    widgets.wind.set_callback({
        let s = sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });
    widgets.wind.show();

    let mut state = AppState::new(widgets, sender, settings);
    state.start_catalog_load();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if state.handle_message(msg) {
                app.quit();
            }
        }
    }
}
