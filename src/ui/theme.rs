use fltk::{enums::Color, menu::MenuBar, prelude::*, text::TextDisplay, window::Window};

/// Colours for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub window_bg: Color,
    pub text: Color,
    pub menu_bg: Color,
    pub menu_hover: Color,
    pub card_bg: Color,
    pub code_bg: Color,
    pub code_fg: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub active_bg: Color,
    pub active_fg: Color,
}

pub fn palette(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            window_bg: Color::from_rgb(25, 25, 25),
            text: Color::from_rgb(220, 220, 220),
            menu_bg: Color::from_rgb(35, 35, 35),
            menu_hover: Color::from_rgb(60, 60, 60),
            card_bg: Color::from_rgb(40, 40, 40),
            code_bg: Color::from_rgb(30, 30, 30),
            code_fg: Color::from_rgb(230, 230, 210),
            button_bg: Color::from_rgb(55, 55, 55),
            button_fg: Color::from_rgb(220, 220, 220),
            active_bg: Color::from_rgb(70, 110, 190),
            active_fg: Color::White,
        }
    } else {
        Palette {
            window_bg: Color::from_rgb(240, 240, 240),
            text: Color::Black,
            menu_bg: Color::from_rgb(240, 240, 240),
            menu_hover: Color::from_rgb(200, 200, 200),
            card_bg: Color::White,
            code_bg: Color::from_rgb(39, 40, 34),
            code_fg: Color::from_rgb(248, 248, 242),
            button_bg: Color::from_rgb(225, 225, 225),
            button_fg: Color::Black,
            active_bg: Color::from_rgb(46, 134, 222),
            active_fg: Color::White,
        }
    }
}

/// Theme the long-lived widgets. Selector buttons and cards are themed when
/// they are rebuilt.
pub fn apply_theme(window: &mut Window, menu: &mut MenuBar, output: &mut TextDisplay, is_dark: bool) {
    let p = palette(is_dark);

    window.set_color(p.window_bg);
    window.set_label_color(p.text);
    menu.set_color(p.menu_bg);
    menu.set_text_color(p.text);
    menu.set_selection_color(p.menu_hover); // Hover color
    output.set_color(p.code_bg);
    output.set_text_color(p.code_fg);
    output.set_label_color(p.text);

    window.redraw();
    menu.redraw();
    output.redraw();
}
