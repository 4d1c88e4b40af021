use fltk::{
    app::Sender,
    button::Button,
    draw,
    enums::{Font, FrameType},
    group::{Pack, PackType},
    prelude::*,
};

use super::theme::palette;
use crate::app::domain::messages::Message;
use crate::app::services::markup::escape_label;

pub const SELECTOR_BAR_HEIGHT: i32 = 40;

const BUTTON_HEIGHT: i32 = 28;
const BUTTON_H_PADDING: i32 = 24;
const MIN_BUTTON_WIDTH: i32 = 70;
const BUTTON_SPACING: i32 = 6;
const LABEL_SIZE: i32 = 14;

/// Row of language buttons, one per catalog group, in catalog order.
pub struct SelectorBar {
    pub widget: Pack,
    buttons: Vec<(String, Button)>,
    sender: Sender<Message>,
}

impl SelectorBar {
    pub fn new(x: i32, y: i32, w: i32, sender: Sender<Message>) -> Self {
        let mut widget = Pack::new(x, y, w, SELECTOR_BAR_HEIGHT, None);
        widget.set_type(PackType::Horizontal);
        widget.set_spacing(BUTTON_SPACING);
        widget.end();

        Self {
            widget,
            buttons: Vec::new(),
            sender,
        }
    }

    /// Replace all buttons with one per name.
    pub fn rebuild(&mut self, names: &[String], is_dark: bool) {
        self.widget.clear();
        self.buttons.clear();

        self.widget.begin();
        for name in names {
            let label = escape_label(name);
            draw::set_font(Font::Helvetica, LABEL_SIZE);
            let (tw, _) = draw::measure(&label, true);

            let mut button = Button::default()
                .with_size((tw + BUTTON_H_PADDING).max(MIN_BUTTON_WIDTH), BUTTON_HEIGHT)
                .with_label(&label);
            button.set_label_size(LABEL_SIZE);
            button.set_frame(FrameType::RFlatBox);
            button.clear_visible_focus();

            let s = self.sender;
            let lang = name.clone();
            button.set_callback(move |_| s.send(Message::SelectLanguage(lang.clone())));

            self.buttons.push((name.clone(), button));
        }
        self.widget.end();

        self.set_active(None, is_dark);
        self.widget.redraw();
    }

    /// Mark exactly the button named `active` (or none) as active.
    pub fn set_active(&mut self, active: Option<&str>, is_dark: bool) {
        let p = palette(is_dark);
        for (name, button) in &mut self.buttons {
            if Some(name.as_str()) == active {
                button.set_color(p.active_bg);
                button.set_label_color(p.active_fg);
            } else {
                button.set_color(p.button_bg);
                button.set_label_color(p.button_fg);
            }
            button.redraw();
        }
    }
}
