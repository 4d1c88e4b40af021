use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::{Flex, Pack, Scroll, ScrollType},
    prelude::*,
    text::{TextBuffer, TextDisplay},
};

use super::theme::{Palette, palette};
use crate::app::controllers::catalog::{CardAction, CardId, CardView, DisplayState};
use crate::app::domain::messages::Message;
use crate::app::services::markup::escape_label;

const CARD_MARGIN: i32 = 8;
const CARD_SPACING: i32 = 10;
const TITLE_HEIGHT: i32 = 24;
const BUTTON_ROW_HEIGHT: i32 = 30;
const BUTTON_WIDTH: i32 = 80;
const MIN_CODE_LINES: i32 = 2;
const MAX_CODE_LINES: i32 = 18;
const SCROLLBAR_ALLOWANCE: i32 = 18;
const MESSAGE_HEIGHT: i32 = 40;

/// Height of the code area for `code` at `font_size`, clamped to a sane range.
pub fn code_height(code: &str, font_size: i32) -> i32 {
    let lines = (code.lines().count() as i32).clamp(MIN_CODE_LINES, MAX_CODE_LINES);
    lines * (font_size + 4) + 12
}

/// Total card height: title, code, buttons, margins and inner gaps.
pub fn card_height(code: &str, font_size: i32) -> i32 {
    TITLE_HEIGHT + code_height(code, font_size) + BUTTON_ROW_HEIGHT + CARD_MARGIN * 2 + 2 * 4
}

/// Scrollable list of snippet cards, or a single message line when there
/// are no cards to show.
pub struct CardList {
    pub scroll: Scroll,
    pack: Pack,
    copy_buttons: Vec<(CardId, Button)>,
    sender: Sender<Message>,
}

impl CardList {
    pub fn new(sender: Sender<Message>) -> Self {
        let mut scroll = Scroll::default();
        scroll.set_type(ScrollType::Vertical);

        let mut pack = Pack::default().with_size(scroll.w() - SCROLLBAR_ALLOWANCE, 0);
        pack.set_spacing(CARD_SPACING);
        pack.end();
        scroll.end();

        let mut resize_pack = pack.clone();
        scroll.resize_callback(move |_, x, y, w, _| {
            resize_pack.resize(x, y, w - SCROLLBAR_ALLOWANCE, resize_pack.h());
        });

        Self {
            scroll,
            pack,
            copy_buttons: Vec::new(),
            sender,
        }
    }

    /// Replace the content with `cards`, or with the message for `display`.
    pub fn rebuild(&mut self, display: DisplayState, cards: &[CardView<'_>], font_size: i32, is_dark: bool) {
        let p = palette(is_dark);
        self.pack.clear();
        self.copy_buttons.clear();
        self.scroll.set_color(p.window_bg);
        self.scroll.scroll_to(0, 0);

        let width = (self.scroll.w() - SCROLLBAR_ALLOWANCE).max(200);
        self.pack.resize(self.scroll.x(), self.scroll.y(), width, 0);

        self.pack.begin();
        match display.message() {
            Some(text) => {
                let mut frame = Frame::default().with_size(width, MESSAGE_HEIGHT).with_label(text);
                frame.set_align(Align::Left | Align::Inside);
                frame.set_label_color(p.text);
            }
            None => {
                for card in cards {
                    let copy = self.build_card(card, width, font_size, &p);
                    self.copy_buttons.push((card.id, copy));
                }
            }
        }
        self.pack.end();

        self.scroll.redraw();
    }

    /// Relabel a card's copy button. Unknown ids are ignored.
    pub fn set_copy_label(&mut self, card: CardId, label: &str) {
        if let Some((_, button)) = self.copy_buttons.iter_mut().find(|(id, _)| *id == card) {
            button.set_label(label);
            button.redraw();
        }
    }

    fn build_card(&self, card: &CardView<'_>, width: i32, font_size: i32, p: &Palette) -> Button {
        let mut group = Flex::default()
            .with_size(width, card_height(card.code, font_size))
            .column();
        group.set_margin(CARD_MARGIN);
        group.set_spacing(4);
        group.set_frame(FrameType::BorderBox);
        group.set_color(p.card_bg);

        let mut title = Frame::default().with_label(&escape_label(card.title));
        title.set_label_font(Font::HelveticaBold);
        title.set_label_size(15);
        title.set_label_color(p.text);
        title.set_align(Align::Left | Align::Inside);
        group.fixed(&title, TITLE_HEIGHT);

        let mut buffer = TextBuffer::default();
        buffer.set_text(card.code);
        let mut code = TextDisplay::default();
        code.set_buffer(buffer);
        code.set_text_font(Font::Courier);
        code.set_text_size(font_size);
        code.set_color(p.code_bg);
        code.set_text_color(p.code_fg);
        code.set_frame(FrameType::FlatBox);
        group.fixed(&code, code_height(card.code, font_size));

        let mut row = Flex::default().row();
        row.set_spacing(6);
        let run = self.action_button("Run", card.id, CardAction::Run, p);
        let copy = self.action_button(card.copy_label, card.id, CardAction::Copy, p);
        let help = self.action_button("Help", card.id, CardAction::Help, p);
        Frame::default();
        row.fixed(&run, BUTTON_WIDTH);
        row.fixed(&copy, BUTTON_WIDTH);
        row.fixed(&help, BUTTON_WIDTH);
        row.end();
        group.fixed(&row, BUTTON_ROW_HEIGHT);

        group.end();
        copy
    }

    fn action_button(&self, label: &str, card: CardId, action: CardAction, p: &Palette) -> Button {
        let mut button = Button::default().with_label(label);
        button.set_frame(FrameType::RFlatBox);
        button.set_color(p.button_bg);
        button.set_label_color(p.button_fg);
        button.clear_visible_focus();
        let s = self.sender;
        button.set_callback(move |_| s.send(Message::Card { card, action }));
        button
    }
}
