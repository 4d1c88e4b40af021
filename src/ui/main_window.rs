use fltk::{
    app::Sender,
    enums::{Align, Font},
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextDisplay},
    window::Window,
};

use super::selector_bar::{SELECTOR_BAR_HEIGHT, SelectorBar};
use super::snippet_cards::CardList;
use crate::app::domain::messages::Message;

const OUTPUT_LABEL_HEIGHT: i32 = 22;
const OUTPUT_HEIGHT: i32 = 160;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub selector: SelectorBar,
    pub cards: CardList,
    pub output: TextDisplay,
}

pub fn build_main_window(sender: &Sender<Message>, code_font_size: i32) -> MainWidgets {
    let mut wind = Window::new(100, 100, 900, 720, "SnippetDeck");
    wind.set_xclass("SnippetDeck");

    let mut flex = Flex::new(0, 0, 900, 720, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(6);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let selector = SelectorBar::new(0, 30, 900, *sender);
    flex.fixed(&selector.widget, SELECTOR_BAR_HEIGHT);

    // Card list takes whatever space is left
    let cards = CardList::new(*sender);

    let mut output_label = Frame::default().with_label("Output");
    output_label.set_label_font(Font::HelveticaBold);
    output_label.set_align(Align::Left | Align::Inside);
    flex.fixed(&output_label, OUTPUT_LABEL_HEIGHT);

    let mut output = TextDisplay::default();
    output.set_buffer(TextBuffer::default());
    output.set_text_font(Font::Courier);
    output.set_text_size(code_font_size);
    flex.fixed(&output, OUTPUT_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        menu,
        selector,
        cards,
        output,
    }
}
