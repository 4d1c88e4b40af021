use super::error::{AppError, Result};

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard through FLTK. Text is placed in both the selection
/// buffer and the clipboard so middle-click paste works on X11 too.
#[derive(Debug, Default, Clone, Copy)]
pub struct FltkClipboard;

impl Clipboard for FltkClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        check_transferable(text)?;
        fltk::app::copy(text);
        fltk::app::copy2(text);
        Ok(())
    }
}

/// FLTK passes clipboard text as a C string; an interior NUL would cut it short.
pub fn check_transferable(text: &str) -> Result<()> {
    match text.find('\0') {
        Some(pos) => Err(AppError::Clipboard(format!(
            "text contains a NUL byte at offset {}",
            pos
        ))),
        None => Ok(()),
    }
}
