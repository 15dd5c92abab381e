use crate::domain::TableResult;

/// Puts `text` on the system clipboard.
pub fn copy_text(text: &str) -> TableResult<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_owned())?;
    Ok(())
}
