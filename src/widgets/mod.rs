pub mod feedback;
pub mod submit_button;
pub mod text_input;

pub use feedback::Feedback;
pub use submit_button::SubmitButton;
pub use text_input::{TextInput, TextInputState};

#[cfg(test)]
pub(crate) fn row_text(buf: &ratatui::buffer::Buffer, y: u16) -> String {
    (buf.area.left()..buf.area.right())
        .map(|x| buf[(x, y)].symbol())
        .collect()
}
