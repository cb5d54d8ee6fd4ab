use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::form::Status;

/// The panel below the form showing how the last submission went.
#[derive(Debug, Clone)]
pub struct Feedback<'a> {
    pub status: &'a Status,
}

impl Feedback<'_> {
    pub fn style(&self) -> Style {
        if self.status.is_failure() {
            Style::default().fg(Color::LightRed).bg(Color::Red)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

impl Widget for Feedback<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        let block = Block::new()
            .borders(Borders::ALL)
            .border_style(style);

        Paragraph::new(self.status.text.as_str())
            .centered()
            .wrap(Wrap { trim: true })
            .style(style)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::row_text;

    #[test]
    fn failure_is_red() {
        let status = Status::failure("Error: Quota exceeded");
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 3));

        Feedback { status: &status }.render(buf.area, &mut buf);

        assert!(row_text(&buf, 1).contains("Error: Quota exceeded"));
        assert_eq!(buf[(1u16, 1u16)].bg, Color::Red);
    }

    #[test]
    fn styling_follows_kind_not_text() {
        let status = Status::success("Error rows were skipped");

        let style = Feedback { status: &status }.style();

        assert_eq!(style.bg, None);
    }
}
