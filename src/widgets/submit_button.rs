use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Widget},
};

pub const IDLE_LABEL: &str = "Start Scraping";
pub const LOADING_LABEL: &str = "Scraping in Progress...";

#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitButton {
    pub loading: bool,
}

impl SubmitButton {
    pub fn label(&self) -> &'static str {
        if self.loading { LOADING_LABEL } else { IDLE_LABEL }
    }
}

impl Widget for SubmitButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Dimmed while a request is in flight, the button is disabled.
        let style = if self.loading {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::White)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(self.label())
            .centered()
            .style(style)
            .render(area, buf);
    }
}
