use std::time::Duration;

use color_eyre::eyre;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::{DefaultTerminal, prelude::*};
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::form::{SearchForm, Status};
use crate::widgets::{Feedback, SubmitButton, TextInput};

const TICK_RATE: Duration = Duration::from_millis(50);

const TITLE: &str = "Google Maps Scraper";
const SUBTITLE: &str = "Enter a search query to scrape data into your Google Sheet.";
const PLACEHOLDER: &str = "e.g., cafes in Chennai";
const DISCLAIMER: &str = indoc! {"
    This tool is for educational purposes only.
    Scraping may be against Google's Terms of Service."};
const HELP: &str = "Enter to submit, Esc to quit.";

#[derive(Debug)]
pub struct App {
    pub should_exit: bool,
    pub form: SearchForm,
    endpoint: Option<String>,
    client: reqwest::Client,
    pending: Option<JoinHandle<Status>>,
}

impl App {
    pub fn new(config: &Config) -> eyre::Result<Self> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            should_exit: false,
            form: SearchForm::new(config.query.clone()),
            endpoint: config.endpoint().map(str::to_string),
            client,
            pending: None,
        })
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> eyre::Result<()> {
        tracing::info!(endpoint = ?self.endpoint, "starting");

        while !self.should_exit {
            terminal.draw(|frame| {
                frame.render_widget(&mut self, frame.area());
                if let Some(cursor) = self.form.query.screen_cursor {
                    frame.set_cursor_position(cursor);
                }
            })?;

            if event::poll(TICK_RATE)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            self.poll_submission().await;
        }

        if let Some(task) = self.pending.take() {
            tracing::info!("aborting in-flight request");
            task.abort();
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Esc => self.should_exit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_exit = true
            }
            KeyCode::Enter => self.submit(),
            _ => {
                self.form.query.handle_key(key);
            }
        }
    }

    fn submit(&mut self) {
        if let Some(submission) = self.form.begin_submit(self.endpoint.as_deref(), &self.client) {
            tracing::debug!(query = submission.query(), "spawning request");
            self.pending = Some(tokio::spawn(submission.send()));
        }
    }

    /// Settles the form once the request task is done, however it ended.
    async fn poll_submission(&mut self) {
        let Some(task) = self.pending.take_if(|task| task.is_finished()) else {
            return;
        };

        let status = match task.await {
            Ok(status) => status,
            Err(err) => {
                tracing::error!(error = %err, "request task failed");
                Status::unexpected(err)
            }
        };

        self.form.settle(status);
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, card_area, footer_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(16),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, card_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(64),
            Constraint::Fill(1),
        ])
        .areas(card_area);

        let card = Block::new()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = card.inner(card_area);
        card.render(card_area, buf);

        let [header_area, input_area, _, button_area, _, feedback_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        App::render_header(header_area, buf);

        TextInput {
            title: "Search Query",
            placeholder: PLACEHOLDER,
            is_focused: !self.form.loading,
        }
        .render(input_area, buf, &mut self.form.query);

        SubmitButton {
            loading: self.form.loading,
        }
        .render(button_area, buf);

        if let Some(status) = self.form.visible_message() {
            Feedback { status }.render(feedback_area, buf);
        }

        App::render_footer(footer_area, buf);
    }
}

impl App {
    fn render_header(area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(TITLE).bold().fg(Color::Cyan),
            Line::from(""),
            Line::from(SUBTITLE).fg(Color::Gray),
        ];

        Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_footer(area: Rect, buf: &mut Buffer) {
        let [_, text_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);

        let mut lines: Vec<Line> = DISCLAIMER.lines().map(Line::from).collect();
        lines.push(Line::from(HELP));

        Paragraph::new(lines)
            .centered()
            .fg(Color::DarkGray)
            .render(text_area, buf);
    }
}
