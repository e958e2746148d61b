//! # Select Demo
//!
//! A filterable film picker. Open the popover, type to narrow the list by
//! title or year, and confirm with Enter.
//!
//! Run with: `cargo run --example select`

use trellis::crossterm::event::{KeyCode, KeyModifiers};
use trellis::ratatui::layout::{Constraint, Layout};
use trellis::ratatui::style::{Color, Modifier, Style};
use trellis::ratatui::text::{Line, Span};
use trellis::ratatui::widgets::{Block, Borders, Paragraph};
use trellis::ratatui::Frame;
use trellis::widgets::menu::MenuItem;
use trellis::widgets::select::{self, Select};
use trellis::{Command, Component, Model, TerminalEvent};

struct Film {
    display: String,
}

impl Film {
    fn new(rank: usize, title: &str, year: u16) -> Self {
        Self {
            display: format!("{rank}. {title} ({year})"),
        }
    }
}

impl MenuItem for Film {
    fn label(&self) -> &str {
        &self.display
    }
}

fn films() -> Vec<Film> {
    [
        ("The Shawshank Redemption", 1994),
        ("The Godfather", 1972),
        ("The Dark Knight", 2008),
        ("12 Angry Men", 1957),
        ("Schindler's List", 1993),
        ("Pulp Fiction", 1994),
        ("The Good, the Bad and the Ugly", 1966),
        ("Fight Club", 1999),
        ("Forrest Gump", 1994),
        ("Inception", 2010),
        ("The Matrix", 1999),
        ("Goodfellas", 1990),
        ("Seven Samurai", 1954),
        ("City of God", 2002),
        ("Se7en", 1995),
        ("Spirited Away", 2001),
        ("The Silence of the Lambs", 1991),
        ("Parasite", 2019),
        ("Interstellar", 2014),
        ("Whiplash", 2014),
    ]
    .iter()
    .enumerate()
    .map(|(i, &(title, year))| Film::new(i + 1, title, year))
    .collect()
}

struct SelectDemo {
    picker: Select<Film>,
}

#[derive(Debug)]
enum Msg {
    Picker(select::Message),
    Quit,
}

impl Model for SelectDemo {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let mut picker = Select::new(films())
            .with_placeholder("Pick a film...")
            .with_max_visible(10)
            .with_popover_block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Films ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        picker.focus();
        (SelectDemo { picker }, Command::none())
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Picker(m) => self.picker.update(m).map(Msg::Picker),
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [title_area, picker_area, _overlay_area, status_area, help_area] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(13),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(frame.area());

        let title = Paragraph::new(Line::from(Span::styled(
            "Film Picker",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, title_area);

        self.picker.view(frame, picker_area);

        if let Some(label) = self.picker.selected_label() {
            let status = Paragraph::new(Line::from(vec![
                Span::raw("Selected: "),
                Span::styled(
                    label.to_string(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            frame.render_widget(status, status_area);
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::DarkGray)),
            Span::raw(" open/confirm  "),
            Span::styled("Type", Style::default().fg(Color::DarkGray)),
            Span::raw(" to filter  "),
            Span::styled("Up/Down", Style::default().fg(Color::DarkGray)),
            Span::raw(" navigate  "),
            Span::styled("Esc", Style::default().fg(Color::DarkGray)),
            Span::raw(" close/quit"),
        ]));
        frame.render_widget(help, help_area);
    }

    fn on_event(&self, ev: TerminalEvent) -> Option<Msg> {
        let TerminalEvent::Key(key) = ev else {
            return None;
        };
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Msg::Quit);
        }
        // Esc closes the popover first; quitting needs a second press.
        if key.code == KeyCode::Esc && !self.picker.is_open() {
            return Some(Msg::Quit);
        }
        Some(Msg::Picker(select::Message::KeyPress(key)))
    }
}

#[trellis::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    trellis::run::<SelectDemo>(()).await?;
    Ok(())
}
