//! # Breadcrumbs Demo
//!
//! A collapsing breadcrumb trail inside a resizable container. Shrink the
//! container to watch crumbs fold behind the "…" indicator, switch the
//! collapse direction, and open the indicator to navigate to a hidden crumb.
//!
//! Run with: `cargo run --example breadcrumbs`

use trellis::crossterm::event::{KeyCode, KeyModifiers};
use trellis::ratatui::layout::{Constraint, Layout, Rect};
use trellis::ratatui::style::{Color, Modifier, Style};
use trellis::ratatui::text::{Line, Span};
use trellis::ratatui::widgets::{Block, Borders, Paragraph};
use trellis::ratatui::Frame;
use trellis::widgets::breadcrumbs::{self, Breadcrumbs, Crumb};
use trellis::widgets::overflow::CollapseFrom;
use trellis::{Command, Component, Model, TerminalEvent};

fn path() -> Vec<Crumb> {
    vec![
        Crumb::new("All files").with_glyph("▸"),
        Crumb::new("Users").with_glyph("▸"),
        Crumb::new("Janet").with_glyph("▸"),
        Crumb::new("Photos").with_glyph("▸"),
        Crumb::new("Wednesday").with_glyph("▸"),
        Crumb::new("image.jpg").current(true),
    ]
}

struct BreadcrumbsDemo {
    trail: Breadcrumbs,
    width_percent: u16,
    collapse_from: CollapseFrom,
    always_show_overflow: bool,
    last_navigation: Option<String>,
}

#[derive(Debug)]
enum Msg {
    Trail(breadcrumbs::Message),
    Narrower,
    Wider,
    ToggleDirection,
    ToggleAlwaysShow,
    Quit,
}

impl Model for BreadcrumbsDemo {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let mut trail = Breadcrumbs::new(path());
        trail.focus();
        (
            BreadcrumbsDemo {
                trail,
                width_percent: 50,
                collapse_from: CollapseFrom::Start,
                always_show_overflow: false,
                last_navigation: None,
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Trail(breadcrumbs::Message::Navigate(index)) => {
                let name = self.trail.items()[index].text().to_string();
                self.last_navigation = Some(name);
                Command::none()
            }
            Msg::Trail(m) => self.trail.update(m).map(Msg::Trail),
            Msg::Narrower => {
                self.width_percent = self.width_percent.saturating_sub(5).max(10);
                Command::none()
            }
            Msg::Wider => {
                self.width_percent = (self.width_percent + 5).min(100);
                Command::none()
            }
            Msg::ToggleDirection => {
                self.collapse_from = match self.collapse_from {
                    CollapseFrom::Start => CollapseFrom::End,
                    CollapseFrom::End => CollapseFrom::Start,
                };
                self.trail.set_collapse_from(self.collapse_from);
                Command::none()
            }
            Msg::ToggleAlwaysShow => {
                self.always_show_overflow = !self.always_show_overflow;
                self.trail.set_always_show_overflow(self.always_show_overflow);
                Command::none()
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [title_area, options_area, card_area, status_area, help_area] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(frame.area());

        let title = Paragraph::new(Line::from(Span::styled(
            "Collapsing Breadcrumbs",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, title_area);

        let direction = match self.collapse_from {
            CollapseFrom::Start => "start",
            CollapseFrom::End => "end",
        };
        let options = Paragraph::new(Line::from(vec![
            Span::raw(format!("width: {}%  ", self.width_percent)),
            Span::raw(format!("collapse from: {}  ", direction)),
            Span::raw(format!(
                "always show overflow: {}",
                if self.always_show_overflow { "on" } else { "off" }
            )),
        ]));
        frame.render_widget(options, options_area);

        // The resizable container the trail must fit into
        let card_width = (card_area.width as u32 * self.width_percent as u32 / 100) as u16;
        let card = Rect {
            width: card_width.max(4),
            ..card_area
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(card);
        frame.render_widget(block, card);
        self.trail.view(frame, inner);

        if let Some(ref name) = self.last_navigation {
            let status = Paragraph::new(Line::from(vec![
                Span::raw("Navigated to: "),
                Span::styled(
                    name.as_str(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            frame.render_widget(status, status_area);
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled("←/→", Style::default().fg(Color::DarkGray)),
            Span::raw(" resize  "),
            Span::styled("c", Style::default().fg(Color::DarkGray)),
            Span::raw(" direction  "),
            Span::styled("a", Style::default().fg(Color::DarkGray)),
            Span::raw(" always-overflow  "),
            Span::styled("Enter", Style::default().fg(Color::DarkGray)),
            Span::raw(" open …  "),
            Span::styled("q", Style::default().fg(Color::DarkGray)),
            Span::raw(" quit"),
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
        if self.trail.is_overflow_open() {
            // The open menu owns the keyboard.
            return Some(Msg::Trail(breadcrumbs::Message::KeyPress(key)));
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
            KeyCode::Left => Some(Msg::Narrower),
            KeyCode::Right => Some(Msg::Wider),
            KeyCode::Char('c') => Some(Msg::ToggleDirection),
            KeyCode::Char('a') => Some(Msg::ToggleAlwaysShow),
            _ => Some(Msg::Trail(breadcrumbs::Message::KeyPress(key))),
        }
    }
}

#[trellis::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    trellis::run::<BreadcrumbsDemo>(()).await?;
    Ok(())
}
