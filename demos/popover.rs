//! # Popover Demo
//!
//! Placement showcase for the anchored popover: toggle it open over or under
//! an anchor row and move the content cursor while it is open.
//!
//! Run with: `cargo run --example popover`

use trellis::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use trellis::ratatui::layout::{Constraint, Layout, Rect};
use trellis::ratatui::style::{Color, Modifier, Style};
use trellis::ratatui::text::{Line, Span};
use trellis::ratatui::widgets::{Block, Borders, Paragraph};
use trellis::ratatui::Frame;
use trellis::widgets::menu::Menu;
use trellis::widgets::popover::{Placement, Popover};
use trellis::{Command, Component, Model, TerminalEvent};

struct PopoverDemo {
    popover: Popover,
    actions: Menu<&'static str>,
    last_action: Option<&'static str>,
}

#[derive(Debug)]
enum Msg {
    Toggle,
    Flip,
    Key(KeyEvent),
    Quit,
}

impl Model for PopoverDemo {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let popover = Popover::new().with_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Actions ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        let actions = Menu::new(vec!["Rename", "Duplicate", "Share", "Delete"]);
        (
            PopoverDemo {
                popover,
                actions,
                last_action: None,
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Toggle => {
                self.popover.toggle();
                Command::none()
            }
            Msg::Flip => {
                let flipped = match self.popover.placement() {
                    Placement::Above => Placement::Below,
                    Placement::Below => Placement::Above,
                };
                self.popover.set_placement(flipped);
                Command::none()
            }
            Msg::Key(key) => match key.code {
                KeyCode::Esc => {
                    self.popover.close();
                    Command::none()
                }
                KeyCode::Enter => {
                    if let Some(index) = self.actions.active_index() {
                        self.last_action = Some(self.actions.items()[index]);
                    }
                    self.popover.close();
                    Command::none()
                }
                KeyCode::Up => {
                    self.actions.move_prev();
                    Command::none()
                }
                KeyCode::Down => {
                    self.actions.move_next();
                    Command::none()
                }
                _ => Command::none(),
            },
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [title_area, _, anchor_area, _, status_area, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(8),
            Constraint::Length(1),
            Constraint::Length(8),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let title = Paragraph::new(Line::from(Span::styled(
            "Popover Placement",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, title_area);

        let placement = match self.popover.placement() {
            Placement::Above => "above",
            Placement::Below => "below",
        };
        let anchor_label = Paragraph::new(Line::from(vec![
            Span::styled(
                "▣ document.txt",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  (popover opens {placement})"),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        frame.render_widget(anchor_label, anchor_area);

        if self.popover.is_open() {
            let anchor = Rect {
                width: 24.min(anchor_area.width),
                ..anchor_area
            };
            let rows = self.actions.visible_len() as u16;
            let overlay = self.popover.anchored_rect(anchor, rows, frame.area());
            let content = self.popover.render(frame, overlay);
            self.actions.view(frame, content);
        }

        if let Some(action) = self.last_action {
            let status = Paragraph::new(Line::from(vec![
                Span::raw("Last action: "),
                Span::styled(
                    action,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            frame.render_widget(status, status_area);
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::DarkGray)),
            Span::raw(" toggle/confirm  "),
            Span::styled("p", Style::default().fg(Color::DarkGray)),
            Span::raw(" flip placement  "),
            Span::styled("Up/Down", Style::default().fg(Color::DarkGray)),
            Span::raw(" navigate  "),
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
        if self.popover.is_open() {
            return Some(Msg::Key(key));
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
            KeyCode::Char('p') => Some(Msg::Flip),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Msg::Toggle),
            _ => None,
        }
    }
}

#[trellis::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    trellis::run::<PopoverDemo>(()).await?;
    Ok(())
}
