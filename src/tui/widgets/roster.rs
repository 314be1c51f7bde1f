// Roster widgets: the sidebar summary and the expanded roster tab.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::protocol::RosterGroup;
use crate::tui::ViewState;

/// Render the sidebar roster summary: one line per position with a
/// fill-count against the advisory cap.
pub fn render_sidebar(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut lines = Vec::new();
    for group in &state.my_roster {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<4}", group.position.display_str()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{}/{}", group.players.len(), group.cap),
                count_style(group),
            ),
            Span::raw(format!("  {}", names_summary(group, 3))),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Your Roster"));
    frame.render_widget(paragraph, area);
}

/// Render the expanded roster tab: every drafted player listed under their
/// position group.
pub fn render_expanded(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut lines = Vec::new();
    for group in &state.my_roster {
        lines.push(Line::from(Span::styled(
            format!("{} ({}/{})", group.position.display_str(), group.players.len(), group.cap),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        if group.players.is_empty() {
            lines.push(Line::from("  -"));
        }
        for player in &group.players {
            lines.push(Line::from(format!("  {} ({})", player.name, player.team)));
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Your Team Roster"));
    frame.render_widget(paragraph, area);
}

/// Green when the cap is met, default otherwise.
fn count_style(group: &RosterGroup) -> Style {
    if group.cap > 0 && group.players.len() >= group.cap {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}

/// A comma-joined preview of up to `max` player last names.
fn names_summary(group: &RosterGroup, max: usize) -> String {
    let mut names: Vec<&str> = group
        .players
        .iter()
        .take(max)
        .map(|p| p.name.rsplit(' ').next().unwrap_or(&p.name))
        .collect();
    if group.players.len() > max {
        names.push("...");
    }
    names.join(", ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
