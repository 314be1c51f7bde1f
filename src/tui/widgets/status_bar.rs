// Status and help bars: draft progress, turn indicator, key hints.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the top status bar.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = vec![Span::styled(
        format!(
            " Pick {}/{} | Round {} | {}",
            state.pick.min(state.total_players as u32),
            state.total_players,
            state.round,
            turn_label(state)
        ),
        Style::default().fg(Color::White),
    )];

    if state.paused && !state.complete {
        spans.push(Span::styled(
            "  DRAFT PAUSED",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ));
    }

    if let Some(ref status) = state.status_line {
        spans.push(Span::styled(
            format!("  | {}", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Human-readable description of whose turn it is.
pub fn turn_label(state: &ViewState) -> String {
    if state.complete {
        "Draft complete".to_string()
    } else if state.team == 1 {
        "Your turn".to_string()
    } else {
        format!("Team {} on the clock", state.team)
    }
}

/// Render the bottom help bar. Hints change with the input mode.
pub fn render_help(frame: &mut Frame, area: Rect, state: &ViewState) {
    let text = if state.confirm_quit {
        " Quit? y:Yes  n/Esc:No"
    } else if state.filter_mode {
        " Filter: type to search | Enter:Apply | Esc:Clear"
    } else {
        " 1:Players 2:History 3:Roster | Up/Down:Select Enter:Draft | /:Search p:Position | Space:Pause r:Restart q:Quit"
    };

    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
