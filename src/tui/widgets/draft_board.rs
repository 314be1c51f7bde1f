// Draft board widgets: the current-round strip and the full history grid.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::draft::state::PickRecord;
use crate::tui::ViewState;

/// Render the current round as a horizontal strip of one slot per team.
pub fn render_current_round(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Round {}", state.round));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.team_count == 0 || inner.width == 0 {
        return;
    }

    let constraints: Vec<Constraint> = (0..state.team_count)
        .map(|_| Constraint::Ratio(1, state.team_count))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (idx, slot) in slots.iter().enumerate() {
        let team = idx as u32 + 1;
        let pick = state
            .board
            .iter()
            .find(|p| p.round == state.round && p.team == team);

        let mut lines = vec![Line::from(team_label(team))];
        match pick {
            Some(record) => {
                lines.push(Line::from(record.player.name.clone()));
                lines.push(Line::from(format!(
                    "{} | {}",
                    record.player.position, record.player.team
                )));
            }
            None => lines.push(Line::from("-")),
        }

        let style = if team == state.team && !state.complete {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(lines).style(style), *slot);
    }
}

/// Render the full draft history grouped by round.
///
/// Each row is one pick labeled `round.slot` (slot = position within the
/// round), matching how draft results are usually written out.
pub fn render_history(frame: &mut Frame, area: Rect, state: &ViewState) {
    let header = Row::new(vec![
        Cell::from("Pick"),
        Cell::from("Team"),
        Cell::from("Player"),
        Cell::from("Pos"),
    ])
    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

    let visible_rows = area.height.saturating_sub(3) as usize;
    // Show the tail of the log so the latest picks stay in view.
    let skip = state.board.len().saturating_sub(visible_rows.max(1));

    let rows: Vec<Row> = state
        .board
        .iter()
        .skip(skip)
        .map(|record| {
            Row::new(vec![
                Cell::from(pick_label(record, state.team_count)),
                Cell::from(team_label(record.team)),
                Cell::from(record.player.name.clone()),
                Cell::from(record.player.position.display_str()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Min(18),
        Constraint::Length(5),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Draft History ({} picks)", state.board.len())),
    );
    frame.render_widget(table, area);
}

/// Label a pick as `round.slot`, e.g. "3.05".
pub fn pick_label(record: &PickRecord, team_count: u32) -> String {
    if team_count == 0 {
        return format!("{}", record.pick);
    }
    let slot = record.pick - (record.round - 1) * team_count;
    format!("{}.{:02}", record.round, slot)
}

fn team_label(team: u32) -> String {
    if team == 1 {
        "You".to_string()
    } else {
        format!("Team {}", team)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
