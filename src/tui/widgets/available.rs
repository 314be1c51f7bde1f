// Available players widget: sortable/filterable table of undrafted players.
//
// Columns: display rank, name, position, NFL team, ranking. The ranking
// column shows the overall rank normally and the position rank while a
// position filter is active, matching the sort key.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::draft::player::{Player, UNRANKED};
use crate::tui::ViewState;

/// Render the available players table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let filtered = state.filtered_players();
    let can_draft = state.team == 1 && !state.complete && !state.paused;

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Name"),
        Cell::from("Pos"),
        Cell::from("Team"),
        Cell::from("Rank"),
    ])
    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

    // Keep the selected row inside the visible window.
    let visible_rows = area.height.saturating_sub(3) as usize;
    let offset = if visible_rows == 0 {
        0
    } else {
        state.selected.saturating_sub(visible_rows.saturating_sub(1))
    };

    let rows: Vec<Row> = filtered
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows.max(1))
        .map(|(i, p)| {
            let style = if i == state.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(if can_draft { Color::Green } else { Color::DarkGray })
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(p.name.clone()),
                Cell::from(p.position.display_str()),
                Cell::from(p.team.clone()),
                Cell::from(format_rank(p, state)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(18),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(build_title(state, filtered.len())));

    frame.render_widget(table, area);
}

/// The rank shown in the table: position rank under a position filter,
/// overall rank otherwise. Unranked players show "--".
fn format_rank(player: &Player, state: &ViewState) -> String {
    let rank = if state.position_filter.is_some() {
        player.position_rank
    } else {
        player.overall_rank
    };
    if rank == UNRANKED {
        "--".to_string()
    } else {
        format!("{}", rank)
    }
}

/// Build the title with filter info and the filtered count.
fn build_title(state: &ViewState, filtered_count: usize) -> Line<'static> {
    let mut title = String::from("Available Players");
    if let Some(pos) = state.position_filter {
        title.push_str(&format!(" [{}]", pos.display_str()));
    }
    if !state.filter_text.is_empty() || state.filter_mode {
        title.push_str(&format!(" \"{}\"", state.filter_text));
        if state.filter_mode {
            title.push('_');
        }
    }
    title.push_str(&format!(" ({})", filtered_count));
    Line::from(title)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
