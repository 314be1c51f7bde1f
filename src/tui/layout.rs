// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones for the draft room:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Draft Board strip - current round (5 rows)        |
// +-------------------------+------------------------+
// | Main Panel (65%)         | Roster Sidebar (35%)   |
// +-------------------------+------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: pick counter, round, turn indicator, status message.
    pub status_bar: Rect,
    /// Current-round board strip: one slot per team.
    pub board_strip: Rect,
    /// Left side of the middle section: tab-switched content area.
    pub main_panel: Rect,
    /// Right side of the middle section: the user's roster.
    pub roster: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the draft-room layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: status(1) | board strip(5) | middle(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);

    let status_bar = vertical[0];
    let board_strip = vertical[1];
    let middle = vertical[2];
    let help_bar = vertical[3];

    // Horizontal: main panel (65%) | roster sidebar (35%)
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(middle);

    AppLayout {
        status_bar,
        board_strip,
        main_panel: horizontal[0],
        roster: horizontal[1],
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
