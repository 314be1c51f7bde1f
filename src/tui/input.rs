// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages for the app
// orchestrator, or into local ViewState mutations (tab switching, selection,
// filtering). Only Draft/PauseToggle/Restart/Quit ever leave the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{TabId, ViewState};
use crate::draft::player::{Position, ALL_POSITIONS};
use crate::protocol::UserCommand;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// app orchestrator. Returns `None` when the key press was handled locally
/// by mutating `ViewState`.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both Press
    // and Release events for each physical keypress; ignoring non-Press
    // events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode (escape hatch)
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    if view_state.filter_mode {
        return handle_filter_mode(key_event, view_state);
    }

    match key_event.code {
        // Tab switching
        KeyCode::Char('1') => {
            view_state.active_tab = TabId::Available;
            None
        }
        KeyCode::Char('2') => {
            view_state.active_tab = TabId::History;
            None
        }
        KeyCode::Char('3') => {
            view_state.active_tab = TabId::Roster;
            None
        }

        // Selection in the available list
        KeyCode::Up | KeyCode::Char('k') => {
            view_state.selected = view_state.selected.saturating_sub(1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            view_state.selected += 1;
            view_state.clamp_selection();
            None
        }

        // Draft the selected player (Available tab only)
        KeyCode::Enter => {
            if view_state.active_tab == TabId::Available {
                view_state
                    .selected_player()
                    .map(|p| UserCommand::Draft {
                        player_id: p.id.clone(),
                    })
            } else {
                None
            }
        }

        // Filter mode entry: only relevant on the Players tab
        KeyCode::Char('/') => {
            if view_state.active_tab == TabId::Available {
                view_state.filter_mode = true;
            }
            None
        }

        // Position filter cycling
        KeyCode::Char('p') => {
            cycle_position_filter(view_state);
            None
        }

        // Escape clears both filters
        KeyCode::Esc => {
            view_state.filter_text.clear();
            view_state.position_filter = None;
            view_state.clamp_selection();
            None
        }

        // Draft controls
        KeyCode::Char(' ') => Some(UserCommand::PauseToggle),
        KeyCode::Char('r') => Some(UserCommand::Restart),

        // Quit: enter confirmation mode instead of quitting immediately
        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }

        _ => None,
    }
}

/// Handle key events while the quit confirmation prompt is showing.
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

/// Handle key events while the filter input is capturing keystrokes.
fn handle_filter_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Enter => {
            view_state.filter_mode = false;
        }
        KeyCode::Esc => {
            view_state.filter_mode = false;
            view_state.filter_text.clear();
        }
        KeyCode::Backspace => {
            view_state.filter_text.pop();
        }
        KeyCode::Char(c) => {
            view_state.filter_text.push(c);
        }
        _ => {}
    }
    view_state.clamp_selection();
    None
}

/// Advance the position filter: None -> QB -> RB -> WR -> TE -> K -> DST -> None.
fn cycle_position_filter(view_state: &mut ViewState) {
    view_state.position_filter = match view_state.position_filter {
        None => Some(ALL_POSITIONS[0]),
        Some(current) => next_position(current),
    };
    view_state.clamp_selection();
}

fn next_position(current: Position) -> Option<Position> {
    let idx = ALL_POSITIONS.iter().position(|&p| p == current)?;
    ALL_POSITIONS.get(idx + 1).copied()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::player::Player;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn make_player(id: &str, name: &str, overall: u32) -> Player {
        Player {
            id: id.to_string(),
            name: name.to_string(),
            position: Position::RunningBack,
            team: "TST".to_string(),
            position_rank: 100,
            overall_rank: overall,
        }
    }

    fn state_with_players() -> ViewState {
        let mut state = ViewState::default();
        state.available = vec![
            make_player("a", "Player A", 1),
            make_player("b", "Player B", 2),
            make_player("c", "Player C", 3),
        ];
        state
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut state = ViewState::default();
        assert_eq!(handle_key(ctrl('c'), &mut state), Some(UserCommand::Quit));
        state.filter_mode = true;
        assert_eq!(handle_key(ctrl('c'), &mut state), Some(UserCommand::Quit));
    }

    #[test]
    fn q_requires_confirmation() {
        let mut state = ViewState::default();
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut state), None);
        assert!(state.confirm_quit);
        assert_eq!(
            handle_key(key(KeyCode::Char('y')), &mut state),
            Some(UserCommand::Quit)
        );
    }

    #[test]
    fn quit_confirmation_cancels() {
        let mut state = ViewState::default();
        handle_key(key(KeyCode::Char('q')), &mut state);
        assert_eq!(handle_key(key(KeyCode::Char('n')), &mut state), None);
        assert!(!state.confirm_quit);
    }

    #[test]
    fn tab_switching() {
        let mut state = ViewState::default();
        handle_key(key(KeyCode::Char('2')), &mut state);
        assert_eq!(state.active_tab, TabId::History);
        handle_key(key(KeyCode::Char('3')), &mut state);
        assert_eq!(state.active_tab, TabId::Roster);
        handle_key(key(KeyCode::Char('1')), &mut state);
        assert_eq!(state.active_tab, TabId::Available);
    }

    #[test]
    fn selection_moves_and_clamps() {
        let mut state = state_with_players();
        handle_key(key(KeyCode::Down), &mut state);
        assert_eq!(state.selected, 1);
        handle_key(key(KeyCode::Down), &mut state);
        handle_key(key(KeyCode::Down), &mut state);
        handle_key(key(KeyCode::Down), &mut state);
        assert_eq!(state.selected, 2, "selection clamps at the list end");
        handle_key(key(KeyCode::Up), &mut state);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn enter_drafts_selected_player() {
        let mut state = state_with_players();
        handle_key(key(KeyCode::Down), &mut state);
        let cmd = handle_key(key(KeyCode::Enter), &mut state);
        assert_eq!(
            cmd,
            Some(UserCommand::Draft {
                player_id: "b".to_string()
            })
        );
    }

    #[test]
    fn enter_on_other_tabs_is_inert() {
        let mut state = state_with_players();
        state.active_tab = TabId::History;
        assert_eq!(handle_key(key(KeyCode::Enter), &mut state), None);
    }

    #[test]
    fn enter_with_empty_pool_is_inert() {
        let mut state = ViewState::default();
        assert_eq!(handle_key(key(KeyCode::Enter), &mut state), None);
    }

    #[test]
    fn filter_mode_captures_text() {
        let mut state = state_with_players();
        handle_key(key(KeyCode::Char('/')), &mut state);
        assert!(state.filter_mode);
        handle_key(key(KeyCode::Char('p')), &mut state);
        handle_key(key(KeyCode::Char('l')), &mut state);
        assert_eq!(state.filter_text, "pl");
        handle_key(key(KeyCode::Backspace), &mut state);
        assert_eq!(state.filter_text, "p");
        handle_key(key(KeyCode::Enter), &mut state);
        assert!(!state.filter_mode);
        assert_eq!(state.filter_text, "p");
    }

    #[test]
    fn filter_mode_escape_clears() {
        let mut state = state_with_players();
        handle_key(key(KeyCode::Char('/')), &mut state);
        handle_key(key(KeyCode::Char('x')), &mut state);
        handle_key(key(KeyCode::Esc), &mut state);
        assert!(!state.filter_mode);
        assert!(state.filter_text.is_empty());
    }

    #[test]
    fn position_filter_cycles_through_all_and_back() {
        let mut state = ViewState::default();
        for &expected in ALL_POSITIONS {
            handle_key(key(KeyCode::Char('p')), &mut state);
            assert_eq!(state.position_filter, Some(expected));
        }
        handle_key(key(KeyCode::Char('p')), &mut state);
        assert_eq!(state.position_filter, None);
    }

    #[test]
    fn escape_clears_filters_in_normal_mode() {
        let mut state = ViewState::default();
        state.filter_text = "abc".to_string();
        state.position_filter = Some(Position::Kicker);
        handle_key(key(KeyCode::Esc), &mut state);
        assert!(state.filter_text.is_empty());
        assert!(state.position_filter.is_none());
    }

    #[test]
    fn space_and_r_emit_commands() {
        let mut state = ViewState::default();
        assert_eq!(
            handle_key(key(KeyCode::Char(' ')), &mut state),
            Some(UserCommand::PauseToggle)
        );
        assert_eq!(
            handle_key(key(KeyCode::Char('r')), &mut state),
            Some(UserCommand::Restart)
        );
    }

    #[test]
    fn release_events_ignored() {
        let mut state = ViewState::default();
        let mut release = key(KeyCode::Char(' '));
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_key(release, &mut state), None);
    }
}
