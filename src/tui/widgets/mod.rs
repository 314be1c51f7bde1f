// Widget rendering for the draft-room dashboard.

pub mod available;
pub mod draft_board;
pub mod roster;
pub mod status_bar;
