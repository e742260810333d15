//! Plain view models for the non-game pages. Everything here is computed from
//! API results and a clock, so the UI layer only lays out strings.

mod home;
mod leaderboard;
mod records;
mod time_format;

pub use home::{CHALLENGE_TARGET, GUEST_HINT, GUEST_STATUS, StatusCard, challenge_progress};
pub use leaderboard::{
    HOME_LEADERBOARD_LIMIT, LOAD_FAILED, LeaderboardRow, PanelView, RankBadge, full_leaderboard,
    home_leaderboard, rank_badge,
};
pub use records::{RecordStats, RecordsPage, ScoreRow, TIMELINE_LIMIT, records_page, records_unavailable};
pub use time_format::{MISSING_TIME, format_time};
