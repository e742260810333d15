use chrono::{DateTime, TimeZone};
use std::fmt::Display;

use crate::api::{ApiError, LeaderboardEntry};
use super::time_format::format_time;

pub const HOME_LEADERBOARD_LIMIT: usize = 5;
pub const LOAD_FAILED: &str = "Load failed";

const TROPHY: &str = "🏆";
const HOME_EMPTY: &str = "No records yet, go play a round!";
const FULL_EMPTY: &str = "No records yet";
const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBadge {
    Medal(&'static str),
    Number(usize),
}

impl RankBadge {
    pub fn label(&self) -> String {
        match self {
            RankBadge::Medal(medal) => medal.to_string(),
            RankBadge::Number(rank) => rank.to_string(),
        }
    }
}

/// `rank` is 1-based.
pub fn rank_badge(rank: usize) -> RankBadge {
    match rank.checked_sub(1).and_then(|index| MEDALS.get(index)) {
        Some(medal) => RankBadge::Medal(*medal),
        None => RankBadge::Number(rank),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub badge: RankBadge,
    pub username: String,
    pub score: u32,
    pub played_at: String,
}

/// What a list panel shows: rows, an empty placeholder, or a failure line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView<T> {
    Rows(Vec<T>),
    Empty { icon: &'static str, message: &'static str },
    Failed(&'static str),
}

impl<T> PanelView<T> {
    pub fn rows(&self) -> &[T] {
        match self {
            PanelView::Rows(rows) => rows,
            _ => &[],
        }
    }
}

fn leaderboard_panel<Tz>(
    result: Result<&[LeaderboardEntry], &ApiError>,
    limit: usize,
    empty_message: &'static str,
    now: &DateTime<Tz>,
) -> PanelView<LeaderboardRow>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let entries = match result {
        Ok(entries) => entries,
        Err(_) => return PanelView::Failed(LOAD_FAILED),
    };
    if entries.is_empty() {
        return PanelView::Empty { icon: TROPHY, message: empty_message };
    }

    // Server order is the ranking; never re-sort.
    let rows = entries
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, entry)| LeaderboardRow {
            badge: rank_badge(index + 1),
            username: entry.username.clone(),
            score: entry.score,
            played_at: format_time(entry.played_at.as_deref(), now),
        })
        .collect();
    PanelView::Rows(rows)
}

pub fn home_leaderboard<Tz>(
    result: Result<&[LeaderboardEntry], &ApiError>,
    now: &DateTime<Tz>,
) -> PanelView<LeaderboardRow>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    leaderboard_panel(result, HOME_LEADERBOARD_LIMIT, HOME_EMPTY, now)
}

pub fn full_leaderboard<Tz>(
    result: Result<&[LeaderboardEntry], &ApiError>,
    now: &DateTime<Tz>,
) -> PanelView<LeaderboardRow>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    leaderboard_panel(result, usize::MAX, FULL_EMPTY, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(username: &str, score: u32) -> LeaderboardEntry {
        LeaderboardEntry { username: username.to_string(), score, played_at: None }
    }

    #[test]
    fn test_rank_badges() {
        assert_eq!(rank_badge(1), RankBadge::Medal("🥇"));
        assert_eq!(rank_badge(3), RankBadge::Medal("🥉"));
        assert_eq!(rank_badge(4), RankBadge::Number(4));
        assert_eq!(rank_badge(4).label(), "4");
    }

    #[test]
    fn test_home_keeps_first_five_in_server_order() {
        let entries: Vec<_> = [3, 9, 1, 7, 5, 8, 2].iter().enumerate().map(|(i, s)| entry(&format!("p{}", i), *s)).collect();
        let view = home_leaderboard(Ok(entries.as_slice()), &Utc::now());
        let scores: Vec<u32> = view.rows().iter().map(|row| row.score).collect();
        assert_eq!(scores, vec![3, 9, 1, 7, 5]);
        assert_eq!(view.rows()[0].played_at, "-");
    }

    #[test]
    fn test_full_board_shows_everything() {
        let entries: Vec<_> = (0..12).map(|i| entry("p", i)).collect();
        let view = full_leaderboard(Ok(entries.as_slice()), &Utc::now());
        assert_eq!(view.rows().len(), 12);
        assert_eq!(view.rows()[11].badge, RankBadge::Number(12));
    }

    #[test]
    fn test_empty_and_failed_states() {
        let now = Utc::now();
        assert_eq!(
            home_leaderboard(Ok(&[][..]), &now),
            PanelView::Empty { icon: "🏆", message: "No records yet, go play a round!" }
        );
        assert_eq!(
            full_leaderboard(Ok(&[][..]), &now),
            PanelView::Empty { icon: "🏆", message: "No records yet" }
        );
        let err = ApiError::Network("refused".into());
        assert_eq!(full_leaderboard(Err(&err), &now), PanelView::Failed("Load failed"));
    }
}
