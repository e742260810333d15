use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::api::MyRecords;
use super::leaderboard::PanelView;
use super::time_format::format_time;

/// Login timeline entries shown, newest first as the server sends them.
pub const TIMELINE_LIMIT: usize = 15;

const LOCKED_ICON: &str = "🔒";
const LOGIN_REQUIRED: &str = "Please log in to view your records";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordStats {
    pub best_score: u32,
    pub total_games: u32,
    pub login_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub index: usize,
    pub score: u32,
    pub played_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordsPage {
    /// `None` leaves the tiles at their placeholder.
    pub stats: Option<RecordStats>,
    pub scores: PanelView<ScoreRow>,
    pub timeline: PanelView<String>,
}

pub fn records_page<Tz>(records: &MyRecords, now: &DateTime<Tz>) -> RecordsPage
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let stats = RecordStats {
        best_score: records.best_score,
        total_games: records.total_games,
        login_count: records.logins.len(),
    };

    let scores = if records.scores.is_empty() {
        PanelView::Empty { icon: "🎮", message: "No games yet, go play a round!" }
    } else {
        PanelView::Rows(
            records
                .scores
                .iter()
                .enumerate()
                .map(|(i, record)| ScoreRow {
                    index: i + 1,
                    score: record.score,
                    played_at: format_time(record.played_at.as_deref(), now),
                })
                .collect(),
        )
    };

    let timeline = if records.logins.is_empty() {
        PanelView::Empty { icon: "🕐", message: "No login records" }
    } else {
        PanelView::Rows(
            records
                .logins
                .iter()
                .take(TIMELINE_LIMIT)
                .map(|login| format_time(login.login_time.as_deref(), now))
                .collect(),
        )
    };

    RecordsPage { stats: Some(stats), scores, timeline }
}

/// Shown for any failure, 401 included.
pub fn records_unavailable() -> RecordsPage {
    RecordsPage {
        stats: None,
        scores: PanelView::Empty { icon: LOCKED_ICON, message: LOGIN_REQUIRED },
        timeline: PanelView::Empty { icon: LOCKED_ICON, message: LOGIN_REQUIRED },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{LoginRecord, ScoreRecord};
    use chrono::Utc;

    #[test]
    fn test_stats_count_returned_logins() {
        let records = MyRecords {
            best_score: 17,
            total_games: 30,
            scores: vec![ScoreRecord { score: 17, played_at: None }, ScoreRecord { score: 4, played_at: None }],
            logins: (0..20).map(|_| LoginRecord { login_time: None }).collect(),
        };
        let page = records_page(&records, &Utc::now());

        assert_eq!(page.stats, Some(RecordStats { best_score: 17, total_games: 30, login_count: 20 }));
        assert_eq!(page.scores.rows()[1], ScoreRow { index: 2, score: 4, played_at: "-".into() });
        assert_eq!(page.timeline.rows().len(), TIMELINE_LIMIT);
    }

    #[test]
    fn test_empty_history() {
        let page = records_page(&MyRecords::default(), &Utc::now());
        assert!(matches!(page.scores, PanelView::Empty { message: "No games yet, go play a round!", .. }));
        assert!(matches!(page.timeline, PanelView::Empty { message: "No login records", .. }));
    }

    #[test]
    fn test_unavailable_locks_both_panels() {
        let page = records_unavailable();
        assert_eq!(page.stats, None);
        assert_eq!(page.scores.rows().len(), 0);
        assert!(matches!(page.timeline, PanelView::Empty { message: LOGIN_REQUIRED, .. }));
    }
}
