use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MeResponse {
    pub logged_in: bool,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
    #[serde(default)]
    pub played_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRecord {
    #[serde(default)]
    pub login_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MyRecords {
    #[serde(default)]
    pub best_score: u32,
    #[serde(default)]
    pub total_games: u32,
    #[serde(default)]
    pub scores: Vec<ScoreRecord>,
    #[serde(default)]
    pub logins: Vec<LoginRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: u32,
    #[serde(default)]
    pub played_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreSubmission {
    pub score: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ScoreSubmitResponse {
    #[serde(default)]
    pub saved: Option<bool>,
}

impl ScoreSubmitResponse {
    /// Only an explicit `saved: false` means the run was not recorded.
    pub fn was_rejected_as_guest(&self) -> bool {
        self.saved == Some(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_tolerate_nulls_and_missing_fields() {
        let json = r#"{"best_score": 0, "scores": [{"score": 7, "played_at": null}], "logins": []}"#;
        let records: MyRecords = serde_json::from_str(json).unwrap();
        assert_eq!(records.total_games, 0);
        assert_eq!(records.scores[0], ScoreRecord { score: 7, played_at: None });
    }

    #[test]
    fn test_score_response_guest_detection() {
        let saved: ScoreSubmitResponse = serde_json::from_str(r#"{"saved": true, "score": 3}"#).unwrap();
        let guest: ScoreSubmitResponse = serde_json::from_str(r#"{"saved": false}"#).unwrap();
        let silent: ScoreSubmitResponse = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
        assert!(!saved.was_rejected_as_guest());
        assert!(guest.was_rejected_as_guest());
        assert!(!silent.was_rejected_as_guest());
    }

    #[test]
    fn test_leaderboard_keeps_server_order() {
        let json = r#"[{"username":"b","score":9,"played_at":"2026-01-01 10:00:00"},{"username":"a","score":12}]"#;
        let entries: Vec<LeaderboardEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].username, "b");
        assert_eq!(entries[1].played_at, None);
    }
}
