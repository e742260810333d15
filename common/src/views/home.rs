use crate::api::{MeResponse, MyRecords};

/// Best score that fills the challenge bar.
pub const CHALLENGE_TARGET: u32 = 50;

pub const GUEST_STATUS: &str = "Log in to see your status";
pub const GUEST_HINT: &str = "Playing as a guest: scores are not saved.";

#[derive(Debug, Clone, PartialEq)]
pub enum StatusCard {
    Guest,
    Player {
        username: Option<String>,
        best_score: u32,
        total_games: u32,
        progress_percent: f32,
    },
}

impl StatusCard {
    /// `records` is only consulted for a logged-in player; a failed lookup at
    /// either stage degrades to the guest card.
    pub fn resolve<E>(me: Result<&MeResponse, E>, records: Option<Result<&MyRecords, E>>) -> Self {
        let Ok(me) = me else {
            return StatusCard::Guest;
        };
        if !me.logged_in {
            return StatusCard::Guest;
        }
        match records {
            Some(Ok(records)) => StatusCard::Player {
                username: me.username.clone(),
                best_score: records.best_score,
                total_games: records.total_games,
                progress_percent: challenge_progress(records.best_score),
            },
            _ => StatusCard::Guest,
        }
    }
}

pub fn challenge_progress(best_score: u32) -> f32 {
    (best_score as f32 / CHALLENGE_TARGET as f32 * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    fn logged_in() -> MeResponse {
        MeResponse { logged_in: true, username: Some("alice".into()) }
    }

    #[test]
    fn test_progress_caps_at_full() {
        assert_eq!(challenge_progress(0), 0.0);
        assert_eq!(challenge_progress(25), 50.0);
        assert_eq!(challenge_progress(50), 100.0);
        assert_eq!(challenge_progress(120), 100.0);
    }

    #[test]
    fn test_guest_when_not_logged_in() {
        let me = MeResponse::default();
        assert_eq!(StatusCard::resolve::<ApiError>(Ok(&me), None), StatusCard::Guest);
    }

    #[test]
    fn test_player_card_from_records() {
        let me = logged_in();
        let records = MyRecords { best_score: 10, total_games: 4, ..Default::default() };
        let card = StatusCard::resolve::<ApiError>(Ok(&me), Some(Ok(&records)));
        assert_eq!(
            card,
            StatusCard::Player {
                username: Some("alice".into()),
                best_score: 10,
                total_games: 4,
                progress_percent: 20.0,
            }
        );
    }

    #[test]
    fn test_any_failure_falls_back_to_guest() {
        let me = logged_in();
        let failed = ApiError::Rejected { status: 401, message: None };
        assert_eq!(StatusCard::resolve(Ok(&me), Some(Err(failed.clone()))), StatusCard::Guest);
        assert_eq!(StatusCard::resolve::<ApiError>(Err(failed), None), StatusCard::Guest);
    }
}
