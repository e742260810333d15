mod error;
mod types;

pub use error::{ApiError, NETWORK_ERROR_MESSAGE};
pub use types::{
    Credentials, ErrorBody, LeaderboardEntry, LoginRecord, LoginResponse, MeResponse, MyRecords,
    ScoreRecord, ScoreSubmission, ScoreSubmitResponse,
};

pub const LOGIN_PATH: &str = "/api/login";
pub const REGISTER_PATH: &str = "/api/register";
pub const LOGOUT_PATH: &str = "/api/logout";
pub const ME_PATH: &str = "/api/me";
pub const MY_RECORDS_PATH: &str = "/api/my-records";
pub const LEADERBOARD_PATH: &str = "/api/leaderboard";
pub const SCORE_PATH: &str = "/api/score";
