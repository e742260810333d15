use common::api::{
    ApiError, Credentials, ErrorBody, LEADERBOARD_PATH, LOGIN_PATH, LOGOUT_PATH, LeaderboardEntry,
    LoginResponse, ME_PATH, MY_RECORDS_PATH, MeResponse, MyRecords, REGISTER_PATH, SCORE_PATH,
    ScoreSubmission, ScoreSubmitResponse,
};
use reqwest::{Client, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::config::ApiConfig;

/// HTTP client for the arcade server. The session is a server-side cookie, so
/// one `ApiClient` (and its clones, which share the cookie jar) is one login.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            return Err(ApiError::Rejected { status: status.as_u16(), message });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.send(self.http.post(self.url(LOGIN_PATH)).json(credentials)).await
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.send::<IgnoredAny>(self.http.post(self.url(REGISTER_PATH)).json(credentials))
            .await
            .map(|_| ())
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send::<IgnoredAny>(self.http.post(self.url(LOGOUT_PATH)))
            .await
            .map(|_| ())
    }

    pub async fn me(&self) -> Result<MeResponse, ApiError> {
        self.send(self.http.get(self.url(ME_PATH))).await
    }

    pub async fn my_records(&self) -> Result<MyRecords, ApiError> {
        self.send(self.http.get(self.url(MY_RECORDS_PATH))).await
    }

    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        self.send(self.http.get(self.url(LEADERBOARD_PATH))).await
    }

    pub async fn submit_score(&self, score: u32) -> Result<ScoreSubmitResponse, ApiError> {
        self.send(self.http.post(self.url(SCORE_PATH)).json(&ScoreSubmission { score }))
            .await
    }
}
