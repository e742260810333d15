use std::sync::Arc;

use chrono::Local;
use common::api::{ApiError, Credentials, MeResponse, MyRecords};
use common::views::{StatusCard, full_leaderboard, home_leaderboard, records_page, records_unavailable};
use common::{log, log_warn};
use tokio::sync::mpsc;

use crate::api_client::ApiClient;
use crate::state::{ClientCommand, LoadedBestScore, NoticeKind, Page, SharedState};

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";
const REGISTERED: &str = "Registered! Please log in";
const LOGOUT_FAILED: &str = "Logout failed, please retry";
pub const GUEST_SCORE_NOTICE: &str = "Guest mode: score not saved. Log in to keep your results!";

/// Runs UI commands against the API. Each command gets its own task so a slow
/// request never holds up the others; `wake` repaints the UI after each one.
pub async fn api_client_task(
    api: ApiClient,
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    wake: impl Fn() + Send + Sync + 'static,
) {
    let wake = Arc::new(wake);

    while let Some(command) = command_rx.recv().await {
        log!("Handling command {}", command.name());
        let api = api.clone();
        let shared_state = shared_state.clone();
        let wake = Arc::clone(&wake);
        tokio::spawn(async move {
            handle_command(&api, &shared_state, command).await;
            wake();
        });
    }

    log!("Command channel closed, API task exiting");
}

pub async fn handle_command(api: &ApiClient, shared_state: &SharedState, command: ClientCommand) {
    match command {
        ClientCommand::Login(credentials) => login(api, shared_state, &credentials).await,
        ClientCommand::Register(credentials) => register(api, shared_state, &credentials).await,
        ClientCommand::Logout => logout(api, shared_state).await,
        ClientCommand::LoadHome => load_home(api, shared_state).await,
        ClientCommand::LoadLeaderboard => {
            let result = api.leaderboard().await;
            if let Err(e) = &result {
                log_warn!("Leaderboard load failed: {}", e);
            }
            shared_state.set_leaderboard(full_leaderboard(result.as_deref(), &Local::now()));
        }
        ClientCommand::LoadRecords => {
            let page = match api.my_records().await {
                Ok(records) => records_page(&records, &Local::now()),
                Err(e) => {
                    log_warn!("Records load failed: {}", e);
                    records_unavailable()
                }
            };
            shared_state.set_records(page);
        }
        ClientCommand::LoadBestScore => load_best_score(api, shared_state).await,
        ClientCommand::SubmitScore(score) => submit_score(api, shared_state, score).await,
    }
}

async fn login(api: &ApiClient, shared_state: &SharedState, credentials: &Credentials) {
    match api.login(credentials).await {
        Ok(response) => {
            log!("Logged in as {}", response.username);
            shared_state.show_notice(NoticeKind::Success, format!("Welcome back, {}!", response.username));
            shared_state.set_username(Some(response.username));
            shared_state.finish_auth(None);
            shared_state.request_redirect(Page::Home);
        }
        Err(e) => {
            log_warn!("Login failed: {}", e);
            shared_state.finish_auth(Some(e.form_message(LOGIN_FAILED)));
        }
    }
}

async fn register(api: &ApiClient, shared_state: &SharedState, credentials: &Credentials) {
    match api.register(credentials).await {
        Ok(()) => {
            log!("Registered {}", credentials.username);
            shared_state.show_notice(NoticeKind::Success, REGISTERED);
            shared_state.finish_auth(None);
            shared_state.request_redirect(Page::Login);
        }
        Err(e) => {
            log_warn!("Registration failed: {}", e);
            shared_state.finish_auth(Some(e.form_message(REGISTRATION_FAILED)));
        }
    }
}

async fn logout(api: &ApiClient, shared_state: &SharedState) {
    match api.logout().await {
        Ok(()) => {
            shared_state.set_username(None);
            shared_state.request_redirect(Page::Home);
        }
        Err(e) => {
            log_warn!("Logout failed: {}", e);
            shared_state.show_notice(NoticeKind::Error, LOGOUT_FAILED);
        }
    }
}

async fn load_status(api: &ApiClient) -> (Result<MeResponse, ApiError>, Option<Result<MyRecords, ApiError>>) {
    let me = api.me().await;
    let records = match &me {
        Ok(me) if me.logged_in => Some(api.my_records().await),
        _ => None,
    };
    (me, records)
}

async fn load_home(api: &ApiClient, shared_state: &SharedState) {
    let (leaderboard, (me, records)) = tokio::join!(api.leaderboard(), load_status(api));

    if let Err(e) = &leaderboard {
        log_warn!("Home leaderboard load failed: {}", e);
    }
    match &me {
        Ok(me) => shared_state.set_username(me.username.clone().filter(|_| me.logged_in)),
        Err(e) => log_warn!("Session check failed: {}", e),
    }
    if let Some(Err(e)) = &records {
        log_warn!("Status records load failed: {}", e);
    }

    let status = StatusCard::resolve(me.as_ref(), records.as_ref().map(Result::as_ref));
    shared_state.set_home(home_leaderboard(leaderboard.as_deref(), &Local::now()), status);
}

/// A guest has no best score on the server, so a 401 clears the shown value
/// rather than leaving the previous player's.
async fn load_best_score(api: &ApiClient, shared_state: &SharedState) {
    let username = shared_state.username();
    let best_score = match api.my_records().await {
        Ok(records) => records.best_score,
        Err(e) if e.is_unauthorized() => 0,
        Err(e) => {
            log!("Best score not loaded: {}", e);
            return;
        }
    };
    shared_state.set_best_score(LoadedBestScore { username, best_score });
}

async fn submit_score(api: &ApiClient, shared_state: &SharedState, score: u32) {
    match api.submit_score(score).await {
        Ok(response) if response.was_rejected_as_guest() => {
            log!("Score {} not saved, playing as guest", score);
            shared_state.show_notice(NoticeKind::Info, GUEST_SCORE_NOTICE);
        }
        Ok(_) => log!("Score {} saved", score),
        Err(e) => log_warn!("Score {} submission failed: {}", score, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::tests::{FakeServer, client_for, spawn_fake_server};
    use common::views::PanelView;

    fn credentials(password: &str) -> Credentials {
        Credentials { username: "alice".to_string(), password: password.to_string() }
    }

    #[tokio::test]
    async fn test_login_success_greets_and_redirects_home() {
        let api = client_for(&spawn_fake_server(FakeServer::default()).await);
        let state = SharedState::new();
        state.begin_auth();

        handle_command(&api, &state, ClientCommand::Login(credentials("secret"))).await;

        assert_eq!(state.username().as_deref(), Some("alice"));
        assert_eq!(state.take_redirect(), Some(Page::Home));
        assert!(!state.auth_status().in_flight);
        assert_eq!(state.notice().unwrap().text, "Welcome back, alice!");
    }

    #[tokio::test]
    async fn test_login_failure_shows_server_error() {
        let api = client_for(&spawn_fake_server(FakeServer::default()).await);
        let state = SharedState::new();

        handle_command(&api, &state, ClientCommand::Login(credentials("bad"))).await;

        assert_eq!(state.auth_status().error.as_deref(), Some("Wrong username or password"));
        assert_eq!(state.take_redirect(), None);
        assert!(state.username().is_none());
    }

    #[tokio::test]
    async fn test_register_success_opens_login() {
        let api = client_for(&spawn_fake_server(FakeServer::default()).await);
        let state = SharedState::new();

        handle_command(&api, &state, ClientCommand::Register(credentials("abcd"))).await;

        assert_eq!(state.take_redirect(), Some(Page::Login));
        assert_eq!(state.notice().unwrap().text, REGISTERED);
    }

    #[tokio::test]
    async fn test_guest_score_raises_notice() {
        let api = client_for(&spawn_fake_server(FakeServer::default()).await);
        let state = SharedState::new();

        handle_command(&api, &state, ClientCommand::SubmitScore(5)).await;

        let notice = state.notice().unwrap();
        assert_eq!(notice.text, GUEST_SCORE_NOTICE);
        assert_eq!(notice.kind, NoticeKind::Info);
    }

    #[tokio::test]
    async fn test_saved_score_is_silent() {
        let server = FakeServer::default();
        let api = client_for(&spawn_fake_server(server.clone()).await);
        let state = SharedState::new();
        api.login(&credentials("secret")).await.unwrap();

        handle_command(&api, &state, ClientCommand::SubmitScore(11)).await;

        assert!(state.notice().is_none());
        assert_eq!(*server.scores.lock().unwrap(), vec![11]);
    }

    #[tokio::test]
    async fn test_home_for_guest_and_player() {
        let api = client_for(&spawn_fake_server(FakeServer::default()).await);
        let state = SharedState::new();

        handle_command(&api, &state, ClientCommand::LoadHome).await;
        assert_eq!(state.status_card(), Some(StatusCard::Guest));
        assert_eq!(state.home_leaderboard().unwrap().rows().len(), 2);

        api.login(&credentials("secret")).await.unwrap();
        handle_command(&api, &state, ClientCommand::LoadHome).await;
        assert!(matches!(state.status_card(), Some(StatusCard::Player { best_score: 12, total_games: 3, .. })));
        assert_eq!(state.username().as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_records_locked_until_login() {
        let api = client_for(&spawn_fake_server(FakeServer::default()).await);
        let state = SharedState::new();

        handle_command(&api, &state, ClientCommand::LoadRecords).await;
        assert_eq!(state.records(), Some(records_unavailable()));

        api.login(&credentials("secret")).await.unwrap();
        handle_command(&api, &state, ClientCommand::LoadRecords).await;
        let page = state.records().unwrap();
        assert_eq!(page.stats.map(|s| s.login_count), Some(1));
        assert_eq!(page.scores.rows().len(), 1);
    }

    #[tokio::test]
    async fn test_logout_clears_user() {
        let api = client_for(&spawn_fake_server(FakeServer::default()).await);
        let state = SharedState::new();
        api.login(&credentials("secret")).await.unwrap();
        state.set_username(Some("alice".into()));

        handle_command(&api, &state, ClientCommand::Logout).await;

        assert!(state.username().is_none());
        assert_eq!(state.take_redirect(), Some(Page::Home));
    }

    #[tokio::test]
    async fn test_unreachable_leaderboard_shows_load_failed() {
        let api = client_for("http://127.0.0.1:9");
        let state = SharedState::new();
        handle_command(&api, &state, ClientCommand::LoadLeaderboard).await;
        assert_eq!(state.leaderboard(), Some(PanelView::Failed("Load failed")));
    }

    #[tokio::test]
    async fn test_best_score_loaded_for_player() {
        let api = client_for(&spawn_fake_server(FakeServer::default()).await);
        let state = SharedState::new();
        api.login(&credentials("secret")).await.unwrap();
        state.set_username(Some("alice".into()));
        handle_command(&api, &state, ClientCommand::LoadBestScore).await;
        assert_eq!(
            state.take_best_score(),
            Some(LoadedBestScore { username: Some("alice".into()), best_score: 12 })
        );
    }

    #[tokio::test]
    async fn test_guest_best_score_is_zero_after_logout() {
        let api = client_for(&spawn_fake_server(FakeServer::default()).await);
        let state = SharedState::new();
        handle_command(&api, &state, ClientCommand::Login(credentials("secret"))).await;
        handle_command(&api, &state, ClientCommand::LoadBestScore).await;
        assert_eq!(state.take_best_score().map(|b| b.best_score), Some(12));

        handle_command(&api, &state, ClientCommand::Logout).await;
        handle_command(&api, &state, ClientCommand::LoadBestScore).await;
        assert_eq!(state.take_best_score(), Some(LoadedBestScore { username: None, best_score: 0 }));
    }
}
