use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use common::api::Credentials;
use common::views::{LeaderboardRow, PanelView, RecordsPage, StatusCard};

pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Game,
    Leaderboard,
    Records,
    Login,
    Register,
}

#[derive(Clone)]
pub enum ClientCommand {
    Login(Credentials),
    Register(Credentials),
    Logout,
    LoadHome,
    LoadLeaderboard,
    LoadRecords,
    LoadBestScore,
    SubmitScore(u32),
}

impl ClientCommand {
    /// Loggable name; credentials never reach the log.
    pub fn name(&self) -> &'static str {
        match self {
            ClientCommand::Login(_) => "Login",
            ClientCommand::Register(_) => "Register",
            ClientCommand::Logout => "Logout",
            ClientCommand::LoadHome => "LoadHome",
            ClientCommand::LoadLeaderboard => "LoadLeaderboard",
            ClientCommand::LoadRecords => "LoadRecords",
            ClientCommand::LoadBestScore => "LoadBestScore",
            ClientCommand::SubmitScore(_) => "SubmitScore",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub shown_at: Instant,
}

impl Notice {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= NOTICE_DURATION
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthStatus {
    pub in_flight: bool,
    pub error: Option<String>,
}

#[derive(Default)]
struct AppData {
    username: Option<String>,
    notice: Option<Notice>,
    auth: AuthStatus,
    redirect: Option<Page>,
    home_leaderboard: Option<PanelView<LeaderboardRow>>,
    status_card: Option<StatusCard>,
    leaderboard: Option<PanelView<LeaderboardRow>>,
    records: Option<RecordsPage>,
    best_score: Option<LoadedBestScore>,
}

/// A best score fetched from the server, tagged with the user it was loaded
/// for so a late answer never lands on the next player's page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedBestScore {
    pub username: Option<String>,
    pub best_score: u32,
}

/// Written by the API task, read by the UI every frame.
#[derive(Clone, Default)]
pub struct SharedState {
    data: Arc<Mutex<AppData>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> Option<String> {
        self.data.lock().unwrap().username.clone()
    }

    pub fn set_username(&self, username: Option<String>) {
        self.data.lock().unwrap().username = username;
    }

    pub fn show_notice(&self, kind: NoticeKind, text: impl Into<String>) {
        self.data.lock().unwrap().notice = Some(Notice {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
        });
    }

    /// Current notice, dropping it once it has been on screen long enough.
    pub fn notice(&self) -> Option<Notice> {
        let mut data = self.data.lock().unwrap();
        if data.notice.as_ref().is_some_and(|n| n.is_expired(Instant::now())) {
            data.notice = None;
        }
        data.notice.clone()
    }

    pub fn auth_status(&self) -> AuthStatus {
        self.data.lock().unwrap().auth.clone()
    }

    pub fn begin_auth(&self) {
        self.data.lock().unwrap().auth = AuthStatus { in_flight: true, error: None };
    }

    pub fn finish_auth(&self, error: Option<String>) {
        self.data.lock().unwrap().auth = AuthStatus { in_flight: false, error };
    }

    pub fn clear_auth_error(&self) {
        self.data.lock().unwrap().auth.error = None;
    }

    pub fn request_redirect(&self, page: Page) {
        self.data.lock().unwrap().redirect = Some(page);
    }

    pub fn take_redirect(&self) -> Option<Page> {
        self.data.lock().unwrap().redirect.take()
    }

    pub fn set_home(&self, leaderboard: PanelView<LeaderboardRow>, status: StatusCard) {
        let mut data = self.data.lock().unwrap();
        data.home_leaderboard = Some(leaderboard);
        data.status_card = Some(status);
    }

    pub fn home_leaderboard(&self) -> Option<PanelView<LeaderboardRow>> {
        self.data.lock().unwrap().home_leaderboard.clone()
    }

    pub fn status_card(&self) -> Option<StatusCard> {
        self.data.lock().unwrap().status_card.clone()
    }

    pub fn set_leaderboard(&self, leaderboard: PanelView<LeaderboardRow>) {
        self.data.lock().unwrap().leaderboard = Some(leaderboard);
    }

    pub fn leaderboard(&self) -> Option<PanelView<LeaderboardRow>> {
        self.data.lock().unwrap().leaderboard.clone()
    }

    pub fn set_records(&self, records: RecordsPage) {
        self.data.lock().unwrap().records = Some(records);
    }

    pub fn records(&self) -> Option<RecordsPage> {
        self.data.lock().unwrap().records.clone()
    }

    pub fn set_best_score(&self, best_score: LoadedBestScore) {
        self.data.lock().unwrap().best_score = Some(best_score);
    }

    pub fn take_best_score(&self) -> Option<LoadedBestScore> {
        self.data.lock().unwrap().best_score.take()
    }

    /// Forgets page data so the next visit shows a spinner instead of stale
    /// rows.
    pub fn clear_page(&self, page: Page) {
        let mut data = self.data.lock().unwrap();
        match page {
            Page::Home => {
                data.home_leaderboard = None;
                data.status_card = None;
            }
            Page::Leaderboard => data.leaderboard = None,
            Page::Records => data.records = None,
            Page::Game | Page::Login | Page::Register => {}
        }
    }
}
