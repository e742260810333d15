use common::games::snake::SnakeSettings;
use common::log_warn;
use eframe::egui;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::pages::{AuthMode, AuthPage, GamePage, render_home, render_leaderboard, render_records};
use crate::state::{ClientCommand, NOTICE_DURATION, NoticeKind, Page, SharedState};

pub struct ArcadeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    page: Page,
    game_page: GamePage,
    auth_page: AuthPage,
}

impl ArcadeApp {
    pub fn new(
        ctx: &egui::Context,
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
        runtime: Handle,
        settings: SnakeSettings,
    ) -> Self {
        let game_page = GamePage::new(ctx, runtime, settings, command_tx.clone());
        let mut app = Self {
            shared_state,
            command_tx,
            page: Page::Home,
            game_page,
            auth_page: AuthPage::new(),
        };
        app.navigate(Page::Home);
        app
    }

    fn send(&self, command: ClientCommand) {
        if self.command_tx.send(command).is_err() {
            log_warn!("API task is gone, command dropped");
        }
    }

    fn navigate(&mut self, page: Page) {
        if self.page == Page::Game && page != Page::Game {
            self.game_page.on_leave();
        }
        self.page = page;
        self.shared_state.clear_page(page);

        match page {
            Page::Home => self.send(ClientCommand::LoadHome),
            Page::Game => self.send(ClientCommand::LoadBestScore),
            Page::Leaderboard => self.send(ClientCommand::LoadLeaderboard),
            Page::Records => self.send(ClientCommand::LoadRecords),
            Page::Login | Page::Register => {
                self.auth_page.reset();
                self.shared_state.clear_auth_error();
            }
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) -> Option<Page> {
        let mut navigate = None;
        let username = self.shared_state.username();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("🐍 Snake Arcade");
                ui.separator();
                for (page, label) in [
                    (Page::Home, "Home"),
                    (Page::Game, "Play"),
                    (Page::Leaderboard, "Leaderboard"),
                    (Page::Records, "My records"),
                ] {
                    if ui.selectable_label(self.page == page, label).clicked() {
                        navigate = Some(page);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| match &username {
                    Some(name) => {
                        if ui.button("Log out").clicked() {
                            self.send(ClientCommand::Logout);
                        }
                        ui.label(format!("👤 {}", name));
                    }
                    None => {
                        if ui.selectable_label(self.page == Page::Register, "Register").clicked() {
                            navigate = Some(Page::Register);
                        }
                        if ui.selectable_label(self.page == Page::Login, "Log in").clicked() {
                            navigate = Some(Page::Login);
                        }
                    }
                });
            });
        });

        navigate
    }

    fn render_notice(&self, ctx: &egui::Context) {
        let Some(notice) = self.shared_state.notice() else {
            return;
        };
        let color = match notice.kind {
            NoticeKind::Success => egui::Color32::from_rgb(0x16, 0xa3, 0x4a),
            NoticeKind::Info => egui::Color32::from_rgb(0x25, 0x63, 0xeb),
            NoticeKind::Error => egui::Color32::from_rgb(0xe1, 0x1d, 0x48),
        };

        egui::Area::new(egui::Id::new("notice"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 48.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).fill(color).show(ui, |ui| {
                    ui.colored_label(egui::Color32::WHITE, notice.text.as_str());
                });
            });

        let remaining = NOTICE_DURATION.saturating_sub(notice.shown_at.elapsed());
        ctx.request_repaint_after(remaining);
    }
}

impl eframe::App for ArcadeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(page) = self.shared_state.take_redirect() {
            self.navigate(page);
        }

        let mut navigate = self.render_top_bar(ctx);
        self.render_notice(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let requested = match self.page {
                Page::Home => render_home(ui, &self.shared_state),
                Page::Game => {
                    self.game_page.render(ui, ctx, &self.shared_state);
                    None
                }
                Page::Leaderboard => {
                    render_leaderboard(ui, &self.shared_state);
                    None
                }
                Page::Records => {
                    render_records(ui, &self.shared_state);
                    None
                }
                Page::Login => self.auth_page.render(ui, AuthMode::Login, &self.shared_state, &self.command_tx),
                Page::Register => self.auth_page.render(ui, AuthMode::Register, &self.shared_state, &self.command_tx),
            };
            if requested.is_some() {
                navigate = requested;
            }
        });

        if let Some(page) = navigate {
            self.navigate(page);
        }
    }
}
