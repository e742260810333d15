use common::views::{GUEST_HINT, GUEST_STATUS, StatusCard};
use eframe::egui;

use crate::state::{Page, SharedState};
use super::{leaderboard_grid, render_panel};

fn render_status(ui: &mut egui::Ui, card: Option<&StatusCard>) -> Option<Page> {
    let mut navigate = None;
    ui.strong("My status");
    match card {
        None => {
            ui.spinner();
        }
        Some(StatusCard::Guest) => {
            ui.label(GUEST_STATUS);
            ui.weak(GUEST_HINT);
            if ui.button("Log in").clicked() {
                navigate = Some(Page::Login);
            }
        }
        Some(StatusCard::Player { best_score, total_games, progress_percent, .. }) => {
            egui::Grid::new("home_status_grid").num_columns(2).show(ui, |ui| {
                ui.label("Best score");
                ui.strong(best_score.to_string());
                ui.end_row();
                ui.label("Games played");
                ui.strong(total_games.to_string());
                ui.end_row();
            });
            ui.add_space(6.0);
            ui.label("Challenge: reach 50 points");
            ui.add(
                egui::ProgressBar::new(progress_percent / 100.0)
                    .text(format!("{:.0}%", progress_percent)),
            );
        }
    }
    navigate
}

pub fn render_home(ui: &mut egui::Ui, shared_state: &SharedState) -> Option<Page> {
    let mut navigate = None;

    ui.vertical_centered(|ui| {
        ui.heading(egui::RichText::new("🐍 Snake Arcade").size(32.0));
        ui.label("Eat, grow, and don't bite yourself.");
        ui.add_space(8.0);
        if ui.button(egui::RichText::new("▶ Start game").size(20.0)).clicked() {
            navigate = Some(Page::Game);
        }
    });
    ui.add_space(16.0);

    let leaderboard = shared_state.home_leaderboard();
    let status = shared_state.status_card();

    ui.columns(2, |columns| {
        columns[0].strong("🏆 Top players");
        render_panel(&mut columns[0], leaderboard.as_ref(), |ui, rows| {
            leaderboard_grid(ui, "home_leaderboard_grid", rows, false);
        });
        if columns[0].link("Full leaderboard →").clicked() {
            navigate = Some(Page::Leaderboard);
        }

        if let Some(page) = render_status(&mut columns[1], status.as_ref()) {
            navigate = Some(page);
        }
    });

    navigate
}
