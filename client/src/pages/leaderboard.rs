use eframe::egui;

use crate::state::SharedState;
use super::{leaderboard_grid, render_panel};

pub fn render_leaderboard(ui: &mut egui::Ui, shared_state: &SharedState) {
    ui.heading("🏆 Leaderboard");
    ui.separator();

    let leaderboard = shared_state.leaderboard();
    egui::ScrollArea::vertical()
        .id_salt("leaderboard_scroll")
        .show(ui, |ui| {
            render_panel(ui, leaderboard.as_ref(), |ui, rows| {
                leaderboard_grid(ui, "leaderboard_grid", rows, true);
            });
        });
}
