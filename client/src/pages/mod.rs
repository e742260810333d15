mod auth;
mod game;
mod home;
mod leaderboard;
mod records;

pub use auth::{AuthMode, AuthPage};
pub use game::GamePage;
pub use home::render_home;
pub use leaderboard::render_leaderboard;
pub use records::render_records;

use common::views::{LeaderboardRow, PanelView};
use eframe::egui;

/// Spinner while loading, placeholder when empty, rows otherwise.
fn render_panel<T>(ui: &mut egui::Ui, panel: Option<&PanelView<T>>, rows: impl FnOnce(&mut egui::Ui, &[T])) {
    match panel {
        None => {
            ui.vertical_centered(|ui| ui.spinner());
        }
        Some(PanelView::Rows(items)) => rows(ui, items),
        Some(PanelView::Empty { icon, message }) => {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(*icon).size(32.0));
                ui.label(*message);
            });
        }
        Some(PanelView::Failed(message)) => {
            ui.vertical_centered(|ui| ui.weak(*message));
        }
    }
}

fn leaderboard_grid(ui: &mut egui::Ui, id: &str, rows: &[LeaderboardRow], with_time: bool) {
    egui::Grid::new(id).striped(true).num_columns(4).show(ui, |ui| {
        ui.strong("Rank");
        ui.strong("Player");
        ui.strong("Score");
        if with_time {
            ui.strong("Time");
        }
        ui.end_row();

        for row in rows {
            ui.label(row.badge.label());
            ui.label(egui::RichText::new(&row.username).strong());
            ui.label(egui::RichText::new(row.score.to_string()).color(egui::Color32::from_rgb(0x16, 0xa3, 0x4a)));
            if with_time {
                ui.weak(&row.played_at);
            }
            ui.end_row();
        }
    });
}
