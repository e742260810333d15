use common::views::{RecordStats, ScoreRow};
use eframe::egui;

use crate::state::SharedState;
use super::render_panel;

fn stat_tile(ui: &mut egui::Ui, label: &str, value: Option<String>) {
    ui.group(|ui| {
        ui.set_min_width(120.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(value.unwrap_or_else(|| "-".to_string())).size(24.0).strong());
            ui.weak(label);
        });
    });
}

fn render_stats(ui: &mut egui::Ui, stats: Option<RecordStats>) {
    ui.horizontal(|ui| {
        stat_tile(ui, "Best score", stats.map(|s| s.best_score.to_string()));
        stat_tile(ui, "Games played", stats.map(|s| s.total_games.to_string()));
        stat_tile(ui, "Logins", stats.map(|s| s.login_count.to_string()));
    });
}

fn score_table(ui: &mut egui::Ui, rows: &[ScoreRow]) {
    egui::Grid::new("my_scores_grid").striped(true).num_columns(3).show(ui, |ui| {
        ui.strong("#");
        ui.strong("Score");
        ui.strong("Time");
        ui.end_row();
        for row in rows {
            ui.weak(row.index.to_string());
            ui.strong(row.score.to_string());
            ui.label(&row.played_at);
            ui.end_row();
        }
    });
}

pub fn render_records(ui: &mut egui::Ui, shared_state: &SharedState) {
    ui.heading("📊 My records");
    ui.separator();

    let Some(page) = shared_state.records() else {
        ui.vertical_centered(|ui| ui.spinner());
        return;
    };

    render_stats(ui, page.stats);
    ui.add_space(12.0);

    ui.columns(2, |columns| {
        columns[0].strong("Games");
        egui::ScrollArea::vertical()
            .id_salt("my_scores_scroll")
            .show(&mut columns[0], |ui| render_panel(ui, Some(&page.scores), score_table));

        columns[1].strong("Login history");
        render_panel(&mut columns[1], Some(&page.timeline), |ui, times| {
            for time in times {
                ui.label(format!("🕐 {}", time));
            }
        });
    });
}
