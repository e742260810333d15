mod api_client;
mod client;
mod config;
mod pages;
mod painter;
mod reporter;
mod state;
mod ui;

use common::games::snake::SnakeSettings;
use common::log;
use common::logger::init_logger;
use eframe::egui;
use tokio::sync::mpsc;

use api_client::ApiClient;
use client::api_client_task;
use config::get_config_loader;
use state::SharedState;
use ui::ArcadeApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger(Some("client".to_string()));

    let config = get_config_loader().load_or_default();
    log!("Using API at {}", config.api.base_url);

    let runtime = tokio::runtime::Runtime::new()?;
    let handle = runtime.handle().clone();
    let api = ApiClient::new(&config.api)?;
    let settings = SnakeSettings::from(&config.game);

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 820.0])
            .with_title("Snake Arcade"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake Arcade",
        options,
        Box::new(move |cc| {
            let repaint_ctx = cc.egui_ctx.clone();
            handle.spawn(api_client_task(
                api,
                shared_state.clone(),
                command_rx,
                move || repaint_ctx.request_repaint(),
            ));
            Ok(Box::new(ArcadeApp::new(
                &cc.egui_ctx,
                shared_state,
                command_tx,
                handle,
                settings,
            )))
        }),
    )?;

    drop(runtime);
    Ok(())
}
