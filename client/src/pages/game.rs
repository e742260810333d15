use common::games::snake::{
    CANVAS_SIZE, GameState, InputAction, KeyPress, SceneRenderer, SnakeGame, SnakeSettings, map_key, map_swipe,
};
use common::games::{SessionRng, TickScheduler, TickSignal, TokioTickScheduler};
use eframe::egui;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::painter::{CanvasTransform, paint_scene};
use crate::reporter::ApiScoreReporter;
use crate::state::{ClientCommand, SharedState};

type ArcadeGame = SnakeGame<TokioTickScheduler, ApiScoreReporter, SceneRenderer>;

pub fn key_press(key: egui::Key) -> Option<KeyPress> {
    let press = match key {
        egui::Key::ArrowUp => KeyPress::ArrowUp,
        egui::Key::ArrowDown => KeyPress::ArrowDown,
        egui::Key::ArrowLeft => KeyPress::ArrowLeft,
        egui::Key::ArrowRight => KeyPress::ArrowRight,
        egui::Key::Space => KeyPress::Space,
        egui::Key::W => KeyPress::Char('w'),
        egui::Key::A => KeyPress::Char('a'),
        egui::Key::S => KeyPress::Char('s'),
        egui::Key::D => KeyPress::Char('d'),
        _ => return None,
    };
    Some(press)
}

fn button_label(state: GameState) -> &'static str {
    match state {
        GameState::Idle => "▶ Start",
        GameState::Playing => "⏸ Pause",
        GameState::Paused => "▶ Resume",
        GameState::GameOver => "🔄 Play again",
    }
}

pub struct GamePage {
    game: ArcadeGame,
    tick_rx: mpsc::UnboundedReceiver<TickSignal>,
    swipe_origin: Option<egui::Pos2>,
    best_owner: Option<String>,
}

impl GamePage {
    pub fn new(
        ctx: &egui::Context,
        runtime: Handle,
        settings: SnakeSettings,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
    ) -> Self {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let repaint_ctx = ctx.clone();
        let scheduler = TokioTickScheduler::new(runtime, tick_tx).with_wake(move || repaint_ctx.request_repaint());

        Self {
            game: SnakeGame::new(
                settings,
                SessionRng::from_random(),
                scheduler,
                ApiScoreReporter::new(command_tx),
                SceneRenderer::new(),
            ),
            tick_rx,
            swipe_origin: None,
            best_owner: None,
        }
    }

    /// Leaving the page mid-run pauses instead of playing on unseen.
    pub fn on_leave(&mut self) {
        if self.game.state() == GameState::Playing {
            self.game.toggle_pause();
        }
        self.swipe_origin = None;
    }

    /// The best score belongs to whoever is logged in: a login, logout or
    /// session change drops it, and answers loaded for someone else are ignored.
    fn sync_best_score(&mut self, shared_state: &SharedState) {
        let username = shared_state.username();
        if username != self.best_owner {
            self.game.reset_best_score();
            self.best_owner = username;
        }
        if let Some(loaded) = shared_state.take_best_score()
            && loaded.username == self.best_owner
        {
            self.game.set_best_score(loaded.best_score);
        }
    }

    /// One simulation step per frame at most, however many signals piled up.
    fn pump_ticks(&mut self) {
        let mut due = false;
        while let Ok(signal) = self.tick_rx.try_recv() {
            due |= self.game.scheduler().accepts(signal);
        }
        if due {
            self.game.tick();
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.memory(|m| m.focused().is_some()) {
            return;
        }
        let actions: Vec<InputAction> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key { key, pressed: true, repeat: false, .. } => key_press(*key),
                    _ => None,
                })
                .filter_map(map_key)
                .collect()
        });
        for action in actions {
            self.game.handle_action(action);
        }
    }

    fn handle_swipe(&mut self, ui: &egui::Ui, response: &egui::Response) {
        if response.drag_started() {
            self.swipe_origin = ui.input(|i| i.pointer.press_origin());
        }
        if response.drag_stopped() {
            let end = ui.input(|i| i.pointer.latest_pos());
            if let (Some(start), Some(end)) = (self.swipe_origin.take(), end)
                && let Some(direction) = map_swipe(end.x - start.x, end.y - start.y)
            {
                self.game.handle_action(InputAction::Turn(direction));
            }
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, shared_state: &SharedState) {
        self.sync_best_score(shared_state);
        self.pump_ticks();
        self.handle_keys(ctx);

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("Score {}", self.game.score())).size(18.0).strong());
            ui.separator();
            ui.label(egui::RichText::new(format!("Best {}", self.game.best_score())).size(18.0));
            ui.separator();
            ui.label(egui::RichText::new(format!("Length {}", self.game.snake_len())).size(18.0));
            if let Some(interval) = self.game.scheduler().interval() {
                ui.separator();
                ui.weak(format!("{} ms/tick", interval.as_millis()));
            }
        });
        ui.add_space(6.0);

        let side = ui.available_width().min(CANVAS_SIZE);
        let (response, painter) = ui.allocate_painter(egui::vec2(side, side), egui::Sense::click_and_drag());
        let transform = CanvasTransform {
            origin: response.rect.min,
            scale: side / CANVAS_SIZE,
        };
        paint_scene(&painter, transform, self.game.renderer().scene());
        self.handle_swipe(ui, &response);

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let button = ui.button(egui::RichText::new(button_label(self.game.state())).size(18.0));
            if button.clicked() {
                self.game.activate();
                // A focused button would swallow the next Space press.
                button.surrender_focus();
            }
            ui.weak("Arrows / WASD to steer, Space to pause, swipe on touch screens");
        });
    }
}
