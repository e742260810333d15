use crate::games::{SessionRng, TickScheduler};
use crate::log;
use super::game_state::{GameSession, StepOutcome};
use super::input::InputAction;
use super::render::{GameView, Renderer};
use super::settings::SnakeSettings;
use super::types::{DeathReason, GameState};

/// Receives the final score of every finished run. Implementations must not
/// block: the call happens inside the tick.
pub trait ScoreReporter {
    fn submit(&mut self, score: u32);
}

/// The game page: owns the state machine, the trigger that drives it, and the
/// capabilities it draws and reports through.
pub struct SnakeGame<S, R, D>
where
    S: TickScheduler,
    R: ScoreReporter,
    D: Renderer,
{
    settings: SnakeSettings,
    state: GameState,
    session: Option<GameSession>,
    best_score: u32,
    rng: SessionRng,
    scheduler: S,
    reporter: R,
    renderer: D,
}

impl<S, R, D> SnakeGame<S, R, D>
where
    S: TickScheduler,
    R: ScoreReporter,
    D: Renderer,
{
    pub fn new(settings: SnakeSettings, rng: SessionRng, scheduler: S, reporter: R, renderer: D) -> Self {
        let mut game = Self {
            settings,
            state: GameState::Idle,
            session: None,
            best_score: 0,
            rng,
            scheduler,
            reporter,
            renderer,
        };
        game.redraw();
        game
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.session.as_ref().map(GameSession::score).unwrap_or(0)
    }

    pub fn snake_len(&self) -> usize {
        self.session.as_ref().map(|s| s.snake().len()).unwrap_or(0)
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Applies a best score fetched from the server. A late response never
    /// lowers a value the current page already beat.
    pub fn set_best_score(&mut self, best_score: u32) {
        self.best_score = self.best_score.max(best_score);
    }

    /// Forgets the best score, e.g. when a different player takes over the
    /// page. The next server value is applied as is.
    pub fn reset_best_score(&mut self) {
        self.best_score = 0;
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn renderer(&self) -> &D {
        &self.renderer
    }

    pub fn view(&self) -> GameView<'_> {
        GameView {
            state: self.state,
            session: self.session.as_ref(),
        }
    }

    pub fn start(&mut self) {
        self.scheduler.cancel();
        let session = GameSession::new(&self.settings, &mut self.rng);
        let interval = session.interval();
        self.session = Some(session);
        self.state = GameState::Playing;
        self.scheduler.arm(interval);
        log!("Game started, tick interval {}ms", interval.as_millis());
        self.redraw();
    }

    pub fn toggle_pause(&mut self) {
        match self.state {
            GameState::Playing => {
                self.scheduler.cancel();
                self.state = GameState::Paused;
                self.redraw();
            }
            GameState::Paused => {
                if let Some(session) = &self.session {
                    self.scheduler.arm(session.interval());
                    self.state = GameState::Playing;
                    self.redraw();
                }
            }
            GameState::Idle | GameState::GameOver => {}
        }
    }

    /// The Space key / start button.
    pub fn activate(&mut self) {
        match self.state {
            GameState::Idle | GameState::GameOver => self.start(),
            GameState::Playing | GameState::Paused => self.toggle_pause(),
        }
    }

    pub fn handle_action(&mut self, action: InputAction) {
        match action {
            InputAction::Turn(direction) => {
                if let Some(session) = &mut self.session {
                    session.queue_direction(direction);
                }
            }
            InputAction::Activate => self.activate(),
        }
    }

    /// One simulation step. Stray ticks outside `Playing` are ignored.
    pub fn tick(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        let Some(session) = &mut self.session else {
            return;
        };

        match session.step(&self.settings, &mut self.rng) {
            StepOutcome::Died(reason) => {
                self.game_over(reason);
                return;
            }
            StepOutcome::Ate { speed_changed } => {
                self.best_score = self.best_score.max(session.score());
                if speed_changed {
                    self.scheduler.arm(session.interval());
                }
            }
            StepOutcome::Moved => {}
        }

        self.redraw();
    }

    fn game_over(&mut self, reason: DeathReason) {
        self.scheduler.cancel();
        self.state = GameState::GameOver;

        let score = self.score();
        self.reporter.submit(score);
        self.best_score = self.best_score.max(score);

        log!(
            "Game over ({:?}): score {}, length {}",
            reason,
            score,
            self.snake_len()
        );
        self.redraw();
    }

    fn redraw(&mut self) {
        let view = GameView {
            state: self.state,
            session: self.session.as_ref(),
        };
        self.renderer.draw(&view);
    }
}
