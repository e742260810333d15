mod food;
mod game;
mod game_state;
mod input;
mod render;
mod scene;
mod settings;
mod snake;
mod types;

pub use food::place_food;
pub use game::{ScoreReporter, SnakeGame};
pub use game_state::{GameSession, StepOutcome};
pub use input::{InputAction, KeyPress, SWIPE_THRESHOLD, map_key, map_swipe};
pub use render::{AsciiRenderer, GameView, NullRenderer, Renderer, SceneRenderer};
pub use scene::{DrawCommand, Fill, Rgba, Scene, build_scene, palette};
pub use settings::{CANVAS_SIZE, CELL_SIZE, GRID_SIZE, INITIAL_BODY, SnakeSettings};
pub use snake::Snake;
pub use types::{DeathReason, Direction, GameState, Point};
