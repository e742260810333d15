use super::game_state::GameSession;
use super::scene::{Scene, build_scene};
use super::settings::GRID_SIZE;
use super::types::{Direction, GameState, Point};

/// Everything a renderer may look at. Borrowed, so drawing can never mutate
/// the simulation.
#[derive(Clone, Copy)]
pub struct GameView<'a> {
    pub state: GameState,
    pub session: Option<&'a GameSession>,
}

pub trait Renderer {
    fn draw(&mut self, view: &GameView<'_>);
}

/// Keeps the latest scene so a retained-mode UI can repaint it every frame
/// without running its own animation clock.
#[derive(Default)]
pub struct SceneRenderer {
    scene: Scene,
    frames: u64,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for SceneRenderer {
    fn draw(&mut self, view: &GameView<'_>) {
        self.scene = build_scene(view);
        self.frames += 1;
    }
}

/// Character-cell backend. One row per grid line plus a status line.
#[derive(Default)]
pub struct AsciiRenderer {
    frame: String,
    frames: u64,
}

impl AsciiRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

fn head_char(direction: Direction) -> char {
    match direction {
        Direction::Up => '^',
        Direction::Down => 'v',
        Direction::Left => '<',
        Direction::Right => '>',
    }
}

impl Renderer for AsciiRenderer {
    fn draw(&mut self, view: &GameView<'_>) {
        let size = GRID_SIZE as usize;
        let mut grid = vec![vec!['.'; size]; size];

        if let Some(session) = view.session {
            if let Some(Point { x, y }) = session.food() {
                grid[y as usize][x as usize] = '*';
            }
            for (index, segment) in session.snake().segments().enumerate() {
                let ch = if index == 0 { head_char(session.direction()) } else { 'o' };
                grid[segment.y as usize][segment.x as usize] = ch;
            }
        }

        let mut frame = String::with_capacity((size + 1) * (size + 1));
        for row in grid {
            frame.extend(row);
            frame.push('\n');
        }

        let score = view.session.map(|s| s.score()).unwrap_or(0);
        let status = match view.state {
            GameState::Idle => "IDLE".to_string(),
            GameState::Playing => format!("SCORE {}", score),
            GameState::Paused => format!("PAUSED {}", score),
            GameState::GameOver => format!("GAME OVER {}", score),
        };
        frame.push_str(&status);

        self.frame = frame;
        self.frames += 1;
    }
}

#[derive(Default)]
pub struct NullRenderer {
    frames: u64,
}

impl NullRenderer {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for NullRenderer {
    fn draw(&mut self, _view: &GameView<'_>) {
        self.frames += 1;
    }
}
