use super::render::GameView;
use super::settings::{CANVAS_SIZE, CELL_SIZE, GRID_SIZE};
use super::types::{Direction, GameState, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// 0.0 (transparent) ..= 1.0 (opaque)
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

pub mod palette {
    use super::Rgba;

    pub const BG_DARK: Rgba = Rgba::rgb(0x0f, 0x17, 0x2a);
    pub const GRID_LINE: Rgba = Rgba::rgba(148, 163, 184, 0.08);
    pub const SNAKE_HEAD: Rgba = Rgba::rgb(0x4a, 0xde, 0x80);
    pub const SNAKE_HEAD_GLOW: Rgba = Rgba::rgba(74, 222, 128, 0.4);
    pub const SNAKE_BODY: Rgba = Rgba::rgb(0x22, 0xc5, 0x5e);
    pub const SNAKE_BODY_ALT: Rgba = Rgba::rgb(0x16, 0xa3, 0x4a);
    pub const FOOD: Rgba = Rgba::rgb(0xf4, 0x3f, 0x5e);
    pub const FOOD_EDGE: Rgba = Rgba::rgb(0xe1, 0x1d, 0x48);
    pub const FOOD_GLOW: Rgba = Rgba::rgba(244, 63, 94, 0.5);
    pub const FOOD_HIGHLIGHT: Rgba = Rgba::rgb(0xfd, 0xa4, 0xaf);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TEXT_MUTED: Rgba = Rgba::rgba(255, 255, 255, 0.5);
    pub const OVERLAY: Rgba = Rgba::rgba(15, 23, 42, 0.7);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    Solid(Rgba),
    /// Top-left to bottom-right for rectangles, centre to edge for circles.
    Gradient { from: Rgba, to: Rgba },
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect { x: f32, y: f32, w: f32, h: f32, radius: f32, fill: Fill },
    Line { from: (f32, f32), to: (f32, f32), width: f32, color: Rgba },
    Circle { cx: f32, cy: f32, radius: f32, fill: Fill },
    /// Soft halo drawn under a shape, `blur` in pixels.
    Glow { cx: f32, cy: f32, radius: f32, blur: f32, color: Rgba },
    Text { x: f32, y: f32, text: String, size: f32, bold: bool, color: Rgba },
}

/// Drawing commands in canvas coordinates (`CANVAS_SIZE` square), painted in
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

const SEGMENT_PADDING: f32 = 2.0;
const EYE_RADIUS: f32 = 3.0;
const PUPIL_RADIUS: f32 = 1.5;

pub fn build_scene(view: &GameView<'_>) -> Scene {
    let mut scene = Scene::default();
    draw_background(&mut scene);

    let Some(session) = view.session else {
        draw_idle_hint(&mut scene);
        return scene;
    };

    if let Some(food) = session.food() {
        draw_food(&mut scene, food, session.pulse_phase());
    }

    let segments: Vec<Point> = session.snake().segments().copied().collect();
    draw_snake(&mut scene, &segments, session.direction());

    match view.state {
        GameState::Idle => draw_idle_hint(&mut scene),
        GameState::Playing => {}
        GameState::Paused => draw_pause_overlay(&mut scene),
        GameState::GameOver => draw_game_over_overlay(&mut scene, session.score()),
    }

    scene
}

fn draw_background(scene: &mut Scene) {
    scene.push(DrawCommand::Rect {
        x: 0.0,
        y: 0.0,
        w: CANVAS_SIZE,
        h: CANVAS_SIZE,
        radius: 0.0,
        fill: Fill::Solid(palette::BG_DARK),
    });

    for i in 0..=GRID_SIZE {
        let pos = i as f32 * CELL_SIZE;
        scene.push(DrawCommand::Line {
            from: (pos, 0.0),
            to: (pos, CANVAS_SIZE),
            width: 0.5,
            color: palette::GRID_LINE,
        });
        scene.push(DrawCommand::Line {
            from: (0.0, pos),
            to: (CANVAS_SIZE, pos),
            width: 0.5,
            color: palette::GRID_LINE,
        });
    }
}

fn draw_food(scene: &mut Scene, food: Point, pulse_phase: f32) {
    let cx = food.x as f32 * CELL_SIZE + CELL_SIZE / 2.0;
    let cy = food.y as f32 * CELL_SIZE + CELL_SIZE / 2.0;
    let base_radius = CELL_SIZE / 2.0 - 4.0;
    let pulse = pulse_phase.sin() * 2.0;

    scene.push(DrawCommand::Glow {
        cx,
        cy,
        radius: base_radius + pulse,
        blur: 16.0 + pulse * 2.0,
        color: palette::FOOD_GLOW,
    });
    scene.push(DrawCommand::Circle {
        cx,
        cy,
        radius: base_radius + pulse,
        fill: Fill::Gradient {
            from: palette::FOOD_HIGHLIGHT.lerp(palette::FOOD, 0.5),
            to: palette::FOOD_EDGE,
        },
    });
    scene.push(DrawCommand::Circle {
        cx: cx - 3.0,
        cy: cy - 3.0,
        radius: base_radius * 0.35,
        fill: Fill::Solid(palette::WHITE.with_alpha(0.4)),
    });
}

fn draw_snake(scene: &mut Scene, segments: &[Point], direction: Direction) {
    let len = segments.len() as f32;

    for (index, segment) in segments.iter().enumerate() {
        let x = segment.x as f32 * CELL_SIZE;
        let y = segment.y as f32 * CELL_SIZE;

        if index == 0 {
            draw_head(scene, x, y, direction);
            continue;
        }

        let progress = index as f32 / len;
        let alpha = 1.0 - progress * 0.4;
        let color = if index % 2 == 0 { palette::SNAKE_BODY } else { palette::SNAKE_BODY_ALT };
        let inset = SEGMENT_PADDING + progress * 2.0;
        let side = CELL_SIZE - inset * 2.0;

        scene.push(DrawCommand::Rect {
            x: x + inset,
            y: y + inset,
            w: side,
            h: side,
            radius: 5.0,
            fill: Fill::Solid(color.with_alpha(alpha)),
        });
        scene.push(DrawCommand::Rect {
            x: x + inset,
            y: y + inset,
            w: side,
            h: side * 0.4,
            radius: 5.0,
            fill: Fill::Solid(palette::WHITE.with_alpha(0.1 * alpha)),
        });
    }
}

fn draw_head(scene: &mut Scene, x: f32, y: f32, direction: Direction) {
    let side = CELL_SIZE - SEGMENT_PADDING * 2.0;

    scene.push(DrawCommand::Glow {
        cx: x + CELL_SIZE / 2.0,
        cy: y + CELL_SIZE / 2.0,
        radius: side / 2.0,
        blur: 12.0,
        color: palette::SNAKE_HEAD_GLOW,
    });
    scene.push(DrawCommand::Rect {
        x: x + SEGMENT_PADDING,
        y: y + SEGMENT_PADDING,
        w: side,
        h: side,
        radius: 6.0,
        fill: Fill::Gradient { from: palette::SNAKE_HEAD, to: palette::SNAKE_BODY },
    });

    let (dx, dy) = direction.delta();
    for (ex, ey) in eye_positions(x, y, direction) {
        scene.push(DrawCommand::Circle {
            cx: ex,
            cy: ey,
            radius: EYE_RADIUS,
            fill: Fill::Solid(palette::WHITE),
        });
        scene.push(DrawCommand::Circle {
            cx: ex + dx as f32,
            cy: ey + dy as f32,
            radius: PUPIL_RADIUS,
            fill: Fill::Solid(palette::BG_DARK),
        });
    }
}

/// Both eyes sit on the leading edge of the head.
pub fn eye_positions(x: f32, y: f32, direction: Direction) -> [(f32, f32); 2] {
    match direction {
        Direction::Right => [(x + CELL_SIZE - 8.0, y + 7.0), (x + CELL_SIZE - 8.0, y + CELL_SIZE - 7.0)],
        Direction::Left => [(x + 8.0, y + 7.0), (x + 8.0, y + CELL_SIZE - 7.0)],
        Direction::Up => [(x + 7.0, y + 8.0), (x + CELL_SIZE - 7.0, y + 8.0)],
        Direction::Down => [(x + 7.0, y + CELL_SIZE - 8.0), (x + CELL_SIZE - 7.0, y + CELL_SIZE - 8.0)],
    }
}

pub const IDLE_HINT: &str = "Press Space or Start to play";
pub const PAUSED_TITLE: &str = "⏸ Paused";
pub const PAUSED_HINT: &str = "Press Space to continue";
pub const GAME_OVER_TITLE: &str = "Game Over";
pub const GAME_OVER_HINT: &str = "Press Space to play again";

fn draw_idle_hint(scene: &mut Scene) {
    scene.push(DrawCommand::Text {
        x: CANVAS_SIZE / 2.0,
        y: CANVAS_SIZE / 2.0,
        text: IDLE_HINT.to_string(),
        size: 16.0,
        bold: false,
        color: palette::TEXT_MUTED,
    });
}

fn draw_dim(scene: &mut Scene) {
    scene.push(DrawCommand::Rect {
        x: 0.0,
        y: 0.0,
        w: CANVAS_SIZE,
        h: CANVAS_SIZE,
        radius: 0.0,
        fill: Fill::Solid(palette::OVERLAY),
    });
}

fn draw_pause_overlay(scene: &mut Scene) {
    draw_dim(scene);
    scene.push(DrawCommand::Text {
        x: CANVAS_SIZE / 2.0,
        y: CANVAS_SIZE / 2.0 - 10.0,
        text: PAUSED_TITLE.to_string(),
        size: 28.0,
        bold: true,
        color: palette::WHITE,
    });
    scene.push(DrawCommand::Text {
        x: CANVAS_SIZE / 2.0,
        y: CANVAS_SIZE / 2.0 + 20.0,
        text: PAUSED_HINT.to_string(),
        size: 16.0,
        bold: false,
        color: palette::TEXT_MUTED,
    });
}

fn draw_game_over_overlay(scene: &mut Scene, score: u32) {
    draw_dim(scene);
    scene.push(DrawCommand::Text {
        x: CANVAS_SIZE / 2.0,
        y: CANVAS_SIZE / 2.0 - 30.0,
        text: GAME_OVER_TITLE.to_string(),
        size: 28.0,
        bold: true,
        color: palette::WHITE,
    });
    scene.push(DrawCommand::Text {
        x: CANVAS_SIZE / 2.0,
        y: CANVAS_SIZE / 2.0 + 5.0,
        text: format!("{} points", score),
        size: 22.0,
        bold: true,
        color: palette::SNAKE_HEAD,
    });
    scene.push(DrawCommand::Text {
        x: CANVAS_SIZE / 2.0,
        y: CANVAS_SIZE / 2.0 + 35.0,
        text: GAME_OVER_HINT.to_string(),
        size: 16.0,
        bold: false,
        color: palette::TEXT_MUTED,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;
    use crate::games::snake::{GameSession, SnakeSettings};

    fn session() -> GameSession {
        GameSession::new(&SnakeSettings::default(), &mut SessionRng::new(42))
    }

    fn rects(scene: &Scene) -> Vec<(f32, f32, f32, Fill)> {
        scene
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { x, y, w, fill, .. } => Some((*x, *y, *w, *fill)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_idle_without_session_is_background_and_hint() {
        let scene = build_scene(&GameView { state: GameState::Idle, session: None });
        let lines = scene.commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. })).count();
        assert_eq!(lines, 2 * (GRID_SIZE as usize + 1));
        assert_eq!(scene.texts().collect::<Vec<_>>(), vec![IDLE_HINT]);
    }

    #[test]
    fn test_playing_has_no_overlay_text() {
        let session = session();
        let scene = build_scene(&GameView { state: GameState::Playing, session: Some(&session) });
        assert_eq!(scene.texts().count(), 0);
    }

    #[test]
    fn test_body_fades_and_shrinks_towards_tail() {
        let session = session();
        let scene = build_scene(&GameView { state: GameState::Playing, session: Some(&session) });
        let body: Vec<_> = rects(&scene)
            .into_iter()
            .filter(|(_, _, w, fill)| *w < CELL_SIZE && matches!(fill, Fill::Solid(c) if c.a > 0.5))
            .collect();
        assert_eq!(body.len(), 2);

        // segment 1 of 3 at (4,10), segment 2 at (3,10)
        let (x1, _, w1, Fill::Solid(c1)) = body[0] else { panic!("solid fill expected") };
        let (x2, _, w2, Fill::Solid(c2)) = body[1] else { panic!("solid fill expected") };
        assert!((x1 - (4.0 * CELL_SIZE + 2.0 + 2.0 / 3.0)).abs() < 1e-4);
        assert!((x2 - (3.0 * CELL_SIZE + 2.0 + 4.0 / 3.0)).abs() < 1e-4);
        assert!(w2 < w1);
        assert!(c2.a < c1.a);
        assert_eq!((c1.r, c1.g, c1.b), (palette::SNAKE_BODY_ALT.r, palette::SNAKE_BODY_ALT.g, palette::SNAKE_BODY_ALT.b));
        assert_eq!((c2.r, c2.g, c2.b), (palette::SNAKE_BODY.r, palette::SNAKE_BODY.g, palette::SNAKE_BODY.b));
    }

    #[test]
    fn test_eyes_face_direction_of_travel() {
        let right = eye_positions(0.0, 0.0, Direction::Right);
        assert!(right.iter().all(|(ex, _)| *ex > CELL_SIZE / 2.0));
        let up = eye_positions(0.0, 0.0, Direction::Up);
        assert!(up.iter().all(|(_, ey)| *ey < CELL_SIZE / 2.0));
    }

    #[test]
    fn test_paused_and_game_over_overlays() {
        let session = session();
        let paused = build_scene(&GameView { state: GameState::Paused, session: Some(&session) });
        assert_eq!(paused.texts().collect::<Vec<_>>(), vec![PAUSED_TITLE, PAUSED_HINT]);

        let over = build_scene(&GameView { state: GameState::GameOver, session: Some(&session) });
        assert_eq!(over.texts().collect::<Vec<_>>(), vec![GAME_OVER_TITLE, "0 points", GAME_OVER_HINT]);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let session = session();
        let view = GameView { state: GameState::Playing, session: Some(&session) };
        assert_eq!(build_scene(&view), build_scene(&view));
    }
}
