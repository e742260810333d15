use super::types::Direction;

/// Minimum travel, in pixels, before a touch drag counts as a swipe.
pub const SWIPE_THRESHOLD: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPress {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Char(char),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Turn(Direction),
    /// Start from idle/game over, otherwise pause or resume.
    Activate,
}

pub fn map_key(key: KeyPress) -> Option<InputAction> {
    let action = match key {
        KeyPress::ArrowUp => InputAction::Turn(Direction::Up),
        KeyPress::ArrowDown => InputAction::Turn(Direction::Down),
        KeyPress::ArrowLeft => InputAction::Turn(Direction::Left),
        KeyPress::ArrowRight => InputAction::Turn(Direction::Right),
        KeyPress::Space | KeyPress::Char(' ') => InputAction::Activate,
        KeyPress::Char(c) => match c.to_ascii_lowercase() {
            'w' => InputAction::Turn(Direction::Up),
            's' => InputAction::Turn(Direction::Down),
            'a' => InputAction::Turn(Direction::Left),
            'd' => InputAction::Turn(Direction::Right),
            _ => return None,
        },
    };
    Some(action)
}

/// Resolves a drag from touch start to touch end. The dominant axis wins;
/// equal travel on both axes counts as vertical.
pub fn map_swipe(dx: f32, dy: f32) -> Option<Direction> {
    let (abs_dx, abs_dy) = (dx.abs(), dy.abs());
    if abs_dx.max(abs_dy) < SWIPE_THRESHOLD {
        return None;
    }

    if abs_dx > abs_dy {
        Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
    } else {
        Some(if dy > 0.0 { Direction::Down } else { Direction::Up })
    }
}
