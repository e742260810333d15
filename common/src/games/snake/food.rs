use crate::games::SessionRng;
use super::settings::GRID_SIZE;
use super::snake::Snake;
use super::types::Point;

const CELL_COUNT: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Picks a uniformly random free cell by rejection sampling.
///
/// Sampling is unbounded while free cells exist; with 400 cells that only gets
/// slow when the snake covers almost the whole board. A snake covering every
/// cell returns `None` instead of looping forever.
pub fn place_food(snake: &Snake, rng: &mut SessionRng) -> Option<Point> {
    if snake.len() >= CELL_COUNT {
        return None;
    }

    loop {
        let candidate = Point::new(rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE));
        if !snake.contains(&candidate) {
            return Some(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_except(free: Point) -> Vec<Point> {
        let mut cells = vec![];
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let p = Point::new(x, y);
                if p != free {
                    cells.push(p);
                }
            }
        }
        cells
    }

    #[test]
    fn test_food_never_on_snake() {
        let snake = Snake::spawn();
        let mut rng = SessionRng::new(42);
        for _ in 0..500 {
            let food = place_food(&snake, &mut rng).unwrap();
            assert!(food.in_bounds());
            assert!(!snake.contains(&food));
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let free = Point::new(13, 7);
        let snake = Snake::new(&board_except(free)).unwrap();
        let mut rng = SessionRng::new(42);
        assert_eq!(place_food(&snake, &mut rng), Some(free));
    }

    #[test]
    fn test_full_board_yields_none() {
        let mut cells = board_except(Point::new(0, 0));
        cells.push(Point::new(0, 0));
        let snake = Snake::new(&cells).unwrap();
        let mut rng = SessionRng::new(42);
        assert_eq!(place_food(&snake, &mut rng), None);
    }
}
