use std::collections::{HashSet, VecDeque};

use super::settings::INITIAL_BODY;
use super::types::Point;

/// Ordered body, head at the front. `body_set` mirrors `body` for O(1)
/// occupancy checks.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    /// Head first. `None` for an empty slice.
    pub fn new(segments: &[Point]) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            body: segments.iter().copied().collect(),
            body_set: segments.iter().copied().collect(),
        })
    }

    pub fn spawn() -> Self {
        Self {
            body: INITIAL_BODY.into_iter().collect(),
            body_set: INITIAL_BODY.into_iter().collect(),
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &Point> {
        self.body.iter()
    }

    pub(crate) fn push_head(&mut self, point: Point) {
        self.body.push_front(point);
        self.body_set.insert(point);
    }

    pub(crate) fn pop_tail(&mut self) -> Point {
        let tail = self
            .body
            .pop_back()
            .expect("Snake body should never be empty");
        self.body_set.remove(&tail);
        tail
    }
}
