use std::collections::BTreeMap;

use super::transform::{Point, ViewportTransform};

/// Pointers taking part in a pinch.
pub const MAX_GESTURE_POINTERS: usize = 2;

/// Identity of one input contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PointerId {
    Mouse,
    Touch(u64),
}

/// Two-pointer gesture bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchState {
    /// Distance seen on the previous update; zero means "record only".
    pub last_distance: f64,
    pub start_distance: f64,
    pub start_transform: ViewportTransform,
}

/// Transient per-interaction state: active pointers and their last
/// known frame positions.
#[derive(Clone, Debug, Default)]
pub struct GestureState {
    pointers: BTreeMap<PointerId, Point>,
    pub pinch: Option<PinchState>,
}

impl GestureState {
    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    pub fn contains(&self, id: PointerId) -> bool {
        self.pointers.contains_key(&id)
    }

    pub fn position(&self, id: PointerId) -> Option<Point> {
        self.pointers.get(&id).copied()
    }

    /// Track a new pointer. Returns `false` when the gesture is already full.
    pub fn press(&mut self, id: PointerId, pos: Point) -> bool {
        if !self.pointers.contains_key(&id) && self.pointers.len() >= MAX_GESTURE_POINTERS {
            return false;
        }
        self.pointers.insert(id, pos);
        true
    }

    /// Update a tracked pointer, returning its previous position.
    pub fn update(&mut self, id: PointerId, pos: Point) -> Option<Point> {
        self.pointers.get_mut(&id).map(|p| std::mem::replace(p, pos))
    }

    pub fn release(&mut self, id: PointerId) -> Option<Point> {
        self.pointers.remove(&id)
    }

    /// The two pinch pointers, in stable order.
    pub fn pair(&self) -> Option<(Point, Point)> {
        let mut it = self.pointers.values();
        match (it.next(), it.next()) {
            (Some(&a), Some(&b)) => Some((a, b)),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.pointers.clear();
        self.pinch = None;
    }
}
