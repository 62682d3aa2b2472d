//! Level traversability.
//!
//! The actor never asks the level for anything but "may I stand on this
//! cell?". That question is the [`Traversable`] capability; the state machine
//! takes it by reference on every move instead of holding on to the level.
//!
//! - [`StartArea`] – the open starting region, a rectangle of cells
//! - [`Level`] – a start area with individually blocked cells (trees, rocks)

use bevy_ecs::prelude::Resource;
use log::debug;
use rustc_hash::FxHashSet;

use crate::components::gridposition::GridPosition;

/// Answers whether the actor may occupy a cell.
pub trait Traversable {
    fn is_traversable(&self, cell: GridPosition) -> bool;
}

impl<F> Traversable for F
where
    F: Fn(GridPosition) -> bool,
{
    fn is_traversable(&self, cell: GridPosition) -> bool {
        self(cell)
    }
}

/// Inclusive rectangle of open cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartArea {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Default for StartArea {
    /// Cells with `-6 < x < 6` and `-5 < y < 0`.
    fn default() -> Self {
        StartArea {
            min_x: -5,
            max_x: 5,
            min_y: -4,
            max_y: -1,
        }
    }
}

impl StartArea {
    pub fn contains(&self, cell: GridPosition) -> bool {
        cell.x >= self.min_x && cell.x <= self.max_x && cell.y >= self.min_y && cell.y <= self.max_y
    }
}

impl Traversable for StartArea {
    fn is_traversable(&self, cell: GridPosition) -> bool {
        self.contains(cell)
    }
}

/// Layout the actor moves on: an open area minus blocked cells.
#[derive(Resource, Clone, Debug, Default)]
pub struct Level {
    pub area: StartArea,
    blocked: FxHashSet<GridPosition>,
}

impl Level {
    pub fn new(area: StartArea) -> Self {
        Level {
            area,
            blocked: FxHashSet::default(),
        }
    }

    /// Builder: block `cell`.
    pub fn with_blocked(mut self, cell: GridPosition) -> Self {
        self.block(cell);
        self
    }

    pub fn block(&mut self, cell: GridPosition) {
        debug!("Blocking cell {}", cell);
        self.blocked.insert(cell);
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.len()
    }
}

impl Traversable for Level {
    fn is_traversable(&self, cell: GridPosition) -> bool {
        self.area.contains(cell) && !self.blocked.contains(&cell)
    }
}
