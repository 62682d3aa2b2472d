//! Grid cell coordinates and cardinal directions.
//!
//! The movement lattice is integer based. A [`GridPosition`] names one cell and
//! a [`Direction`] is a single-axis unit step between neighbouring cells. Grid
//! `y` grows "forward" and maps onto world `z`; world `y` is height.

use bevy_ecs::prelude::Component;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Integer cell in the level's movement lattice.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        GridPosition { x, y }
    }

    /// World-space position of this cell's centre at the given height.
    pub fn to_world(self, height: f32) -> Vec3 {
        Vec3::new(self.x as f32, height, self.y as f32)
    }
}

impl Add<Direction> for GridPosition {
    type Output = GridPosition;

    fn add(self, direction: Direction) -> GridPosition {
        let (dx, dy) = direction.offset();
        GridPosition {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl std::fmt::Display for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl std::str::FromStr for GridPosition {
    type Err = String;

    /// Parse `"x,y"` (whitespace around either number is ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("Expected 'x,y' cell, got '{}'", s))?;
        let x = x
            .trim()
            .parse::<i32>()
            .map_err(|e| format!("Invalid cell x '{}': {}", x.trim(), e))?;
        let y = y
            .trim()
            .parse::<i32>()
            .map_err(|e| format!("Invalid cell y '{}': {}", y.trim(), e))?;
        Ok(GridPosition { x, y })
    }
}

/// One of the four cardinal movement directions.
///
/// A direction is always non-zero and moves along exactly one axis, so
/// diagonal or empty intents cannot be expressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Forward, +y on the grid (+z in the world).
    #[default]
    Up,
    /// Backward, -y on the grid.
    Down,
    /// -x on the grid.
    Left,
    /// +x on the grid.
    Right,
}

impl Direction {
    /// All directions in input priority order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit grid offset `(dx, dy)`.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Body yaw in degrees when facing this direction.
    pub fn yaw_degrees(self) -> f32 {
        match self {
            Direction::Up => 0.0,
            Direction::Down => 180.0,
            Direction::Left => -90.0,
            Direction::Right => 90.0,
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            other => Err(format!("Unknown direction '{}'", other)),
        }
    }
}
