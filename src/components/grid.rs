//! Grid collaborator component.
//!
//! The [`Grid`] component describes the geometry of the world's cell grid:
//! where cell `(0, 0)` starts and how wide a square cell is. Cell storage
//! (what occupies each cell) is owned by other systems; this component only
//! answers "which cell contains this world position".

use bevy_ecs::prelude::Component;
use glam::{IVec2, Vec2};
use std::fmt;

/// Integer coordinates of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<IVec2> for CellCoord {
    fn from(v: IVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Uniform square grid anchored at `origin`.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    /// World position of the lower corner of cell `(0, 0)`.
    pub origin: Vec2,
    /// Side length of a cell in world units. Must be positive.
    pub cell_size: f32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            cell_size: 1.0,
        }
    }
}

impl Grid {
    pub fn new(origin: Vec2, cell_size: f32) -> Self {
        Self { origin, cell_size }
    }

    /// Cell containing `world`. Positions on a cell boundary belong to the
    /// cell on the positive side.
    pub fn cell_at(&self, world: Vec2) -> CellCoord {
        let local = (world - self.origin) / self.cell_size;
        CellCoord::from(local.floor().as_ivec2())
    }

    /// World position of the centre of `cell`.
    pub fn cell_center(&self, cell: CellCoord) -> Vec2 {
        self.origin + (Vec2::new(cell.x as f32, cell.y as f32) + Vec2::splat(0.5)) * self.cell_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_unit_grid() {
        let grid = Grid::default();
        assert_eq!(grid.cell_at(Vec2::new(0.5, 0.5)), CellCoord::new(0, 0));
        assert_eq!(grid.cell_at(Vec2::new(5.0, 0.0)), CellCoord::new(5, 0));
        assert_eq!(grid.cell_at(Vec2::new(4.999, 2.1)), CellCoord::new(4, 2));
    }

    #[test]
    fn test_cell_at_negative_positions_floor() {
        let grid = Grid::default();
        assert_eq!(grid.cell_at(Vec2::new(-0.1, -0.1)), CellCoord::new(-1, -1));
        assert_eq!(grid.cell_at(Vec2::new(-1.0, 0.0)), CellCoord::new(-1, 0));
    }

    #[test]
    fn test_cell_at_with_origin_and_size() {
        let grid = Grid::new(Vec2::new(10.0, 10.0), 16.0);
        assert_eq!(grid.cell_at(Vec2::new(10.0, 10.0)), CellCoord::new(0, 0));
        assert_eq!(grid.cell_at(Vec2::new(42.0, 25.9)), CellCoord::new(2, 0));
        assert_eq!(grid.cell_at(Vec2::new(9.0, 26.0)), CellCoord::new(-1, 1));
    }

    #[test]
    fn test_cell_center_roundtrips_through_cell_at() {
        let grid = Grid::new(Vec2::new(-3.0, 2.0), 2.0);
        let cell = CellCoord::new(-4, 7);
        assert_eq!(grid.cell_at(grid.cell_center(cell)), cell);
    }

    #[test]
    fn test_display() {
        assert_eq!(CellCoord::new(3, -2).to_string(), "(3, -2)");
    }
}
