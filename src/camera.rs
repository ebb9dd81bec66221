use bevy::prelude::*;

use crate::{Cell, Grid};

/// Resource for mapping grid cells to world space
#[derive(Resource, Clone, Copy, Debug)]
pub struct CameraState {
    pub cell_size: f32,
    pub grid: Grid,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            grid: Grid::new(20, 15),
        }
    }
}

impl CameraState {
    pub fn new(cell_size: f32, grid: Grid) -> Self {
        Self { cell_size, grid }
    }

    /// Window size that fits the whole board, in logical pixels.
    pub fn board_size(&self) -> Vec2 {
        Vec2::new(
            self.grid.width() as f32 * self.cell_size,
            self.grid.height() as f32 * self.cell_size,
        )
    }
}

/// Setup the game camera
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Center of `cell` in world space. The board is centered on the origin and
/// row 0 is the top row, so y flips.
pub fn grid_to_world(cell: Cell, camera_state: &CameraState) -> Vec2 {
    let half = camera_state.board_size() / 2.0;
    Vec2::new(
        (cell.x as f32 + 0.5) * camera_state.cell_size - half.x,
        half.y - (cell.y as f32 + 0.5) * camera_state.cell_size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_inside_the_board() {
        let state = CameraState::new(40.0, Grid::new(20, 15));
        assert_eq!(state.board_size(), Vec2::new(800.0, 600.0));
        assert_eq!(grid_to_world(Cell::new(0, 0), &state), Vec2::new(-380.0, 280.0));
        assert_eq!(grid_to_world(Cell::new(19, 14), &state), Vec2::new(380.0, -280.0));
    }
}
