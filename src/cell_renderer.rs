use bevy::prelude::*;

use crate::camera::{grid_to_world, CameraState};
use crate::settings::SnakeColor;
use crate::simulation::FrameView;
use crate::Cell;

/// Checkerboard tile, spawned once.
#[derive(Component)]
pub struct BoardTile;

/// Snake or fruit sprite, rebuilt whenever the frame changes.
#[derive(Component)]
pub struct CellSprite;

/// Latest frame handed over by the simulation; `None` while no game is on screen.
#[derive(Resource, Default)]
pub struct BoardView {
    pub frame: Option<FrameView>,
    pub snake_color: SnakeColor,
}

/// Configuration for cell rendering
#[derive(Resource)]
pub struct CellRenderConfig {
    pub light_tile: Color,
    pub dark_tile: Color,
    pub head_color: Color,
    pub fruit_color: Color,
    pub special_fruit_color: Color,
    /// Fraction of a tile a fruit covers.
    pub fruit_scale: f32,
}

impl Default for CellRenderConfig {
    fn default() -> Self {
        Self {
            light_tile: Color::srgb_u8(100, 200, 100),
            dark_tile: Color::srgb_u8(50, 150, 50),
            head_color: Color::WHITE,
            fruit_color: Color::srgb(0.85, 0.1, 0.1),
            special_fruit_color: Color::srgb(1.0, 0.8, 0.1),
            fruit_scale: 0.8,
        }
    }
}

const Z_TILE: f32 = 0.0;
const Z_FRUIT: f32 = 1.0;
const Z_BODY: f32 = 1.5;
const Z_HEAD: f32 = 2.0;

pub fn snake_body_color(color: SnakeColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::srgb(r, g, b)
}

/// Spawn the checkerboard background
pub fn spawn_board(
    mut commands: Commands,
    camera_state: Res<CameraState>,
    config: Res<CellRenderConfig>,
) {
    let size = Vec2::splat(camera_state.cell_size);
    for cell in camera_state.grid.cells() {
        let color = if (cell.x + cell.y) % 2 == 0 { config.light_tile } else { config.dark_tile };
        commands.spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(grid_to_world(cell, &camera_state).extend(Z_TILE)),
            BoardTile,
        ));
    }
}

/// Rebuild snake and fruit sprites from the current [`BoardView`].
pub fn render_cells(
    mut commands: Commands,
    board: Res<BoardView>,
    camera_state: Res<CameraState>,
    config: Res<CellRenderConfig>,
    existing: Query<Entity, With<CellSprite>>,
) {
    if !board.is_changed() {
        return;
    }
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
    let Some(frame) = board.frame.as_ref() else {
        return;
    };

    let tile = camera_state.cell_size;
    let mut spawn = |cell: Cell, color: Color, size: f32, z: f32| {
        commands.spawn((
            Sprite {
                color,
                custom_size: Some(Vec2::splat(size)),
                ..default()
            },
            Transform::from_translation(grid_to_world(cell, &camera_state).extend(z)),
            CellSprite,
        ));
    };

    if let Some(cell) = frame.fruit {
        spawn(cell, config.fruit_color, tile * config.fruit_scale, Z_FRUIT);
    }
    if let Some(cell) = frame.special_fruit {
        spawn(cell, config.special_fruit_color, tile * config.fruit_scale, Z_FRUIT);
    }
    let body_color = snake_body_color(board.snake_color);
    for (i, &cell) in frame.snake.iter().enumerate() {
        if i == 0 {
            spawn(cell, config.head_color, tile, Z_HEAD);
        } else {
            spawn(cell, body_color, tile, Z_BODY);
        }
    }
}
