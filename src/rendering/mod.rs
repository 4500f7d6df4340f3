//! Rendering plugin - board tiles, cell borders, and painting the canvas onto them.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::food::Apple;
use crate::game::{
    BACKGROUND_COLOR, CELL_SIZE, Canvas, Draw, GRID_BORDER_COLOR, GRID_HEIGHT, GRID_WIDTH,
    GameSet, Position, SnakeReset, TickStep, Tile, TileBorder, Z_BORDER, Z_TILE,
};
use crate::snake::Snake;

/// Plugin for rendering the board.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Canvas>()
            .add_systems(Startup, setup_board)
            .add_systems(Update, draw_world.in_set(TickStep::Draw))
            .add_systems(Update, present_canvas.after(GameSet::Tick));
    }
}

/// Center of a grid cell in world space. Row 0 is the top of the window.
pub fn cell_translation(position: Position, z: f32) -> Vec3 {
    let cell = CELL_SIZE as f32;
    Vec3::new(
        (position.x as f32 - GRID_WIDTH as f32 / 2.0 + 0.5) * cell,
        (GRID_HEIGHT as f32 / 2.0 - position.y as f32 - 0.5) * cell,
        z,
    )
}

/// Startup system - camera, one tile per cell, and a hidden border per cell.
fn setup_board(mut commands: Commands) {
    commands.spawn(Camera2d);

    let size = Vec2::splat(CELL_SIZE as f32);
    for y in 0..GRID_HEIGHT {
        for x in 0..GRID_WIDTH {
            let position = Position::new(x, y);

            commands.spawn((
                Sprite {
                    color: BACKGROUND_COLOR,
                    custom_size: Some(size),
                    ..default()
                },
                Transform::from_translation(cell_translation(position, Z_TILE)),
                Tile,
                position,
            ));

            let border = commands
                .spawn((
                    ShapeBundle::rect(
                        &ShapeConfig {
                            color: GRID_BORDER_COLOR,
                            hollow: true,
                            thickness: 1.0,
                            transform: Transform::from_translation(cell_translation(
                                position, Z_BORDER,
                            )),
                            ..ShapeConfig::default_2d()
                        },
                        size,
                    ),
                    TileBorder,
                    position,
                ))
                .id();
            commands.entity(border).insert(Visibility::Hidden);
        }
    }

    info!("Board ready: {}x{} cells", GRID_WIDTH, GRID_HEIGHT);
}

/// System to paint the apple and the snake onto the canvas each tick.
fn draw_world(
    mut canvas: ResMut<Canvas>,
    snake: Res<Snake>,
    apple: Res<Apple>,
    mut reset_reader: MessageReader<SnakeReset>,
) {
    if reset_reader.read().count() > 0 {
        canvas.clear();
    }

    apple.draw(&mut canvas);
    snake.draw(&mut canvas);
}

/// System to copy the canvas onto the tile sprites and borders.
fn present_canvas(
    canvas: Res<Canvas>,
    mut tiles: Query<(&Position, &mut Sprite), With<Tile>>,
    mut borders: Query<(&Position, &mut Visibility), With<TileBorder>>,
) {
    if !canvas.is_changed() {
        return;
    }

    for (position, mut sprite) in tiles.iter_mut() {
        let Some(color) = canvas.color_at(*position) else {
            continue;
        };
        if sprite.color != color {
            sprite.color = color;
        }
    }

    for (position, mut visibility) in borders.iter_mut() {
        let wanted = if canvas.is_painted(*position) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        if *visibility != wanted {
            *visibility = wanted;
        }
    }
}
