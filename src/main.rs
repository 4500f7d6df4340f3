mod food;
mod game;
mod rendering;
mod snake;

use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

use food::FoodPlugin;
use game::{BACKGROUND_COLOR, GamePlugin, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use rendering::RenderingPlugin;
use snake::SnakePlugin;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                    title: WINDOW_TITLE.to_string(),
                    resizable: false,
                    ..Default::default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .add_plugins((GamePlugin, SnakePlugin, FoodPlugin, RenderingPlugin))
        .run();
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    use food::Apple;
    use game::{
        APPLE_COLOR, BOARD_CENTER, Canvas, Direction, MOVE_INTERVAL, Position, SNAKE_COLOR, Tile,
    };
    use snake::Snake;

    /// Headless app with every game plugin, past its startup frame.
    fn game_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO))
            .add_plugins((GamePlugin, SnakePlugin, FoodPlugin, RenderingPlugin));
        app.update();
        app
    }

    fn tile_color(app: &mut App, cell: Position) -> Option<Color> {
        let world = app.world_mut();
        let mut tiles = world.query_filtered::<(&Position, &Sprite), With<Tile>>();
        tiles
            .iter(world)
            .find(|(position, _)| **position == cell)
            .map(|(_, sprite)| sprite.color)
    }

    #[test]
    fn eating_grows_respawns_and_redraws_in_one_tick() {
        let mut app = game_app();
        let target = BOARD_CENTER.step(Direction::Right);
        app.insert_resource(Apple::at(target))
            .insert_resource(TimeUpdateStrategy::ManualDuration(MOVE_INTERVAL));

        for _ in 0..5 {
            app.update();
            if app.world().resource::<Snake>().head() != BOARD_CENTER {
                break;
            }
        }

        let snake = app.world().resource::<Snake>().clone();
        let apple = *app.world().resource::<Apple>();
        assert_eq!(snake.head(), target);
        assert_eq!(snake.length(), 2);
        assert!(!snake.occupies(apple.position()));

        let canvas = app.world().resource::<Canvas>().clone();
        assert_eq!(canvas.color_at(target), Some(SNAKE_COLOR));
        assert_eq!(canvas.color_at(apple.position()), Some(APPLE_COLOR));

        assert_eq!(tile_color(&mut app, target), Some(SNAKE_COLOR));
        assert_eq!(tile_color(&mut app, apple.position()), Some(APPLE_COLOR));
    }

    #[test]
    fn input_is_read_between_ticks_without_moving() {
        let mut app = game_app();
        app.insert_resource(TimeUpdateStrategy::ManualDuration(MOVE_INTERVAL / 2));
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ArrowUp);

        app.update();

        let snake = app.world().resource::<Snake>();
        assert_eq!(snake.head(), BOARD_CENTER);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), Some(Direction::Up));
    }
}
