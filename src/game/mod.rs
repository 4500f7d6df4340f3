//! Core game module containing shared components, resources, events, constants,
//! and the tick schedule.

mod components;
mod constants;
mod events;
mod resources;

pub use components::*;
pub use constants::*;
pub use events::*;
pub use resources::*;

use bevy::{prelude::*, time::common_conditions::on_timer};

/// Top-level ordering of the frame: input is read every frame, the rest only
/// on a game tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Tick,
}

/// Steps of a single game tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickStep {
    Move,
    Feed,
    Draw,
}

/// Plugin wiring the shared schedule and messages.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AppleEaten>()
            .add_message::<SnakeReset>()
            .configure_sets(Update, (GameSet::Input, GameSet::Tick).chain())
            .configure_sets(Update, GameSet::Tick.run_if(on_timer(MOVE_INTERVAL)))
            .configure_sets(
                Update,
                (TickStep::Move, TickStep::Feed, TickStep::Draw)
                    .chain()
                    .in_set(GameSet::Tick),
            );
    }
}
