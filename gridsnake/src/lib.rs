pub mod config;
pub mod layout;
pub mod cell;
pub mod snake;
pub mod food;
pub mod input;
pub mod rendering;
pub mod state;
pub mod playing;
pub mod settings;
pub mod error;
pub mod starter;

pub mod prelude {
    pub use crate::state::{GameState, GameStateStack, Trans};
    pub use crate::rendering::QuadSink;
    pub use crate::input::KeyQuery;
}

pub use config::{DisplayConfig, SharedDisplay, SubscriptionId};
pub use layout::CellLayout;
pub use cell::GridCell;
pub use snake::{Direction, Snake, TickPolicy};
pub use food::{Food, FoodSpawner, FixedSpawner, RandomSpawner};
pub use playing::{CollisionOutcome, Playing, PlayOptions};
pub use settings::Settings;
pub use error::GameError;

pub use tetra;
