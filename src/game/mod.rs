// src/game/mod.rs

pub mod controller;
pub mod state;
pub mod summary;
pub mod timer;
pub mod view;

pub use controller::{GameController, PlayerInput, Renderer};
pub use state::{GameEvent, GameState, Transition};
pub use summary::GameSummary;
pub use view::View;
