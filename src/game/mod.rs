pub mod input;
pub mod physics;
pub mod session;
pub mod spawn;
pub mod state;

pub use input::{poll_input, InputAction, ResolvedBindings};
pub use session::Game;
pub use state::{Ball, Field, GameState, Paddle};
