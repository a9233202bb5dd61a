// AI module for the computer-controlled paddle

mod controller;
mod difficulty;
mod prediction;

pub use controller::{AiController, ControllerTuning};
pub use difficulty::{Difficulty, DifficultyLevel};
pub use prediction::{find_best_incoming, reflect_prediction};
