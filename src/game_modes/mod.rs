mod common;
mod headless;
mod interactive;

pub use headless::run_simulation;
pub use interactive::run_interactive;
