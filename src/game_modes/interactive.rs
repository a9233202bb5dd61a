use std::io;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::Terminal;

use crate::ai::Difficulty;
use crate::config::Config;
use crate::game::{poll_input, Game, InputAction, ResolvedBindings};
use crate::ui;

use super::common::limit_frame_rate;

/// Run the game in the terminal: the player steers the left paddle, the AI
/// the right one, and the status panel is redrawn every frame.
pub fn run_interactive<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    difficulty: Difficulty,
    seed: Option<u64>,
) -> Result<(), io::Error> {
    tracing::info!(?difficulty, "interactive game started");

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(config, difficulty, rng);
    let bindings = ResolvedBindings::new(&config.keybindings);
    let frame = config.display.frame_duration();

    loop {
        let now = Instant::now();

        for action in poll_input(&bindings)? {
            match action {
                InputAction::Quit => {
                    tracing::info!(ticks = game.state.tick_count, "player quit");
                    return Ok(());
                }
                InputAction::TogglePause => game.toggle_pause(),
                InputAction::PlayerPaddleUp => game.move_player_up(),
                InputAction::PlayerPaddleDown => game.move_player_down(),
            }
        }

        game.tick();

        terminal.draw(|f| ui::render_status(f, &game, &config.keybindings))?;

        limit_frame_rate(now, frame);
    }
}
