// Headless simulation: runs the game without a terminal and reports what happened

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ai::Difficulty;
use crate::config::Config;
use crate::game::Game;

/// Outcome of a headless run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub ticks: u64,
    pub final_balls: usize,
    pub peak_balls: usize,
    /// Ticks during which the AI had an incoming ball to track
    pub tracking_ticks: u64,
    pub final_ai_paddle_y: f32,
}

impl SimulationReport {
    pub fn summary(&self) -> String {
        format!(
            "Simulated {} ticks: {} balls in play at the end (peak {}), \
             AI tracked a ball for {} ticks, final AI paddle y = {:.1}",
            self.ticks,
            self.final_balls,
            self.peak_balls,
            self.tracking_ticks,
            self.final_ai_paddle_y
        )
    }
}

/// Run `ticks` fixed steps. The same seed always produces the same report.
pub fn run_simulation(
    config: &Config,
    difficulty: Difficulty,
    ticks: u64,
    seed: Option<u64>,
) -> SimulationReport {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(config, difficulty, rng);

    tracing::info!(ticks, ?seed, "headless simulation started");

    let mut peak_balls = game.state.balls.len();
    let mut tracking_ticks = 0;
    for _ in 0..ticks {
        game.tick();
        peak_balls = peak_balls.max(game.state.balls.len());
        if game.predicted_intercept().is_some() {
            tracking_ticks += 1;
        }
    }

    let report = SimulationReport {
        ticks,
        final_balls: game.state.balls.len(),
        peak_balls,
        tracking_ticks,
        final_ai_paddle_y: game.state.ai_paddle.y,
    };
    tracing::info!(?report, "headless simulation finished");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::DifficultyLevel;

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = Config::default();
        let difficulty = DifficultyLevel::Medium.profile();

        let first = run_simulation(&config, difficulty, 1500, Some(9));
        let second = run_simulation(&config, difficulty, 1500, Some(9));

        assert_eq!(first, second);
    }

    #[test]
    fn test_paddle_stays_on_field() {
        let config = Config::default();
        let max_y = config.field.height - config.paddle.height;

        for level in DifficultyLevel::all() {
            let report = run_simulation(&config, level.profile(), 2000, Some(3));
            assert!(report.final_ai_paddle_y >= 0.0);
            assert!(report.final_ai_paddle_y <= max_y);
        }
    }

    #[test]
    fn test_balls_accumulate() {
        let mut config = Config::default();
        config.ball.spawn_interval_ms = 500;
        // Slow balls stay on the field long enough to pile up
        config.ball.base_speed = Some(0.5);
        config.ball.min_horizontal_speed = 0.5;

        let report = run_simulation(&config, Difficulty::default(), 600, Some(1));
        assert!(report.peak_balls >= 10, "peak was {}", report.peak_balls);
        assert!(report.summary().starts_with("Simulated 600 ticks"));
    }
}
