// A running multi-ball game against the AI paddle

use rand::Rng;
use std::time::Duration;

use super::physics::{self, step_balls};
use super::spawn::SpawnManager;
use super::state::GameState;
use crate::ai::{find_best_incoming, AiController, ControllerTuning, Difficulty};
use crate::config::Config;

/// Owns the game state together with everything that drives it each tick.
///
/// The RNG is injected so the headless mode and tests can run from a seed.
pub struct Game<R: Rng> {
    pub state: GameState,
    spawner: SpawnManager,
    ai: AiController,
    tick_duration: Duration,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(config: &Config, difficulty: Difficulty, mut rng: R) -> Self {
        let mut state = GameState::new(config);
        for _ in 0..config.ball.initial_balls {
            state.spawn_ball(&mut rng);
        }

        let ai = AiController::new(
            state.field,
            difficulty,
            ControllerTuning::from(&config.ai),
        );

        Self {
            state,
            spawner: SpawnManager::new(Duration::from_millis(config.ball.spawn_interval_ms)),
            ai,
            tick_duration: config.display.frame_duration(),
            rng,
        }
    }

    pub fn ai(&self) -> &AiController {
        &self.ai
    }

    pub fn spawner(&self) -> &SpawnManager {
        &self.spawner
    }

    /// Advance the game by one fixed tick. Nothing moves while paused.
    pub fn tick(&mut self) {
        if self.state.paused {
            return;
        }
        self.state.tick_count += 1;

        let removed = step_balls(&mut self.state.balls, &self.state.field);
        if removed > 0 {
            tracing::debug!(
                removed,
                remaining = self.state.balls.len(),
                "balls left the field"
            );
        }

        if !self.spawner.is_started() && self.state.any_ball_moving() {
            tracing::info!(tick = self.state.tick_count, "first ball moving, spawner started");
            self.spawner.start(self.state.paused);
        }
        for _ in 0..self.spawner.advance(self.tick_duration) {
            self.state.spawn_ball(&mut self.rng);
        }

        self.ai
            .update(&self.state.balls, &mut self.state.ai_paddle, &mut self.rng);
    }

    pub fn toggle_pause(&mut self) {
        self.state.paused = !self.state.paused;
        if self.state.paused {
            self.spawner.pause();
        } else {
            self.spawner.resume(self.state.paused);
        }
        tracing::info!(paused = self.state.paused, "pause toggled");
    }

    /// Label for the pause control: what pressing it will do
    pub fn pause_label(&self) -> &'static str {
        if self.state.paused {
            "Resume"
        } else {
            "Pause"
        }
    }

    pub fn move_player_up(&mut self) {
        if self.state.paused {
            return;
        }
        physics::move_paddle_up(&mut self.state.player_paddle, self.state.tap_distance);
    }

    pub fn move_player_down(&mut self) {
        if self.state.paused {
            return;
        }
        physics::move_paddle_down(
            &mut self.state.player_paddle,
            self.state.field.height,
            self.state.tap_distance,
        );
    }

    /// Where the AI currently expects the next ball, if one is incoming
    pub fn predicted_intercept(&self) -> Option<f32> {
        let incoming = find_best_incoming(
            &self.state.balls,
            self.state.field.width,
            self.state.field.height,
            self.state.ai_paddle.width,
            self.ai.tuning().prediction_ball_size,
        );
        incoming.ball.map(|_| incoming.predicted_y)
    }
}
