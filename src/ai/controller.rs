// Steering for the AI paddle

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::difficulty::Difficulty;
use super::prediction::find_best_incoming;
use crate::config::AIConfig;
use crate::game::{Ball, Field, Paddle};

/// Fixed steering parameters, independent of difficulty
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerTuning {
    /// Paddle movement per tick before scaling
    pub base_step: f32,
    /// Half-width of the band around the target where the paddle holds still
    pub dead_zone: f32,
    /// Ball size the predictor folds against
    pub prediction_ball_size: f32,
}

impl Default for ControllerTuning {
    fn default() -> Self {
        Self {
            base_step: 7.0,
            dead_zone: 10.0,
            prediction_ball_size: 15.0,
        }
    }
}

impl From<&AIConfig> for ControllerTuning {
    fn from(config: &AIConfig) -> Self {
        Self {
            base_step: config.base_step,
            dead_zone: config.dead_zone,
            prediction_ball_size: config.prediction_ball_size,
        }
    }
}

/// Rule-based opponent for the right-hand paddle.
///
/// Each call to [`AiController::update`] predicts where the first incoming
/// ball will cross the paddle plane, blurs that target with uniform noise,
/// and moves the paddle one step toward it. With nothing incoming the paddle
/// drifts back to the vertical center at the relaxed speed.
#[derive(Debug, Clone)]
pub struct AiController {
    field: Field,
    difficulty: Difficulty,
    tuning: ControllerTuning,
}

impl AiController {
    pub fn new(field: Field, difficulty: Difficulty, tuning: ControllerTuning) -> Self {
        Self {
            field,
            difficulty,
            tuning,
        }
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    pub fn tuning(&self) -> &ControllerTuning {
        &self.tuning
    }

    /// Move `paddle` one tick toward the predicted intercept.
    ///
    /// Does nothing when `balls` is empty. The paddle's `y` is the only state
    /// touched, and it always ends inside `[0, field_height - paddle.height]`.
    pub fn update<R: Rng + ?Sized>(&self, balls: &[Ball], paddle: &mut Paddle, rng: &mut R) {
        if balls.is_empty() {
            return;
        }

        let incoming = find_best_incoming(
            balls,
            self.field.width,
            self.field.height,
            paddle.width,
            self.tuning.prediction_ball_size,
        );
        let center = paddle.center_y();

        let (target, step) = if incoming.ball.is_some() {
            let target = incoming.predicted_y + self.noise(rng);
            let step =
                (self.difficulty.effective_speed_multiplier() * self.tuning.base_step).max(1.0);
            (target, step)
        } else {
            let step = self.difficulty.effective_relax_when_away() * self.tuning.base_step;
            (self.field.center_y(), step)
        };

        if center < target - self.tuning.dead_zone {
            paddle.y += step;
        } else if center > target + self.tuning.dead_zone {
            paddle.y -= step;
        }

        tracing::trace!(
            tracking = incoming.ball.is_some(),
            target_y = target,
            paddle_y = paddle.y,
            "ai step"
        );

        paddle.clamp_to(self.field.height);
    }

    /// Uniform sample from `[-error_range / 2, error_range / 2]`.
    ///
    /// Sampled on a unit band and then scaled, so any finite range works
    /// without overflowing the sampler's own width.
    fn noise<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let range = self.difficulty.effective_error_range();
        if range == 0.0 {
            return 0.0;
        }
        Uniform::new_inclusive(-0.5_f32, 0.5).sample(rng) * range
    }
}
