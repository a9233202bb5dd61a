// Multipong configuration types
// All settings have defaults matching the classic 800x500 field

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub ball: BallConfig,
    #[serde(default)]
    pub paddle: PaddleConfig,
    #[serde(default)]
    pub ai: AIConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BallConfig {
    // Ball diameter
    pub size: f32,

    // Fixed launch speed in units per tick; random in [4, 6) when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_speed: Option<f32>,

    // Lower bound on |vx| for newly spawned balls
    pub min_horizontal_speed: f32,

    // Balls in play when the game starts
    pub initial_balls: usize,

    // Delay between extra balls once play has started
    pub spawn_interval_ms: u64,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            size: 15.0,
            base_speed: None,
            min_horizontal_speed: 2.0,
            initial_balls: 1,
            spawn_interval_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub height: f32,
    pub width: f32,

    // Player paddle movement per key press
    pub tap_distance: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            height: 80.0,
            width: 10.0,
            tap_distance: 30.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AIConfig {
    // AI difficulty: "easy", "medium", "hard"
    pub difficulty: String,

    // Optional overrides of the difficulty preset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_range: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_multiplier: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relax_when_away: Option<f32>,

    // Paddle movement per tick before the difficulty multiplier
    pub base_step: f32,

    // No movement while the paddle center is this close to the target
    pub dead_zone: f32,

    // Ball size the predictor folds against, regardless of real ball sizes
    pub prediction_ball_size: f32,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            difficulty: "medium".to_string(),
            error_range: None,
            speed_multiplier: None,
            relax_when_away: None,
            base_step: 7.0,
            dead_zone: 10.0,
            prediction_ball_size: 15.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    pub player_paddle_up: String,
    pub player_paddle_down: String,
    pub pause: String,
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            player_paddle_up: "W".to_string(),
            player_paddle_down: "S".to_string(),
            pause: "P".to_string(),
            quit: "Q".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames (simulation ticks) per second
    pub target_fps: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { target_fps: 60 }
    }
}

impl DisplayConfig {
    /// Length of one fixed tick. The frame limiter sleeps for it and the game
    /// clock advances by it, so simulated and wall-clock time agree.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(1000 / self.target_fps.max(1))
    }
}
