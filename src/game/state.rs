use std::f32::consts::TAU;

use rand::Rng;

use crate::config::{BallConfig, Config, FieldConfig, PaddleConfig};

/// Playing field dimensions in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center_y(&self) -> f32 {
        self.height / 2.0
    }
}

impl From<&FieldConfig> for Field {
    fn from(config: &FieldConfig) -> Self {
        Self::new(config.width, config.height)
    }
}

/// Spawn parameters for new balls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallOptions {
    pub size: f32,
    /// Fixed speed; `None` picks a random speed in [4, 6)
    pub base_speed: Option<f32>,
    pub min_horizontal_speed: f32,
}

impl Default for BallOptions {
    fn default() -> Self {
        Self {
            size: 15.0,
            base_speed: None,
            min_horizontal_speed: 2.0,
        }
    }
}

impl From<&BallConfig> for BallOptions {
    fn from(config: &BallConfig) -> Self {
        Self {
            size: config.size,
            base_speed: config.base_speed,
            min_horizontal_speed: config.min_horizontal_speed,
        }
    }
}

/// A ball. `x`/`y` is the top-left corner, velocity is in units per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
}

impl Ball {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32, size: f32) -> Self {
        Self { x, y, vx, vy, size }
    }

    /// Create a ball at the field center heading in a random direction.
    ///
    /// The horizontal speed is floored to `min_horizontal_speed` so that no
    /// ball gets stuck bouncing almost vertically.
    pub fn spawn<R: Rng + ?Sized>(options: &BallOptions, field: &Field, rng: &mut R) -> Self {
        let size = options.size;
        let speed = options
            .base_speed
            .unwrap_or_else(|| 4.0 + rng.gen::<f32>() * 2.0);
        let angle = rng.gen::<f32>() * TAU;

        let mut vx = angle.cos() * speed;
        if vx.abs() < options.min_horizontal_speed {
            let sign = if vx == 0.0 { 1.0 } else { vx.signum() };
            vx = options.min_horizontal_speed * sign;
        }

        Self {
            x: field.width / 2.0 - size / 2.0,
            y: field.height / 2.0 - size / 2.0,
            vx,
            vy: angle.sin() * speed,
            size,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.vx != 0.0 || self.vy != 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub y: f32,
    pub height: f32,
    pub width: f32,
}

impl Paddle {
    pub fn new(y: f32, height: f32, width: f32) -> Self {
        Self { y, height, width }
    }

    /// Paddle vertically centered in the field
    pub fn centered(field: &Field, config: &PaddleConfig) -> Self {
        Self::new(
            field.center_y() - config.height / 2.0,
            config.height,
            config.width,
        )
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Keep the paddle inside `[0, field_height - height]`
    pub fn clamp_to(&mut self, field_height: f32) {
        self.y = self.y.min(field_height - self.height).max(0.0);
    }
}

/// Everything the game loop mutates each tick
#[derive(Debug, Clone)]
pub struct GameState {
    pub field: Field,
    pub balls: Vec<Ball>,
    /// Human paddle (left)
    pub player_paddle: Paddle,
    /// AI paddle (right)
    pub ai_paddle: Paddle,
    pub paused: bool,
    pub ball_options: BallOptions,
    pub tap_distance: f32,
    pub tick_count: u64,
}

impl GameState {
    pub fn new(config: &Config) -> Self {
        let field = Field::from(&config.field);

        Self {
            field,
            balls: Vec::new(),
            player_paddle: Paddle::centered(&field, &config.paddle),
            ai_paddle: Paddle::centered(&field, &config.paddle),
            paused: false,
            ball_options: BallOptions::from(&config.ball),
            tap_distance: config.paddle.tap_distance,
            tick_count: 0,
        }
    }

    pub fn spawn_ball<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let ball = Ball::spawn(&self.ball_options, &self.field, rng);
        tracing::debug!(
            vx = ball.vx,
            vy = ball.vy,
            total = self.balls.len() + 1,
            "ball spawned"
        );
        self.balls.push(ball);
    }

    pub fn any_ball_moving(&self) -> bool {
        self.balls.iter().any(Ball::is_moving)
    }
}
