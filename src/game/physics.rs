use super::state::{Ball, Field, Paddle};
use crate::ai::reflect_prediction;

/// Advance a ball by one tick, bouncing off the top and bottom walls.
///
/// Overshoot is mirrored back into `[0, height - size]` with the same fold
/// the AI uses for its prediction, so a ball stepped tick by tick ends up
/// where `reflect_prediction` says it will. `vy` points down the descending
/// half of the fold's period and up the ascending half.
pub fn step_ball(ball: &mut Ball, field: &Field) {
    ball.x += ball.vx;
    let raw_y = ball.y + ball.vy;

    let max_y = field.height - ball.size;
    if !raw_y.is_finite() {
        ball.y = raw_y;
        return;
    }
    if max_y <= 0.0 {
        ball.y = 0.0;
        return;
    }

    if raw_y < 0.0 || raw_y > max_y {
        if raw_y.rem_euclid(2.0 * max_y) > max_y {
            ball.vy = -ball.vy;
        }
        ball.y = reflect_prediction(raw_y, ball.size, field.height);
    } else {
        ball.y = raw_y;
    }
}

/// Whether any part of the ball is still horizontally inside the field
pub fn in_field(ball: &Ball, field: &Field) -> bool {
    ball.x + ball.size >= 0.0 && ball.x <= field.width
}

/// Step every ball and drop those that left the field. Returns how many were removed.
pub fn step_balls(balls: &mut Vec<Ball>, field: &Field) -> usize {
    for ball in balls.iter_mut() {
        step_ball(ball, field);
    }

    let before = balls.len();
    balls.retain(|ball| in_field(ball, field));
    before - balls.len()
}

pub fn move_paddle_up(paddle: &mut Paddle, distance: f32) {
    paddle.y -= distance;
    paddle.y = paddle.y.max(0.0);
}

pub fn move_paddle_down(paddle: &mut Paddle, field_height: f32, distance: f32) {
    paddle.y += distance;
    paddle.y = paddle.y.min(field_height - paddle.height);
}
