// Trajectory prediction for the AI paddle

use crate::game::Ball;

/// Gap between the AI paddle and the right edge of the field
pub const PADDLE_STANDOFF: f32 = 10.0;

/// The ball that reaches the AI paddle first, and where
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intercept<'a> {
    /// `None` when no ball is heading toward the paddle
    pub ball: Option<&'a Ball>,
    /// Ticks until arrival, infinite when there is no ball
    pub time: f32,
    pub predicted_y: f32,
}

/// Fold a projected y back into `[0, field_height - ball_size]`.
///
/// Equivalent to reflecting off the top and bottom walls as many times as
/// needed, without stepping through the bounces.
pub fn reflect_prediction(predicted_y: f32, ball_size: f32, field_height: f32) -> f32 {
    let max = field_height - ball_size;
    if max <= 0.0 {
        return 0.0;
    }
    if !predicted_y.is_finite() {
        return predicted_y.clamp(0.0, max);
    }

    // One full period is a trip down and back up
    let period = 2.0 * max;
    let folded = predicted_y.rem_euclid(period);
    if folded > max {
        period - folded
    } else {
        folded
    }
}

/// Choose the ball that will reach the AI paddle first and predict its y there.
///
/// Only balls moving right (`vx > 0`) are candidates. Arrival time is
/// measured to the paddle's front face using each ball's own size; the fold
/// uses `ball_size`. Ties keep the ball listed first.
pub fn find_best_incoming<'a>(
    balls: &'a [Ball],
    field_width: f32,
    field_height: f32,
    paddle_width: f32,
    ball_size: f32,
) -> Intercept<'a> {
    let mut best = Intercept {
        ball: None,
        time: f32::INFINITY,
        predicted_y: field_height / 2.0,
    };

    for ball in balls.iter().filter(|ball| ball.vx > 0.0) {
        let distance = field_width - paddle_width - PADDLE_STANDOFF - ball.x - ball.size;
        let time = distance / ball.vx;

        if time > 0.0 && time < best.time {
            let raw_y = ball.y + ball.vy * time;
            best = Intercept {
                ball: Some(ball),
                time,
                predicted_y: reflect_prediction(raw_y, ball_size, field_height),
            };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::physics::step_ball;
    use crate::game::Field;

    const FIELD_WIDTH: f32 = 800.0;
    const FIELD_HEIGHT: f32 = 500.0;
    const PADDLE_WIDTH: f32 = 10.0;
    const BALL_SIZE: f32 = 15.0;

    fn predict(balls: &[Ball]) -> Intercept<'_> {
        find_best_incoming(balls, FIELD_WIDTH, FIELD_HEIGHT, PADDLE_WIDTH, BALL_SIZE)
    }

    #[test]
    fn test_straight_line_intercept() {
        let balls = vec![Ball::new(100.0, 100.0, 5.0, 1.0, BALL_SIZE)];
        let result = predict(&balls);

        // (800 - 10 - 10 - 100 - 15) / 5 = 133
        assert_eq!(result.ball, Some(&balls[0]));
        assert!((result.time - 133.0).abs() < 1e-4);
        assert!((result.predicted_y - 233.0).abs() < 1e-3);
    }

    #[test]
    fn test_reflected_intercept() {
        let balls = vec![Ball::new(100.0, 100.0, 4.0, 3.0, BALL_SIZE)];
        let result = predict(&balls);

        assert!((result.time - 166.25).abs() < 1e-4);
        // Raw 598.75 is past the 485 bound, one bounce brings it to 371.25
        assert!((result.predicted_y - 371.25).abs() < 1e-3);
    }

    #[test]
    fn test_reflection_matches_repeated_bounces() {
        let max = FIELD_HEIGHT - BALL_SIZE;
        for raw in [-1500.0_f32, -600.0, -20.0, 0.0, 120.0, 485.0, 598.75, 1300.0, 2950.5] {
            let mut expected = raw;
            while expected < 0.0 || expected > max {
                if expected < 0.0 {
                    expected = -expected;
                } else {
                    expected = 2.0 * max - expected;
                }
            }

            let folded = reflect_prediction(raw, BALL_SIZE, FIELD_HEIGHT);
            assert!((0.0..=max).contains(&folded), "{raw} folded to {folded}");
            assert!((folded - expected).abs() < 1e-3, "{raw}: {folded} vs {expected}");
        }
    }

    #[test]
    fn test_reflection_degenerate_field() {
        assert_eq!(reflect_prediction(42.0, 20.0, 10.0), 0.0);
        assert_eq!(reflect_prediction(f32::INFINITY, BALL_SIZE, FIELD_HEIGHT), 485.0);
    }

    #[test]
    fn test_prediction_matches_simulation() {
        let field = Field::new(FIELD_WIDTH, FIELD_HEIGHT);
        // Distance 600, 5 per tick: arrives in exactly 120 ticks after several bounces
        let mut ball = Ball::new(165.0, 200.0, 5.0, 11.0, BALL_SIZE);
        let balls = vec![ball.clone()];
        let result = predict(&balls);
        assert!((result.time - 120.0).abs() < 1e-4);

        for _ in 0..120 {
            step_ball(&mut ball, &field);
        }
        assert!((ball.y - result.predicted_y).abs() < 1e-2);
    }

    #[test]
    fn test_first_arrival_wins() {
        let balls = vec![
            Ball::new(100.0, 100.0, 4.0, 0.0, BALL_SIZE),
            Ball::new(500.0, 300.0, 4.0, 0.0, BALL_SIZE),
            Ball::new(300.0, 50.0, 2.0, 0.0, BALL_SIZE),
        ];
        let result = predict(&balls);

        assert_eq!(result.ball, Some(&balls[1]));
        assert!((result.predicted_y - 300.0).abs() < 1e-4);
    }

    #[test]
    fn test_ties_keep_first() {
        let balls = vec![
            Ball::new(200.0, 100.0, 5.0, 0.0, BALL_SIZE),
            Ball::new(200.0, 400.0, 5.0, 0.0, BALL_SIZE),
        ];
        let result = predict(&balls);

        assert!(std::ptr::eq(result.ball.unwrap(), &balls[0]));
    }

    #[test]
    fn test_receding_and_past_balls_ignored() {
        let balls = vec![
            Ball::new(780.0, 250.0, -5.0, 0.0, BALL_SIZE),
            Ball::new(300.0, 250.0, 0.0, 4.0, BALL_SIZE),
            // Already past the paddle face
            Ball::new(790.0, 250.0, 5.0, 0.0, BALL_SIZE),
        ];
        let result = predict(&balls);

        assert!(result.ball.is_none());
        assert!(result.time.is_infinite());
        assert_eq!(result.predicted_y, FIELD_HEIGHT / 2.0);
    }

    #[test]
    fn test_empty() {
        let result = predict(&[]);
        assert!(result.ball.is_none());
    }

    #[test]
    fn test_inputs_untouched() {
        let balls = vec![Ball::new(100.0, 100.0, 4.0, 3.0, BALL_SIZE)];
        let snapshot = balls.clone();
        let first = predict(&balls);
        let second = predict(&balls);

        assert_eq!(balls, snapshot);
        assert_eq!(first.predicted_y, second.predicted_y);
    }
}
