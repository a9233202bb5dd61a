// Status panel for the interactive mode

use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::KeyBindings;
use crate::game::Game;

/// Plain-text summary of the running game, one entry per line
pub fn status_lines<R: Rng>(game: &Game<R>) -> Vec<String> {
    let state = &game.state;
    let difficulty = game.ai().difficulty();

    let intercept = match game.predicted_intercept() {
        Some(y) => format!("{:.1}", y),
        None => "none (centering)".to_string(),
    };

    vec![
        format!("Balls in play:   {}", state.balls.len()),
        format!("Tick:            {}", state.tick_count),
        format!("Player paddle y: {:.1}", state.player_paddle.y),
        format!("AI paddle y:     {:.1}", state.ai_paddle.y),
        format!("AI intercept y:  {}", intercept),
        format!(
            "AI profile:      error {:.0}, speed x{:.2}, relax x{:.2}",
            difficulty.error_range, difficulty.speed_multiplier, difficulty.relax_when_away
        ),
        format!(
            "Ball spawner:    {}",
            if game.spawner().is_running() {
                "running"
            } else {
                "idle"
            }
        ),
    ]
}

/// Controls line built from the configured bindings. Arrows and Esc always
/// work, whatever the config says.
pub fn controls_hint(bindings: &KeyBindings, pause_label: &str) -> String {
    format!(
        "{}/{} or arrows: move  |  {}: {}  |  {}/Esc: quit",
        bindings.player_paddle_up,
        bindings.player_paddle_down,
        bindings.pause,
        pause_label,
        bindings.quit
    )
}

/// Draw the status panel and the controls hint
pub fn render_status<R: Rng>(frame: &mut Frame, game: &Game<R>, bindings: &KeyBindings) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Status
            Constraint::Length(3), // Controls hint
        ])
        .split(area);

    let title_style = if game.state.paused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };
    let title = if game.state.paused {
        " MULTIPONG - PAUSED "
    } else {
        " MULTIPONG "
    };

    let lines: Vec<Line> = status_lines(game).into_iter().map(Line::from).collect();
    let status = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, title_style)),
    );
    frame.render_widget(status, chunks[0]);

    let hint = Paragraph::new(Line::from(controls_hint(bindings, game.pause_label())))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hint, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Difficulty;
    use crate::config::Config;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_status_lines() {
        let mut config = Config::default();
        config.ball.initial_balls = 2;
        let game = Game::new(&config, Difficulty::default(), StdRng::seed_from_u64(1));

        let lines = status_lines(&game);
        assert_eq!(lines[0], "Balls in play:   2");
        assert!(lines[3].ends_with("210.0"));
        assert_eq!(lines[6], "Ball spawner:    idle");
    }

    #[test]
    fn test_controls_hint_uses_bindings() {
        assert_eq!(
            controls_hint(&KeyBindings::default(), "Pause"),
            "W/S or arrows: move  |  P: Pause  |  Q/Esc: quit"
        );

        let bindings = KeyBindings {
            player_paddle_up: "I".to_string(),
            player_paddle_down: "K".to_string(),
            pause: "Space".to_string(),
            quit: "X".to_string(),
        };
        let hint = controls_hint(&bindings, "Resume");
        assert_eq!(hint, "I/K or arrows: move  |  Space: Resume  |  X/Esc: quit");
        assert!(!hint.contains("W/S"));
    }
}
