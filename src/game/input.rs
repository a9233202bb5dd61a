use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;

use crate::config::KeyBindings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    TogglePause,
    PlayerPaddleUp,
    PlayerPaddleDown,
}

/// Normalized name of a key: single characters are lowercased, named keys
/// use lowercase names (`arrowup`, `escape`, `enter`). Space is `" "`.
pub fn normalize_key(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Char(c) => c.to_lowercase().collect::<String>(),
        KeyCode::Up => "arrowup".to_string(),
        KeyCode::Down => "arrowdown".to_string(),
        KeyCode::Left => "arrowleft".to_string(),
        KeyCode::Right => "arrowright".to_string(),
        KeyCode::Esc => "escape".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        _ => return None,
    };
    Some(name)
}

/// Map a key binding from the config file into the same namespace as
/// [`normalize_key`]. Accepts `"W"`, `"Up"`, `"ArrowUp"`, `"Esc"`, `"Space"`, ...
pub fn normalize_binding(binding: &str) -> String {
    if binding == " " {
        return binding.to_string();
    }
    let lower = binding.trim().to_lowercase();
    match lower.as_str() {
        "up" => "arrowup".to_string(),
        "down" => "arrowdown".to_string(),
        "left" => "arrowleft".to_string(),
        "right" => "arrowright".to_string(),
        "esc" => "escape".to_string(),
        "return" => "enter".to_string(),
        "space" | "spacebar" => " ".to_string(),
        _ => lower,
    }
}

/// Bindings resolved once so the per-frame lookup is a plain comparison
#[derive(Debug, Clone)]
pub struct ResolvedBindings {
    player_up: String,
    player_down: String,
    pause: String,
    quit: String,
}

impl ResolvedBindings {
    pub fn new(bindings: &KeyBindings) -> Self {
        Self {
            player_up: normalize_binding(&bindings.player_paddle_up),
            player_down: normalize_binding(&bindings.player_paddle_down),
            pause: normalize_binding(&bindings.pause),
            quit: normalize_binding(&bindings.quit),
        }
    }

    /// Action for a key press, if it is bound. Escape always quits and the
    /// arrow keys always drive the player paddle.
    pub fn action_for(&self, key: &KeyEvent) -> Option<InputAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let name = normalize_key(key.code)?;

        if name == self.quit || name == "escape" {
            Some(InputAction::Quit)
        } else if name == self.pause {
            Some(InputAction::TogglePause)
        } else if name == self.player_up || name == "arrowup" {
            Some(InputAction::PlayerPaddleUp)
        } else if name == self.player_down || name == "arrowdown" {
            Some(InputAction::PlayerPaddleDown)
        } else {
            None
        }
    }
}

/// Drain all pending terminal events and return the bound actions.
/// Each Press event generates an immediate action - no state tracking needed.
pub fn poll_input(bindings: &ResolvedBindings) -> Result<Vec<InputAction>, std::io::Error> {
    let mut actions = Vec::new();

    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            if let Some(action) = bindings.action_for(&key) {
                actions.push(action);
            }
        }
    }

    Ok(actions)
}
