// Difficulty profiles for the AI paddle

use crate::config::AIConfig;

const DEFAULT_SPEED_MULTIPLIER: f32 = 1.0;
const DEFAULT_RELAX_WHEN_AWAY: f32 = 0.5;

/// How sloppy and how fast the AI paddle is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Width of the uniform noise band added to the predicted intercept
    pub error_range: f32,
    /// Scale on the base step while tracking a ball
    pub speed_multiplier: f32,
    /// Scale on the base step while drifting back to center
    pub relax_when_away: f32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            error_range: 0.0,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            relax_when_away: DEFAULT_RELAX_WHEN_AWAY,
        }
    }
}

impl Difficulty {
    /// Noise amplitude actually used. NaN means no noise and a negative
    /// range is treated as its magnitude.
    pub fn effective_error_range(&self) -> f32 {
        if self.error_range.is_finite() {
            self.error_range.abs()
        } else {
            0.0
        }
    }

    /// Multiplier used while tracking; zero or NaN fall back to 1
    pub fn effective_speed_multiplier(&self) -> f32 {
        if self.speed_multiplier == 0.0 || !self.speed_multiplier.is_finite() {
            DEFAULT_SPEED_MULTIPLIER
        } else {
            self.speed_multiplier
        }
    }

    /// Multiplier used while idle; anything not strictly positive falls back to 0.5
    pub fn effective_relax_when_away(&self) -> f32 {
        if self.relax_when_away > 0.0 && self.relax_when_away.is_finite() {
            self.relax_when_away
        } else {
            DEFAULT_RELAX_WHEN_AWAY
        }
    }
}

/// Named difficulty presets
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DifficultyLevel {
    /// Wide noise and slow steering, beatable by beginners
    Easy,
    /// Moderate noise, base steering speed
    Medium,
    /// Tight aim and quick steering
    Hard,
}

impl DifficultyLevel {
    /// Parse a level name, case-insensitively
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "easy" => Some(DifficultyLevel::Easy),
            "medium" | "normal" => Some(DifficultyLevel::Medium),
            "hard" => Some(DifficultyLevel::Hard),
            _ => None,
        }
    }

    /// Get display name for the level
    pub fn display_name(&self) -> &str {
        match self {
            DifficultyLevel::Easy => "Easy",
            DifficultyLevel::Medium => "Medium",
            DifficultyLevel::Hard => "Hard",
        }
    }

    /// Get description for the level
    pub fn description(&self) -> &str {
        match self {
            DifficultyLevel::Easy => "Beginner-friendly - aims loosely and moves slowly",
            DifficultyLevel::Medium => "Steady opponent - occasional misreads",
            DifficultyLevel::Hard => "Quick and accurate - rarely misreads a ball",
        }
    }

    /// Get all available levels
    pub fn all() -> Vec<DifficultyLevel> {
        vec![
            DifficultyLevel::Easy,
            DifficultyLevel::Medium,
            DifficultyLevel::Hard,
        ]
    }

    pub fn profile(&self) -> Difficulty {
        match self {
            DifficultyLevel::Easy => Difficulty {
                error_range: 120.0,
                speed_multiplier: 0.6,
                relax_when_away: 0.3,
            },
            DifficultyLevel::Medium => Difficulty {
                error_range: 60.0,
                speed_multiplier: 1.0,
                relax_when_away: 0.5,
            },
            DifficultyLevel::Hard => Difficulty {
                error_range: 20.0,
                speed_multiplier: 1.5,
                relax_when_away: 0.8,
            },
        }
    }
}

impl From<&AIConfig> for Difficulty {
    /// Preset named by `difficulty`, with any explicit overrides applied.
    /// Unknown names fall back to medium.
    fn from(config: &AIConfig) -> Self {
        let level = DifficultyLevel::parse(&config.difficulty).unwrap_or_else(|| {
            tracing::warn!(
                difficulty = %config.difficulty,
                "unknown AI difficulty, using medium"
            );
            DifficultyLevel::Medium
        });

        let preset = level.profile();
        Difficulty {
            error_range: config.error_range.unwrap_or(preset.error_range),
            speed_multiplier: config.speed_multiplier.unwrap_or(preset.speed_multiplier),
            relax_when_away: config.relax_when_away.unwrap_or(preset.relax_when_away),
        }
    }
}
