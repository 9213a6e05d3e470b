//! Game balance and tuning
//!
//! Loaded from a JSON file next to the binary; anything missing falls back to
//! the defaults in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Phase;

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Ball speed multiplier for this preset
    pub fn ball_speed_scale(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.75,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.35,
        }
    }

    /// Starting lives for this preset
    pub fn lives(&self) -> u8 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Normal => 3,
            Difficulty::Hard => 2,
        }
    }
}

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub difficulty: Difficulty,

    // === Motion ===
    /// Ball speed at Normal difficulty (units/s)
    pub ball_speed: f32,
    /// Paddle speed at full control deflection (units/s)
    pub paddle_speed: f32,
    /// Horizontal share of the launch direction per unit of paddle control
    pub launch_spread: f32,

    // === Rules ===
    pub lives: u8,
    pub points_per_brick: u64,

    // === Layout ===
    pub brick_rows: u32,
    pub brick_cols: u32,
    /// Percent chance a brick is armored (2-3 hits)
    pub armored_chance: u32,
    /// Percent chance a brick is indestructible
    pub indestructible_chance: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,

            ball_speed: BALL_SPEED,
            paddle_speed: PADDLE_SPEED,
            launch_spread: 0.5,

            lives: Difficulty::Normal.lives(),
            points_per_brick: 10,

            brick_rows: 5,
            brick_cols: 9,
            armored_chance: 20,
            indestructible_chance: 4,
        }
    }
}

impl Tuning {
    /// Create tuning from a difficulty preset (applies preset defaults)
    pub fn from_preset(preset: Difficulty) -> Self {
        let mut tuning = Self::default();
        tuning.apply_preset(preset);
        tuning
    }

    /// Apply a difficulty preset (updates difficulty-dependent values)
    pub fn apply_preset(&mut self, preset: Difficulty) {
        self.difficulty = preset;
        self.lives = preset.lives();

        // Hard boards carry more armor
        if preset == Difficulty::Hard {
            self.armored_chance = self.armored_chance.max(35);
        }
    }

    /// Effective ball speed (respects difficulty)
    pub fn effective_ball_speed(&self) -> f32 {
        self.ball_speed * self.difficulty.ball_speed_scale()
    }

    /// Ball speed the resolver should use in a phase; 0 keeps the ball on the paddle
    pub fn ball_speed_for(&self, phase: Phase) -> f32 {
        match phase {
            Phase::Playing => self.effective_ball_speed(),
            Phase::Serve | Phase::Cleared | Phase::GameOver => 0.0,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    return tuning;
                }
                Err(err) => log::warn!("Ignoring malformed tuning {}: {err}", path.display()),
            },
            Err(err) => log::warn!("Cannot read tuning {}: {err}", path.display()),
        }

        log::info!("Using default tuning");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("Normal"), Some(Difficulty::Normal));
        assert_eq!(Difficulty::parse("norm"), None);
        assert_eq!(Difficulty::parse("nightmare"), None);
        assert_eq!(Difficulty::Easy.as_str(), "Easy");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "ball_speed": 500.0, "difficulty": "Hard" }"#)
            .expect("valid json");
        assert_eq!(tuning.ball_speed, 500.0);
        assert_eq!(tuning.difficulty, Difficulty::Hard);
        assert_eq!(tuning.paddle_speed, PADDLE_SPEED);
        assert_eq!(tuning.brick_cols, 9);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::from_preset(Difficulty::Easy);
        let json = tuning.to_json().expect("serializable");
        assert_eq!(Tuning::from_json(&json).expect("parses back"), tuning);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Tuning::from_json("{ ball_speed: fast }").is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let tuning = Tuning::load(Path::new("/nonexistent/brick-sweep/tuning.json"));
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_ball_speed_per_phase() {
        let tuning = Tuning::from_preset(Difficulty::Hard);
        assert_eq!(tuning.ball_speed_for(Phase::Serve), 0.0);
        assert_eq!(tuning.ball_speed_for(Phase::Playing), BALL_SPEED * 1.35);
        assert_eq!(tuning.lives, 2);
        assert_eq!(tuning.armored_chance, 35);
    }
}
