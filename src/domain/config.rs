use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::input::KeyBindings;

/// Every tunable of the engine.
///
/// Time units: the driver hands timestamps in milliseconds; the physics
/// runs in "ticks" (`time_units_per_ms` ticks per ms). Cooldowns and the
/// grapple presentation ramp are in seconds (`time_units_per_second`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Inflation of the grip-detection box on every side
    pub grip_radius: f64,
    /// Horizontal acceleration per held direction key
    pub player_speed: f64,
    /// Upward acceleration of a jump (only with grip)
    pub jump_force: f64,
    /// Downward acceleration on every non-static body
    pub gravity: f64,
    /// Base velocity-proportional damping
    pub friction: f64,
    pub grip_friction_multiplier: f64,
    pub grapple_friction_multiplier: f64,
    /// Grapple range in multiples of the arena spacing diagonal
    pub grapple_range_spacings: f64,
    /// Presentation ramp speed (fraction per second)
    pub grapple_fraction_rate: f64,
    /// Frames longer than this are discarded
    pub max_frame_ms: f64,
    pub time_units_per_ms: f64,
    pub time_units_per_second: f64,
    /// Seconds between shots
    pub shot_cooldown: f64,
    /// Bullet impulse = grapple range / divisor
    pub bullet_speed_divisor: f64,
    pub shooting_enabled: bool,
    pub collectible_count: usize,
    pub collectible_size: f64,
    /// One entry per player (1 or 2)
    pub bindings: Vec<KeyBindings>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grip_radius: 12.0,
            player_speed: 0.1,
            jump_force: 0.4,
            gravity: 0.1,
            friction: 0.01,
            grip_friction_multiplier: 1.2,
            grapple_friction_multiplier: 0.9,
            grapple_range_spacings: 3.0,
            grapple_fraction_rate: 4.0,
            max_frame_ms: 100.0,
            time_units_per_ms: 0.1,
            time_units_per_second: 100.0,
            shot_cooldown: 1.0,
            bullet_speed_divisor: 12.0,
            shooting_enabled: false,
            collectible_count: 3,
            collectible_size: 12.0,
            bindings: vec![KeyBindings::player_one(), KeyBindings::player_two()],
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON config; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let mut config: EngineConfig = serde_json::from_str(json)?;
        config.normalize_bindings();
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Lower-case every binding so it matches queued key events
    pub fn normalize_bindings(&mut self) {
        for binds in &mut self.bindings {
            binds.lowercase();
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let non_negative = [
            ("grip_radius", self.grip_radius),
            ("player_speed", self.player_speed),
            ("jump_force", self.jump_force),
            ("friction", self.friction),
            ("grip_friction_multiplier", self.grip_friction_multiplier),
            ("grapple_friction_multiplier", self.grapple_friction_multiplier),
            ("grapple_range_spacings", self.grapple_range_spacings),
            ("grapple_fraction_rate", self.grapple_fraction_rate),
            ("shot_cooldown", self.shot_cooldown),
            ("collectible_size", self.collectible_size),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{name} must be finite and >= 0, got {value}")));
            }
        }

        let positive = [
            ("max_frame_ms", self.max_frame_ms),
            ("time_units_per_ms", self.time_units_per_ms),
            ("time_units_per_second", self.time_units_per_second),
            ("bullet_speed_divisor", self.bullet_speed_divisor),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(format!("{name} must be finite and > 0, got {value}")));
            }
        }

        if !self.gravity.is_finite() {
            return Err(invalid(format!("gravity must be finite, got {}", self.gravity)));
        }
        if self.bindings.is_empty() || self.bindings.len() > 2 {
            return Err(invalid(format!(
                "expected 1 or 2 player bindings, got {}",
                self.bindings.len()
            )));
        }
        for (slot, binds) in self.bindings.iter().enumerate() {
            if !binds.is_complete() {
                return Err(invalid(format!("player {slot} has an empty key binding")));
            }
        }
        Ok(())
    }
}

fn invalid(reason: String) -> EngineError {
    EngineError::InvalidConfig { reason }
}
