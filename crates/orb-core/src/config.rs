//! Tuning presets for the orb and the terminal overlay.
//!
//! Two presets exist. `shield` drains a health bar while the orb spins fast
//! and regenerates it when still; `threshold` reveals the core the first time
//! the spin velocity crosses a fixed value.

use crate::constants::*;
use thiserror::Error;

/// How accumulated spin turns into a reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealRule {
    /// Continuous health: drain while spinning, regenerate while still.
    Health {
        drain_above: f32,
        drain_per_tick: f32,
        regen_below: f32,
        regen_per_tick: f32,
    },
    /// Single comparison of |spin| against `velocity`.
    Threshold { velocity: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbConfig {
    pub pointer_scale: f32,
    pub friction: f32,
    pub idle_rotation: f32,
    pub tilt_factor: f32,
    pub initial_health: f32,
    pub reveal: RevealRule,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self::shield()
    }
}

impl OrbConfig {
    pub fn shield() -> Self {
        Self {
            pointer_scale: POINTER_SCALE_SHIELD,
            friction: FRICTION,
            idle_rotation: IDLE_ROTATION,
            tilt_factor: TILT_FACTOR_SHIELD,
            initial_health: HEALTH_MAX,
            reveal: RevealRule::Health {
                drain_above: DRAIN_ABOVE,
                drain_per_tick: DRAIN_PER_TICK,
                regen_below: REGEN_BELOW,
                regen_per_tick: REGEN_PER_TICK,
            },
        }
    }

    pub fn threshold() -> Self {
        Self {
            pointer_scale: POINTER_SCALE_THRESHOLD,
            friction: FRICTION,
            idle_rotation: IDLE_ROTATION,
            tilt_factor: 1.0,
            initial_health: HEALTH_MAX,
            reveal: RevealRule::Threshold {
                velocity: REVEAL_VELOCITY,
            },
        }
    }

    /// Pick a preset by the name used in the page's `data-variant` attribute.
    pub fn from_variant(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "" | "shield" | "health" => Some(Self::shield()),
            "threshold" | "shake" => Some(Self::threshold()),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("pointer_scale", self.pointer_scale)?;
        non_negative("idle_rotation", self.idle_rotation.abs())?;
        non_negative("tilt_factor", self.tilt_factor.abs())?;
        if !(self.friction.is_finite() && (0.0..1.0).contains(&self.friction)) {
            return Err(ConfigError::Friction(self.friction));
        }
        if !(self.initial_health.is_finite()
            && (0.0..=HEALTH_MAX).contains(&self.initial_health))
        {
            return Err(ConfigError::InitialHealth(self.initial_health));
        }
        match self.reveal {
            RevealRule::Health {
                drain_above,
                drain_per_tick,
                regen_below,
                regen_per_tick,
            } => {
                non_negative("drain_above", drain_above)?;
                non_negative("drain_per_tick", drain_per_tick)?;
                non_negative("regen_below", regen_below)?;
                non_negative("regen_per_tick", regen_per_tick)?;
                if regen_below > drain_above {
                    return Err(ConfigError::OverlappingBands {
                        regen_below,
                        drain_above,
                    });
                }
            }
            RevealRule::Threshold { velocity } => {
                if !(velocity.is_finite() && velocity > 0.0) {
                    return Err(ConfigError::OutOfRange {
                        field: "velocity",
                        value: velocity,
                    });
                }
            }
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite and non-negative, got {value}")]
    OutOfRange { field: &'static str, value: f32 },
    #[error("friction must be in [0, 1), got {0}")]
    Friction(f32),
    #[error("initial health must be in [0, 100], got {0}")]
    InitialHealth(f32),
    #[error("regen band ({regen_below}) overlaps drain band ({drain_above})")]
    OverlappingBands { regen_below: f32, drain_above: f32 },
    #[error("unknown orb variant {0:?}")]
    UnknownVariant(String),
}

/// Prompt and canned answers for the terminal overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct TerminalConfig {
    pub prompt: String,
    pub contact: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "guest@root:~$".to_string(),
            contact: "hello@example.com".to_string(),
        }
    }
}
