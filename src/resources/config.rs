use bevy::prelude::*;

use crate::resources::game_clock::ClockConfigError;

/// FixedUpdate ticks composing one real-time second. Fixed design
/// parameter: together with `ticks_per_game_minute` it calibrates the
/// per-tick increment so that the default speed gives
/// "1 real second = 1 in-game minute".
pub const TICKS_PER_SECOND: f64 = 60.0;

/// Startup configuration for the clock and its HUD.
///
/// Only `ticks_per_game_minute` and the start values affect the clock
/// algorithm; everything else is HUD presentation.
#[derive(Resource, Debug, Clone)]
pub struct ClockConfig {
    /// Ticks that must elapse for one in-game minute to pass. Must be
    /// positive; validated by [`ClockConfig::validate`].
    pub ticks_per_game_minute: f64,
    /// Calendar position a fresh session starts at.
    pub start_day: u32,
    pub start_month: u32,
    pub start_year: u32,
    /// HUD offset from the window's top-left corner, logical pixels.
    pub hud_left: f32,
    pub hud_top: f32,
    pub font_size: f32,
    pub font_color: Color,
    /// Asset path of the HUD font. `None` uses the engine default font.
    pub font_path: Option<String>,
    pub background_color: Color,
    pub background_padding: f32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            ticks_per_game_minute: 60.0,
            start_day: 1,
            start_month: 1,
            start_year: 1,
            hud_left: 16.0,
            hud_top: 16.0,
            font_size: 20.0,
            font_color: Color::WHITE,
            font_path: None,
            background_color: Color::srgba(0.0, 0.0, 0.0, 0.6),
            background_padding: 6.0,
        }
    }
}

impl ClockConfig {
    /// Rejects speeds that would produce an infinite or NaN per-tick
    /// increment. Zero, negative, and NaN all fail the `> 0` test.
    pub fn validate(&self) -> Result<(), ClockConfigError> {
        if self.ticks_per_game_minute > 0.0 {
            Ok(())
        } else {
            Err(ClockConfigError::InvalidSpeed(self.ticks_per_game_minute))
        }
    }

    /// Hours added to the clock per tick at this configuration's speed.
    pub fn increment(&self) -> f64 {
        1.0 / self.ticks_per_game_minute / TICKS_PER_SECOND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ClockConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        for bad in [0.0, -1.0, -60.0, f64::NAN] {
            let config = ClockConfig {
                ticks_per_game_minute: bad,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "speed {bad} should be rejected");
        }
    }

    #[test]
    fn test_default_increment_is_one_game_minute_per_real_second() {
        let config = ClockConfig::default();
        // 60 ticks at the default speed add exactly one minute of hours.
        assert_eq!(config.increment(), 1.0 / 60.0 / 60.0);
    }
}
