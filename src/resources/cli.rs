use bevy::prelude::*;

use crate::resources::config::ClockConfig;

/// Command-line overrides parsed at startup and applied over the
/// default [`ClockConfig`].
#[derive(Resource, Debug, Default)]
pub struct CliArgs {
    /// Ticks per in-game minute. Usage: `cargo run -- --speed 30`
    pub speed: Option<f64>,

    /// Calendar position to start at.
    /// Usage: `cargo run -- --start-day 12 --start-month 7 --start-year 1720`
    pub start_day: Option<u32>,
    pub start_month: Option<u32>,
    pub start_year: Option<u32>,
}

impl CliArgs {
    /// Parse command-line arguments. Unknown flags and unparseable
    /// values are warned about and skipped.
    pub fn parse() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse_from(&args)
    }

    fn parse_from(args: &[String]) -> Self {
        let mut cli = CliArgs::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--speed" => {
                    cli.speed = take_value(args, i, "--speed");
                    i += 2;
                }
                "--start-day" => {
                    cli.start_day = take_value(args, i, "--start-day");
                    i += 2;
                }
                "--start-month" => {
                    cli.start_month = take_value(args, i, "--start-month");
                    i += 2;
                }
                "--start-year" => {
                    cli.start_year = take_value(args, i, "--start-year");
                    i += 2;
                }
                arg => {
                    if arg.starts_with('-') {
                        warn!("CLI: Unknown argument '{}'", arg);
                    }
                    i += 1;
                }
            }
        }

        cli
    }

    /// Applies the overrides that were present on the command line.
    pub fn apply(&self, config: &mut ClockConfig) {
        if let Some(speed) = self.speed {
            config.ticks_per_game_minute = speed;
        }
        if let Some(day) = self.start_day {
            config.start_day = day;
        }
        if let Some(month) = self.start_month {
            config.start_month = month;
        }
        if let Some(year) = self.start_year {
            config.start_year = year;
        }
    }
}

/// Parses the value following `args[i]`, warning when it is absent or
/// not a number of type `T`.
fn take_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Option<T> {
    match args.get(i + 1) {
        Some(raw) => match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("CLI: {} expects a number, got '{}'", flag, raw);
                None
            }
        },
        None => {
            warn!("CLI: {} requires a value", flag);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_overrides() {
        let cli = CliArgs::parse_from(&args(&[
            "--speed",
            "30",
            "--start-day",
            "12",
            "--start-year",
            "1720",
        ]));
        assert_eq!(cli.speed, Some(30.0));
        assert_eq!(cli.start_day, Some(12));
        assert_eq!(cli.start_month, None);
        assert_eq!(cli.start_year, Some(1720));
    }

    #[test]
    fn test_unknown_and_malformed_flags_are_skipped() {
        let cli =
            CliArgs::parse_from(&args(&["--frobnicate", "--speed", "fast", "--start-day", "3"]));
        assert_eq!(cli.speed, None);
        assert_eq!(cli.start_day, Some(3));
    }

    #[test]
    fn test_apply_touches_only_present_overrides() {
        let cli = CliArgs {
            speed: Some(120.0),
            start_month: Some(7),
            ..Default::default()
        };
        let mut config = ClockConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.ticks_per_game_minute, 120.0);
        assert_eq!(config.start_month, 7);
        assert_eq!(config.start_day, 1);
        assert_eq!(config.start_year, 1);
    }
}
