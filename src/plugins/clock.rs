use bevy::prelude::*;

use crate::events::{PauseTimeEvent, ResumeTimeEvent};
use crate::plugins::core::GameState;
use crate::resources::{ClockConfig, GameClock, StoredClock};
use crate::systems::clock_tick::clock_tick_system;

/// Plugin owning the [`GameClock`] lifecycle.
///
/// The clock exists only inside `GameState::InGame`: it is constructed
/// on scene entry (from a pending [`StoredClock`] if one was inserted,
/// otherwise fresh from config) and removed on scene exit. Advancement
/// runs in FixedUpdate; pause/resume commands arrive as events and take
/// effect on the next tick.
pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClockConfig>()
            .add_event::<PauseTimeEvent>()
            .add_event::<ResumeTimeEvent>()
            .add_systems(OnEnter(GameState::InGame), insert_clock)
            .add_systems(OnExit(GameState::InGame), remove_clock)
            .add_systems(
                FixedUpdate,
                clock_tick_system
                    .run_if(in_state(GameState::InGame).and(resource_exists::<GameClock>)),
            )
            .add_systems(
                Update,
                (handle_pause_commands, handle_resume_commands)
                    .run_if(resource_exists::<GameClock>),
            );
    }
}

/// Constructs the session's clock. A pending [`StoredClock`] resource
/// (left by whatever loaded the save) is consumed here; `restore`
/// replaces its invalid fields with config defaults.
fn insert_clock(
    mut commands: Commands,
    config: Res<ClockConfig>,
    stored: Option<Res<StoredClock>>,
) {
    let result = match stored.as_deref() {
        Some(stored) => GameClock::restore(&config, stored),
        None => GameClock::new(&config),
    };
    commands.remove_resource::<StoredClock>();

    match result {
        Ok(clock) => {
            info!("Clock started: {}", clock.display_line());
            commands.insert_resource(clock);
        }
        Err(e) => {
            error!("Invalid clock configuration: {e}; starting with defaults");
            // The default configuration always validates.
            if let Ok(clock) = GameClock::new(&ClockConfig::default()) {
                commands.insert_resource(clock);
            }
        }
    }
}

fn remove_clock(mut commands: Commands) {
    commands.remove_resource::<GameClock>();
}

fn handle_pause_commands(
    mut events: EventReader<PauseTimeEvent>,
    mut clock: ResMut<GameClock>,
) {
    if !events.is_empty() {
        events.clear();
        clock.pause();
        info!("Time paused at {}", clock.time_string());
    }
}

fn handle_resume_commands(
    mut events: EventReader<ResumeTimeEvent>,
    mut clock: ResMut<GameClock>,
) {
    if !events.is_empty() {
        events.clear();
        clock.resume();
        info!("Time resumed at {}", clock.time_string());
    }
}
