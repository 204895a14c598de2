use bevy::prelude::*;

use crate::resources::GameClock;

/// System that advances the game clock on every FixedUpdate tick.
///
/// At the 60Hz schedule rate and the default speed:
/// - 1 in-game minute passes every ~1 real second
/// - 1 in-game day passes every ~24 real minutes
///
/// Pause is handled inside the clock itself, so this runs whenever the
/// clock resource exists.
pub fn clock_tick_system(mut clock: ResMut<GameClock>) {
    clock.advance();
}
