use bevy::prelude::*;

/// Command: stop the clock. No payload; takes effect on the next tick.
#[derive(Event, Debug, Default)]
pub struct PauseTimeEvent;

/// Command: let the clock run again. No payload.
#[derive(Event, Debug, Default)]
pub struct ResumeTimeEvent;
