use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

use crate::events::{PauseTimeEvent, ResumeTimeEvent};

#[derive(Actionlike, PartialEq, Eq, Clone, Copy, Hash, Debug, Reflect)]
pub enum ClockAction {
    PauseTime,
    ResumeTime,
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InputManagerPlugin::<ClockAction>::default())
            .init_resource::<ActionState<ClockAction>>()
            .insert_resource(get_default_input_map())
            .add_systems(Update, dispatch_clock_commands);
    }
}

pub fn get_default_input_map() -> InputMap<ClockAction> {
    let mut input_map = InputMap::default();

    input_map.insert(ClockAction::PauseTime, KeyCode::KeyP);
    input_map.insert(ClockAction::ResumeTime, KeyCode::KeyO);

    input_map
}

/// Translates key presses into the no-payload clock command events.
fn dispatch_clock_commands(
    action_state: Res<ActionState<ClockAction>>,
    mut pause_events: EventWriter<PauseTimeEvent>,
    mut resume_events: EventWriter<ResumeTimeEvent>,
) {
    if action_state.just_pressed(&ClockAction::PauseTime) {
        pause_events.send(PauseTimeEvent);
    }
    if action_state.just_pressed(&ClockAction::ResumeTime) {
        resume_events.send(ResumeTimeEvent);
    }
}
