use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::events::{PauseTimeEvent, ResumeTimeEvent};
use crate::plugins::core::GameState;
use crate::resources::GameClock;

pub struct DebugUiPlugin;

impl Plugin for DebugUiPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin::default());
        }

        app.add_systems(Update, debug_panel);
    }
}

fn debug_panel(
    mut contexts: EguiContexts,
    state: Res<State<GameState>>,
    clock: Option<Res<GameClock>>,
    diagnostics: Res<DiagnosticsStore>,
    mut pause_events: EventWriter<PauseTimeEvent>,
    mut resume_events: EventWriter<ResumeTimeEvent>,
) {
    egui::Window::new("Clock Debug").show(contexts.ctx_mut(), |ui| {
        ui.label(format!("Current State: {:?}", state.get()));

        if let Some(fps) = diagnostics
            .get(&FrameTimeDiagnosticsPlugin::FPS)
            .and_then(|diag| diag.smoothed())
        {
            ui.label(format!("FPS: {:.1}", fps));
        }

        ui.separator();

        match clock {
            Some(clock) => {
                ui.label(clock.display_line());
                ui.label(format!("time_of_day: {:.6}", clock.time_of_day()));
                ui.label(format!("paused: {}", clock.is_paused()));

                if ui.button("Pause Time").clicked() {
                    pause_events.send(PauseTimeEvent);
                }
                if ui.button("Resume Time").clicked() {
                    resume_events.send(ResumeTimeEvent);
                }
            }
            None => {
                ui.label("No clock (press 2 to enter the game)");
            }
        }
    });
}
