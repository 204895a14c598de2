use bevy::prelude::*;

#[derive(States, Default, Clone, Eq, PartialEq, Debug, Hash)]
pub enum GameState {
    #[default]
    MainMenu,
    InGame,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(Startup, spawn_camera)
            .add_systems(Update, (debug_state_transitions, log_state_transitions));
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn debug_state_transitions(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Digit1) {
        next_state.set(GameState::MainMenu);
    } else if keys.just_pressed(KeyCode::Digit2) {
        next_state.set(GameState::InGame);
    }
}

fn log_state_transitions(state: Res<State<GameState>>) {
    if state.is_changed() {
        info!("Current State: {:?}", state.get());
    }
}
