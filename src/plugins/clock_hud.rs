//! Clock HUD - the on-screen display adapter for the game clock.
//!
//! A positioned, styled text region spawned on scene entry and torn
//! down on scene exit. Each tick it writes the clock's display line
//! into the existing text node; when the clock reports a 10-minute
//! bucket crossing it additionally rebuilds the text surface from
//! scratch. The two render paths are intentionally redundant on
//! boundary ticks; the heuristic gates only the rebuild.

use bevy::prelude::*;

use crate::plugins::core::GameState;
use crate::resources::{ClockConfig, GameClock};
use crate::systems::clock_tick::clock_tick_system;

pub struct ClockHudPlugin;

impl Plugin for ClockHudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::InGame), spawn_clock_hud)
            .add_systems(
                FixedUpdate,
                refresh_clock_hud
                    .after(clock_tick_system)
                    .run_if(in_state(GameState::InGame).and(resource_exists::<GameClock>)),
            )
            .add_systems(OnExit(GameState::InGame), despawn_clock_hud);
    }
}

/// Marker for the HUD background node.
#[derive(Component)]
pub struct ClockHudRoot;

/// Marker for the text child the plain-update path writes into.
#[derive(Component)]
pub struct ClockHudText;

fn spawn_clock_hud(
    mut commands: Commands,
    config: Res<ClockConfig>,
    asset_server: Res<AssetServer>,
) {
    commands
        .spawn((
            Name::new("Clock HUD"),
            ClockHudRoot,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(config.hud_left),
                top: Val::Px(config.hud_top),
                padding: UiRect::all(Val::Px(config.background_padding)),
                ..default()
            },
            BackgroundColor(config.background_color),
        ))
        .with_children(|parent| {
            // Starts blank; the first tick's unconditional text update
            // fills it in.
            parent.spawn(text_surface(String::new(), &config, &asset_server));
        });
    info!("Spawned Clock HUD");
}

/// The fully styled text child, as built by both the initial spawn and
/// the rebuild path.
fn text_surface(
    line: String,
    config: &ClockConfig,
    asset_server: &AssetServer,
) -> (ClockHudText, Text, TextFont, TextColor) {
    let font = match &config.font_path {
        Some(path) => asset_server.load(path.clone()),
        None => Handle::default(),
    };
    (
        ClockHudText,
        Text::new(line),
        TextFont {
            font,
            font_size: config.font_size,
            ..default()
        },
        TextColor(config.font_color),
    )
}

/// Runs right after the clock has advanced, once per tick.
fn refresh_clock_hud(
    mut commands: Commands,
    clock: Res<GameClock>,
    config: Res<ClockConfig>,
    asset_server: Res<AssetServer>,
    root_query: Query<Entity, With<ClockHudRoot>>,
    mut text_query: Query<&mut Text, With<ClockHudText>>,
) {
    let line = clock.display_line();

    // Full rebuild path, gated by the bucket heuristic: tear the text
    // surface down and respawn it with full styling.
    if clock.should_refresh_display() {
        if let Ok(root) = root_query.get_single() {
            commands.entity(root).despawn_descendants();
            let surface = text_surface(line.clone(), &config, &asset_server);
            commands.entity(root).with_children(|parent| {
                parent.spawn(surface);
            });
        }
    }

    // Plain text update, unconditional every tick. Redundant with the
    // rebuild on boundary ticks; kept that way on purpose.
    for mut text in &mut text_query {
        text.0 = line.clone();
    }
}

fn despawn_clock_hud(mut commands: Commands, query: Query<Entity, With<ClockHudRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}
