use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use chronometer::plugins::clock::ClockPlugin;
use chronometer::plugins::clock_hud::ClockHudPlugin;
use chronometer::plugins::core::CorePlugin;
use chronometer::plugins::debug_ui::DebugUiPlugin;
use chronometer::plugins::input::InputPlugin;
use chronometer::resources::{CliArgs, ClockConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliArgs::parse();
    let mut config = ClockConfig::default();
    cli.apply(&mut config);
    // Reject a bad --speed before the window ever opens.
    config.validate()?;

    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin)
        .insert_resource(config)
        .add_plugins(CorePlugin)
        .add_plugins(InputPlugin)
        .add_plugins(ClockPlugin)
        .add_plugins(ClockHudPlugin)
        .add_plugins(DebugUiPlugin)
        .run();

    Ok(())
}
