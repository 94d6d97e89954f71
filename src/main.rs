#![warn(missing_docs)]
//! Hex grid adjacency viewer.
//!
//! Computes the centers of an offset-column hexagonal grid, finds every pair of
//! centers that share an edge, and plots them as red points joined by green
//! lines.

#[cfg(feature = "native")]
mod cli;
mod error;
mod grid;
pub mod math;
mod plot;

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use grid::{GridConfig, GridPlugin};
use plot::{PlotConfig, PlotPlugin};

/// Application-wide state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum GameState {
    /// Plot shown without overlays.
    #[default]
    Running,
    /// World inspector overlay active (Tab to toggle).
    Inspecting,
}

fn main() -> AppExit {
    let (grid_cfg, plot_cfg) = configs();
    if let Err(err) = grid_cfg.validate().and_then(|()| plot_cfg.validate()) {
        eprintln!("error: {err}");
        return AppExit::error();
    }

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hex Grid Adjacency".into(),
            resolution: WindowResolution::new(plot_cfg.window_size, plot_cfg.window_size),
            ..default()
        }),
        ..default()
    }))
    .register_type::<GameState>()
    .init_state::<GameState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(GridPlugin(grid_cfg))
    .add_plugins(PlotPlugin(plot_cfg))
    .add_systems(Update, exit_on_esc)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(GameState::Inspecting)));

    #[cfg(feature = "native")]
    {
        use bevy::remote::{RemotePlugin, http::RemoteHttpPlugin};
        app.add_plugins(RemotePlugin::default())
            .add_plugins(RemoteHttpPlugin::default());
    }

    app.run()
}

#[cfg(feature = "native")]
fn configs() -> (GridConfig, PlotConfig) {
    use clap::Parser;
    cli::Cli::parse().into_configs()
}

#[cfg(not(feature = "native"))]
fn configs() -> (GridConfig, PlotConfig) {
    (GridConfig::default(), PlotConfig::default())
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        let new_state = match state.get() {
            GameState::Running => GameState::Inspecting,
            GameState::Inspecting => GameState::Running,
        };
        info!("switching to {new_state:?}");
        next.set(new_state);
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
