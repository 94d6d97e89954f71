//! Plot renderer: red center markers joined by green adjacency lines.
//!
//! Fits an orthographic 2D camera around the grid so the aspect ratio stays
//! equal, and spawns one mesh per center and one per adjacency pair.

mod entities;
mod systems;

pub use entities::{AdjacencyLine, CenterMarker, PlotCamera};

use bevy::prelude::*;

use crate::error::ConfigError;

/// Colours and sizes of the plot.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct PlotConfig {
    /// Width and height of the square window in pixels.
    pub window_size: u32,
    /// Background clear color.
    pub background: Color,
    /// Fill colour of center markers.
    pub point_color: Color,
    /// Colour of adjacency lines.
    pub line_color: Color,
    /// Marker radius as a fraction of the hex size.
    pub point_radius: f32,
    /// Line thickness as a fraction of the hex size.
    pub line_width: f32,
    /// Empty border around the grid as a fraction of the hex size.
    pub margin: f32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            window_size: 1000,
            background: Color::WHITE,
            point_color: Color::srgb(1.0, 0.0, 0.0),
            line_color: Color::srgb_u8(0, 128, 0),
            point_radius: 0.08,
            line_width: 0.02,
            margin: 1.0,
        }
    }
}

impl PlotConfig {
    /// Rejects a zero-sized window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        Ok(())
    }
}

/// Plot plugin: camera fitting and marker/line spawning after grid generation.
pub struct PlotPlugin(pub PlotConfig);

impl Plugin for PlotPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PlotConfig>()
            .register_type::<PlotCamera>()
            .register_type::<CenterMarker>()
            .register_type::<AdjacencyLine>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.background))
            .add_systems(
                Startup,
                (systems::setup_camera, systems::spawn_plot)
                    .after(crate::grid::systems::generate_grid),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GridConfig, GridPlugin};

    fn headless_app(grid: GridConfig) -> App {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<ColorMaterial>>()
            .add_plugins((GridPlugin(grid), PlotPlugin(PlotConfig::default())));
        app.update();
        app
    }

    #[test]
    fn default_window_matches_ten_inch_figure() {
        assert_eq!(PlotConfig::default().window_size, 1000);
    }

    #[test]
    fn validate_rejects_empty_window() {
        let cfg = PlotConfig {
            window_size: 0,
            ..default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyWindow));
        assert_eq!(PlotConfig::default().validate(), Ok(()));
    }

    #[test]
    fn spawns_one_marker_per_center_and_one_line_per_pair() {
        let mut app = headless_app(GridConfig {
            rows: 2,
            cols: 3,
            ..default()
        });
        let world = app.world_mut();
        let markers = world.query::<&CenterMarker>().iter(world).count();
        let lines = world.query::<&AdjacencyLine>().iter(world).count();
        let cameras = world.query::<&PlotCamera>().iter(world).count();
        assert_eq!(markers, 6);
        // 2x3 grid: 3 in-column edges + 2 column gaps of 3 edges each, doubled.
        assert_eq!(lines, 18);
        assert_eq!(cameras, 1);
    }

    #[test]
    fn markers_are_drawn_above_lines() {
        let mut app = headless_app(GridConfig::default());
        let world = app.world_mut();
        let marker_z = world
            .query_filtered::<&Transform, With<CenterMarker>>()
            .iter(world)
            .map(|t| t.translation.z)
            .fold(f32::INFINITY, f32::min);
        let line_z = world
            .query_filtered::<&Transform, With<AdjacencyLine>>()
            .iter(world)
            .map(|t| t.translation.z)
            .fold(f32::NEG_INFINITY, f32::max);
        assert!(marker_z > line_z);
    }

    #[test]
    fn empty_grid_still_gets_a_camera() {
        let mut app = headless_app(GridConfig {
            cols: 0,
            ..default()
        });
        let world = app.world_mut();
        assert_eq!(world.query::<&CenterMarker>().iter(world).count(), 0);
        assert_eq!(world.query::<&PlotCamera>().iter(world).count(), 1);
    }
}
