//! Hex grid: center generation and adjacency detection.
//!
//! Runs once at startup, storing [`HexCenters`] and [`AdjacencyPairs`] for the
//! plot to consume.

mod entities;
pub(crate) mod systems;

pub use entities::{AdjacencyPairs, HexCenters};

use bevy::prelude::*;

use crate::error::ConfigError;

/// How adjacent centers are found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
#[cfg_attr(feature = "native", derive(clap::ValueEnum))]
pub enum AdjacencyMethod {
    /// Compare the distance of every ordered pair of centers.
    #[default]
    BruteForce,
    /// Look up the six axial neighbours of each cell directly.
    Offset,
}

/// Grid dimensions and adjacency settings.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct GridConfig {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
    /// Distance from a hexagon's center to one of its vertices.
    pub hex_size: f64,
    /// Adjacency detection strategy.
    pub adjacency: AdjacencyMethod,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 7,
            cols: 7,
            hex_size: 1.0,
            adjacency: AdjacencyMethod::BruteForce,
        }
    }
}

impl GridConfig {
    /// Checks the hex size is usable for layout and view fitting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.hex_size.is_finite() {
            return Err(ConfigError::NonFiniteHexSize(self.hex_size));
        }
        if self.hex_size <= 0.0 {
            return Err(ConfigError::NonPositiveHexSize(self.hex_size));
        }
        Ok(())
    }
}

/// Grid plugin: generates centers and adjacency pairs at startup.
pub struct GridPlugin(pub GridConfig);

impl Plugin for GridPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<GridConfig>()
            .register_type::<HexCenters>()
            .register_type::<AdjacencyPairs>()
            .insert_resource(self.0.clone())
            .add_systems(Startup, systems::generate_grid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_startup(cfg: GridConfig) -> App {
        let mut app = App::new();
        app.add_plugins(GridPlugin(cfg));
        app.update();
        app
    }

    #[test]
    fn default_config_is_seven_by_seven_unit_hexes() {
        let cfg = GridConfig::default();
        assert_eq!((cfg.rows, cfg.cols), (7, 7));
        assert_eq!(cfg.hex_size, 1.0);
        assert_eq!(cfg.adjacency, AdjacencyMethod::BruteForce);
    }

    #[test]
    fn validate_accepts_default() {
        assert_eq!(GridConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_sizes() {
        let bad = |hex_size| GridConfig {
            hex_size,
            ..default()
        };
        assert_eq!(
            bad(0.0).validate(),
            Err(ConfigError::NonPositiveHexSize(0.0))
        );
        assert_eq!(
            bad(-1.0).validate(),
            Err(ConfigError::NonPositiveHexSize(-1.0))
        );
        assert!(matches!(
            bad(f64::NAN).validate(),
            Err(ConfigError::NonFiniteHexSize(_))
        ));
    }

    #[test]
    fn startup_inserts_centers_and_pairs() {
        let app = run_startup(GridConfig::default());
        let centers = app.world().resource::<HexCenters>();
        let pairs = app.world().resource::<AdjacencyPairs>();
        assert_eq!(centers.centers.len(), 49);
        assert_eq!(pairs.pairs.len(), 240);
    }

    #[test]
    fn offset_method_matches_brute_force_in_app() {
        let brute = run_startup(GridConfig {
            rows: 4,
            cols: 6,
            ..default()
        });
        let offset = run_startup(GridConfig {
            rows: 4,
            cols: 6,
            adjacency: AdjacencyMethod::Offset,
            ..default()
        });
        assert_eq!(
            brute.world().resource::<AdjacencyPairs>().pairs,
            offset.world().resource::<AdjacencyPairs>().pairs
        );
    }

    #[test]
    fn empty_grid_produces_empty_resources() {
        let app = run_startup(GridConfig {
            rows: 0,
            ..default()
        });
        assert!(app.world().resource::<HexCenters>().centers.is_empty());
        assert!(app.world().resource::<AdjacencyPairs>().pairs.is_empty());
    }
}
