use bevy::prelude::*;

use super::entities::{AdjacencyPairs, HexCenters};
use super::{AdjacencyMethod, GridConfig};
use crate::math;

/// Computes the grid centers and their adjacency, then inserts both resources.
pub fn generate_grid(mut commands: Commands, cfg: Res<GridConfig>) {
    let centers = math::generate_hex_grid(cfg.rows, cfg.cols, cfg.hex_size);
    let pairs = match cfg.adjacency {
        AdjacencyMethod::BruteForce => math::find_adjacent_centers(&centers, cfg.hex_size),
        AdjacencyMethod::Offset => math::find_adjacent_by_offset(&centers, cfg.rows, cfg.cols),
    };

    info!(
        "generated {}x{} grid: {} centers, {} adjacency pairs ({:?})",
        cfg.rows,
        cfg.cols,
        centers.len(),
        pairs.len(),
        cfg.adjacency
    );
    if let Some((min, max)) = math::grid_bounds(&centers) {
        debug!("grid bounds: {min} .. {max}");
    }

    commands.insert_resource(HexCenters { centers });
    commands.insert_resource(AdjacencyPairs { pairs });
}
