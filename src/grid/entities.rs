use bevy::math::DVec2;
use bevy::prelude::*;

use crate::math::AdjacencyPair;

/// Generated hex centers in row-major order.
#[derive(Resource, Default, Reflect)]
pub struct HexCenters {
    /// One center per `(row, col)` cell, index `row * cols + col`.
    pub centers: Vec<DVec2>,
}

/// Ordered adjacency pairs; each shared edge appears once from each side.
#[derive(Resource, Default, Reflect)]
pub struct AdjacencyPairs {
    /// Pairs in finder output order.
    pub pairs: Vec<AdjacencyPair>,
}
