use bevy::prelude::*;

/// Marker for the orthographic camera framing the grid.
#[derive(Component, Reflect)]
pub struct PlotCamera;

/// Red point drawn at a hex center.
#[derive(Component, Reflect)]
pub struct CenterMarker {
    /// Index of the center in [`crate::grid::HexCenters`].
    pub index: usize,
}

/// Green segment between two adjacent centers.
#[derive(Component, Reflect)]
pub struct AdjacencyLine {
    /// Index of the first center.
    pub from_index: usize,
    /// Index of the second center.
    pub to_index: usize,
}
