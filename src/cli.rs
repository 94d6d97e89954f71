//! Command-line overrides for the grid and plot configuration.

use clap::Parser;

use crate::grid::{AdjacencyMethod, GridConfig};
use crate::plot::PlotConfig;

/// Hex grid adjacency viewer.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Number of grid rows [default: 7].
    #[arg(long)]
    pub rows: Option<u32>,
    /// Number of grid columns [default: 7].
    #[arg(long)]
    pub cols: Option<u32>,
    /// Distance from a hexagon's center to a vertex [default: 1].
    #[arg(long, allow_negative_numbers = true)]
    pub hex_size: Option<f64>,
    /// Adjacency detection strategy [default: brute-force].
    #[arg(long, value_enum)]
    pub adjacency: Option<AdjacencyMethod>,
    /// Side length of the square window in pixels [default: 1000].
    #[arg(long)]
    pub window_size: Option<u32>,
}

impl Cli {
    /// Applies the given flags on top of the default configs.
    pub fn into_configs(self) -> (GridConfig, PlotConfig) {
        let mut grid = GridConfig::default();
        let mut plot = PlotConfig::default();
        if let Some(rows) = self.rows {
            grid.rows = rows;
        }
        if let Some(cols) = self.cols {
            grid.cols = cols;
        }
        if let Some(hex_size) = self.hex_size {
            grid.hex_size = hex_size;
        }
        if let Some(adjacency) = self.adjacency {
            grid.adjacency = adjacency;
        }
        if let Some(window_size) = self.window_size {
            plot.window_size = window_size;
        }
        (grid, plot)
    }
}
