//! Pure computation helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `DVec2` inputs, making them straightforward to unit-test.

use bevy::math::DVec2;
use bevy::prelude::{Reflect, Vec2};
use hexx::Hex;

/// √3, the ratio between adjacent center spacing and hex size.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Relative tolerance used by [`is_close`].
pub const CLOSE_RTOL: f64 = 1e-5;
/// Absolute tolerance used by [`is_close`].
pub const CLOSE_ATOL: f64 = 1e-8;

/// Two hex centers whose distance equals `√3 × size`.
///
/// Pairs are ordered: the finders report `(a, b)` and `(b, a)` separately.
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct AdjacencyPair {
    /// Index of the first center in the generated sequence.
    pub from_index: usize,
    /// Index of the second center in the generated sequence.
    pub to_index: usize,
    /// Coordinates of the first center.
    pub from: DVec2,
    /// Coordinates of the second center.
    pub to: DVec2,
}

/// Generates the centers of a `rows × cols` hex grid, row-major.
///
/// Columns are spaced `1.5 × size` apart and rows `√3 × size` apart; odd
/// columns are shifted up by half a row.
///
/// # Examples
/// ```
/// # use hex_adjacency::math::generate_hex_grid;
/// let centers = generate_hex_grid(1, 2, 1.0);
/// assert_eq!(centers.len(), 2);
/// assert_eq!(centers[0].x, 0.0);
/// assert_eq!(centers[1].x, 1.5);
/// ```
pub fn generate_hex_grid(rows: u32, cols: u32, size: f64) -> Vec<DVec2> {
    let mut centers = Vec::with_capacity(rows as usize * cols as usize);
    for row in 0..rows {
        for col in 0..cols {
            let x = col as f64 * 1.5 * size;
            let mut y = row as f64 * SQRT_3 * size;
            if col % 2 == 1 {
                y += SQRT_3 * size / 2.0;
            }
            centers.push(DVec2::new(x, y));
        }
    }
    centers
}

/// Float closeness test: `|actual - expected| <= atol + rtol * |expected|`.
pub fn is_close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= CLOSE_ATOL + CLOSE_RTOL * expected.abs()
}

/// Brute-force adjacency scan over every ordered pair of distinct centers.
///
/// O(N²). Each shared edge is reported twice, once from each side.
pub fn find_adjacent_centers(centers: &[DVec2], size: f64) -> Vec<AdjacencyPair> {
    let expected = SQRT_3 * size;
    let mut adjacency = Vec::new();
    for (i, &a) in centers.iter().enumerate() {
        for (j, &b) in centers.iter().enumerate() {
            if i == j {
                continue;
            }
            if is_close(a.distance(b), expected) {
                adjacency.push(AdjacencyPair {
                    from_index: i,
                    to_index: j,
                    from: a,
                    to: b,
                });
            }
        }
    }
    adjacency
}

/// Axial hex coordinate of the cell at `(row, col)` in the odd-shifted column layout.
pub fn offset_to_axial(row: i32, col: i32) -> Hex {
    Hex::new(col, row - (col - (col & 1)) / 2)
}

/// Inverse of [`offset_to_axial`], returning `(row, col)`.
pub fn axial_to_offset(hex: Hex) -> (i32, i32) {
    (hex.y + (hex.x - (hex.x & 1)) / 2, hex.x)
}

/// Adjacency through direct neighbour addressing instead of distance checks.
///
/// Produces the same ordered sequence as [`find_adjacent_centers`] for a grid
/// built by [`generate_hex_grid`] with the same `rows` and `cols`, in O(N).
pub fn find_adjacent_by_offset(centers: &[DVec2], rows: u32, cols: u32) -> Vec<AdjacencyPair> {
    let mut adjacency = Vec::new();
    if cols == 0 {
        return adjacency;
    }
    let (rows_i, cols_i) = (rows as i32, cols as i32);

    for (i, &from) in centers.iter().enumerate() {
        let row = (i / cols as usize) as i32;
        let col = (i % cols as usize) as i32;

        let mut neighbors: Vec<usize> = offset_to_axial(row, col)
            .all_neighbors()
            .into_iter()
            .map(axial_to_offset)
            .filter(|&(r, c)| (0..rows_i).contains(&r) && (0..cols_i).contains(&c))
            .map(|(r, c)| r as usize * cols as usize + c as usize)
            .collect();
        neighbors.sort_unstable();

        for j in neighbors {
            let Some(&to) = centers.get(j) else {
                continue;
            };
            adjacency.push(AdjacencyPair {
                from_index: i,
                to_index: j,
                from,
                to,
            });
        }
    }
    adjacency
}

/// Axis-aligned bounding box `(min, max)` of the centers, `None` when empty.
pub fn grid_bounds(centers: &[DVec2]) -> Option<(DVec2, DVec2)> {
    let first = *centers.first()?;
    Some(
        centers
            .iter()
            .fold((first, first), |(min, max), &c| (min.min(c), max.max(c))),
    )
}

/// Visible region for an orthographic view.
#[derive(Debug, PartialEq)]
pub struct ViewRect {
    /// World-space center of the view.
    pub center: Vec2,
    /// Minimum visible width.
    pub width: f32,
    /// Minimum visible height.
    pub height: f32,
}

/// Fits a view around the centers with `margin` on each side.
///
/// An empty grid yields a `2 × margin` square around the origin.
pub fn fit_view(centers: &[DVec2], margin: f32) -> ViewRect {
    let Some((min, max)) = grid_bounds(centers) else {
        return ViewRect {
            center: Vec2::ZERO,
            width: 2.0 * margin,
            height: 2.0 * margin,
        };
    };
    let size = (max - min).as_vec2();
    ViewRect {
        center: ((min + max) / 2.0).as_vec2(),
        width: size.x + 2.0 * margin,
        height: size.y + 2.0 * margin,
    }
}

/// Placement of a thin rectangle drawn between two points.
#[derive(Debug, PartialEq)]
pub struct SegmentPlacement {
    /// Midpoint between the two ends.
    pub midpoint: Vec2,
    /// Distance between the two ends.
    pub length: f32,
    /// Rotation about Z, in radians, aligning +X with the segment.
    pub angle: f32,
}

/// Computes where to put a segment mesh from `from` to `to`.
///
/// Returns `None` for segments shorter than `0.001`.
pub fn segment_placement(from: Vec2, to: Vec2) -> Option<SegmentPlacement> {
    let diff = to - from;
    let length = diff.length();
    if length < 0.001 {
        return None;
    }
    Some(SegmentPlacement {
        midpoint: (from + to) / 2.0,
        length,
        angle: diff.y.atan2(diff.x),
    })
}
