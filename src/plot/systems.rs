use bevy::camera::ScalingMode;
use bevy::prelude::*;

use super::PlotConfig;
use super::entities::{AdjacencyLine, CenterMarker, PlotCamera};
use crate::grid::{AdjacencyPairs, GridConfig, HexCenters};
use crate::math;

/// Lines sit at z = 0, markers above them.
const MARKER_Z: f32 = 1.0;

/// Spawns an orthographic camera fitted to the grid's bounding box.
pub fn setup_camera(
    mut commands: Commands,
    centers: Option<Res<HexCenters>>,
    grid: Res<GridConfig>,
    plot: Res<PlotConfig>,
) {
    let margin = plot.margin * grid.hex_size as f32;
    let view = match centers {
        Some(centers) => math::fit_view(&centers.centers, margin),
        None => math::fit_view(&[], margin),
    };
    debug!(
        "fitting view {}x{} around {}",
        view.width, view.height, view.center
    );

    commands.spawn((
        Name::new("PlotCamera"),
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: view.width,
                min_height: view.height,
            },
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(view.center.x, view.center.y, 0.0),
        PlotCamera,
    ));
}

/// Spawns a marker mesh per center and a segment mesh per adjacency pair.
pub fn spawn_plot(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    centers: Option<Res<HexCenters>>,
    pairs: Option<Res<AdjacencyPairs>>,
    grid: Res<GridConfig>,
    plot: Res<PlotConfig>,
) {
    let (Some(centers), Some(pairs)) = (centers, pairs) else {
        return;
    };
    let hex_size = grid.hex_size as f32;
    let line_width = plot.line_width * hex_size;

    let point_mesh = meshes.add(Circle::new(plot.point_radius * hex_size));
    let point_material = materials.add(plot.point_color);
    let line_material = materials.add(plot.line_color);

    let plot_entity = commands
        .spawn((Name::new("Plot"), Transform::default(), Visibility::default()))
        .id();

    for pair in &pairs.pairs {
        let Some(seg) = math::segment_placement(pair.from.as_vec2(), pair.to.as_vec2()) else {
            continue;
        };
        let line = commands
            .spawn((
                AdjacencyLine {
                    from_index: pair.from_index,
                    to_index: pair.to_index,
                },
                Name::new(format!("Line({},{})", pair.from_index, pair.to_index)),
                Mesh2d(meshes.add(Rectangle::new(seg.length, line_width))),
                MeshMaterial2d(line_material.clone()),
                Transform::from_xyz(seg.midpoint.x, seg.midpoint.y, 0.0)
                    .with_rotation(Quat::from_rotation_z(seg.angle)),
            ))
            .id();
        commands.entity(plot_entity).add_child(line);
    }

    for (index, center) in centers.centers.iter().enumerate() {
        let pos = center.as_vec2();
        let marker = commands
            .spawn((
                CenterMarker { index },
                Name::new(format!("Center({index})")),
                Mesh2d(point_mesh.clone()),
                MeshMaterial2d(point_material.clone()),
                Transform::from_xyz(pos.x, pos.y, MARKER_Z),
            ))
            .id();
        commands.entity(plot_entity).add_child(marker);
    }

    info!(
        "plotted {} centers and {} lines",
        centers.centers.len(),
        pairs.pairs.len()
    );
}
