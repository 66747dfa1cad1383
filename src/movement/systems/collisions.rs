//! Movement domain: ray-cast floor and wall probes.
//!
//! These feed `SurfaceContact`, the physics-query counterpart to the
//! sensor-driven ground state. Only animation selection reads it.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Player, SurfaceContact};

const PROBE_DISTANCE: f32 = 4.0;

pub(crate) fn detect_floor(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut SurfaceContact), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut surface) in &mut query {
        // Cast a short ray downward from the player's feet
        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            PROBE_DISTANCE,
            true,
            &ground_filter,
        );

        surface.on_floor = hit.is_some();
    }
}

pub(crate) fn detect_walls(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut SurfaceContact), With<Player>>,
) {
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, collider, mut surface) in &mut query {
        let half_width = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.x,
            None => 12.0,
        };

        let origin = transform.translation.truncate();
        let reach = half_width + PROBE_DISTANCE;

        let left_hit = spatial_query.cast_ray(origin, Dir2::NEG_X, reach, true, &wall_filter);
        let right_hit = spatial_query.cast_ray(origin, Dir2::X, reach, true, &wall_filter);

        surface.on_wall = left_hit.is_some() || right_hit.is_some();
    }
}
