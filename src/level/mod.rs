//! Level domain: room geometry, player spawning, and camera follow.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::MainCamera;
use crate::movement::{
    Facing, GameLayer, Ground, GroundSensor, MovementState, MovementTuning, Player,
    SurfaceContact, Wall,
};
use crate::sprites::AnimationController;

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
const SENSOR_SIZE: Vec2 = Vec2::new(20.0, 6.0);
const CAMERA_FOLLOW_RATE: f32 = 5.0;

/// Where the player enters the level. The player prefab is instantiated
/// at this transform; optional flips mirror the initial sprite and an
/// optional camera link makes the main camera track the spawned player.
#[derive(Component, Debug)]
pub struct PlayerSpawnPoint {
    pub flip_h: bool,
    pub flip_v: bool,
    pub camera_follow: bool,
}

impl Default for PlayerSpawnPoint {
    fn default() -> Self {
        Self {
            flip_h: false,
            flip_v: false,
            camera_follow: true,
        }
    }
}

/// Marker for the entity the main camera tracks.
#[derive(Component, Debug)]
pub struct CameraTarget;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_level, spawn_players).chain())
            .add_systems(Update, follow_camera_target);
    }
}

fn spawn_level(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Sensor]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Ground
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(900.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(900.0, 40.0),
        ground_layers,
    ));

    // Boundary walls
    for x in [-470.0, 470.0] {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(Vec2::new(40.0, 520.0)),
                ..default()
            },
            Transform::from_xyz(x, 60.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(40.0, 520.0),
            wall_layers,
        ));
    }

    // Ledge platforms with a gap between them, for walk-offs and
    // buffered landings
    for (x, y, w) in [(-240.0, -60.0, 180.0), (90.0, 10.0, 160.0), (330.0, 80.0, 140.0)] {
        commands.spawn((
            Ground,
            Sprite {
                color: platform_color,
                custom_size: Some(Vec2::new(w, 20.0)),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
            RigidBody::Static,
            Collider::rectangle(w, 20.0),
            ground_layers,
        ));
    }

    // Player entry, standing on the ground strip
    commands.spawn((
        PlayerSpawnPoint::default(),
        Transform::from_xyz(-380.0, -156.0, 0.0),
    ));
}

/// Instantiate the player prefab at every spawn point: dynamic body with
/// locked rotation, zero engine friction and zero engine gravity (the
/// movement systems own both), plus the ground sensor as a child under
/// the feet.
fn spawn_players(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    markers: Query<(&Transform, &PlayerSpawnPoint)>,
) {
    for (transform, marker) in &markers {
        let mut state = MovementState::grounded(&tuning);
        if marker.flip_h {
            state.facing = Facing::Left;
        }

        let player = commands
            .spawn((
                (Player, state, SurfaceContact::default()),
                AnimationController::default(),
                Sprite {
                    color: Color::srgb(0.9, 0.9, 0.9),
                    custom_size: Some(PLAYER_SIZE),
                    flip_x: marker.flip_h,
                    flip_y: marker.flip_v,
                    ..default()
                },
                Transform::from_translation(transform.translation),
                (
                    RigidBody::Dynamic,
                    Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                    LockedAxes::ROTATION_LOCKED,
                    LinearVelocity::default(),
                    GravityScale(0.0),
                    Friction::new(0.0),
                    CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
                ),
            ))
            .id();

        let sensor = commands
            .spawn((
                GroundSensor::new(player),
                Sensor,
                Collider::rectangle(SENSOR_SIZE.x, SENSOR_SIZE.y),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Sensor, [GameLayer::Ground]),
                Transform::from_xyz(0.0, -PLAYER_SIZE.y / 2.0, 0.0),
            ))
            .id();
        commands.entity(player).add_child(sensor);

        if marker.camera_follow {
            commands.entity(player).insert(CameraTarget);
        }

        info!(
            "Spawned player at ({:.0}, {:.0}), camera_follow={}",
            transform.translation.x, transform.translation.y, marker.camera_follow
        );
    }
}

/// Ease the main camera toward the follow target.
fn follow_camera_target(
    time: Res<Time>,
    target: Query<&Transform, (With<CameraTarget>, Without<MainCamera>)>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(target_transform) = target.single() else {
        return;
    };

    for mut camera_transform in &mut camera {
        let current = camera_transform.translation.truncate();
        let goal = target_transform.translation.truncate();
        let eased = current.lerp(goal, (CAMERA_FOLLOW_RATE * time.delta_secs()).min(1.0));
        camera_transform.translation = eased.extend(camera_transform.translation.z);
    }
}
