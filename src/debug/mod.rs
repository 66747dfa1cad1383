//! Debug domain: movement state overlay for tuning sessions.
//!
//! F1 toggles a panel showing velocity, ground state, the jump budget,
//! and the grace timers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementInput, MovementState, Player, SurfaceContact};

/// Marker for the overlay root
#[derive(Component, Debug)]
pub struct DebugOverlay;

/// Marker for the overlay text block
#[derive(Component, Debug)]
pub struct DebugOverlayText;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (toggle_overlay, update_overlay));
    }
}

fn spawn_overlay(commands: &mut Commands) {
    commands
        .spawn((
            DebugOverlay,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(20.0),
                top: Val::Px(20.0),
                width: Val::Px(260.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.15, 0.9)),
            ZIndex(500),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("MOVEMENT"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.7, 0.3)),
            ));
            parent.spawn((
                DebugOverlayText,
                Text::new(""),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));
        });
}

/// Toggle the overlay with F1
fn toggle_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    existing: Query<Entity, With<DebugOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    if existing.is_empty() {
        spawn_overlay(&mut commands);
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

fn update_overlay(
    input: Res<MovementInput>,
    player: Query<(&MovementState, &SurfaceContact, &LinearVelocity), With<Player>>,
    mut text: Query<&mut Text, With<DebugOverlayText>>,
) {
    let Ok(mut text) = text.single_mut() else {
        return;
    };
    let Ok((state, surface, velocity)) = player.single() else {
        return;
    };

    **text = format!(
        "vel: ({:.0}, {:.0})\n\
         axis: {:.0} | jump_held: {}\n\
         on_ground: {} | in_air: {}\n\
         on_floor: {} | on_wall: {}\n\
         jumping: {} | apex: {}\n\
         jumps: {} | phase: {:?}\n\
         coyote: {:.3}s | buffer: {:.3}s",
        velocity.x,
        velocity.y,
        input.axis.x,
        input.jump_held,
        state.on_ground,
        state.in_air,
        surface.on_floor,
        surface.on_wall,
        state.jumping,
        state.apex_reached,
        state.jumps_remaining,
        state.gravity_phase,
        state.coyote_time_remaining,
        state.jump_buffer_time_remaining,
    );
}
