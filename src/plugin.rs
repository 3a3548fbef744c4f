//! Bevy plugin driving the sailing simulation.
//!
//! Each frame runs, in order: wind oscillation, helm input, boat physics,
//! waypoint arrival, wake sampling, telemetry and the hull transform. All of
//! these live in [`SailingSet`] so input systems can be ordered before it.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{info, warn};
use thiserror::Error;

use crate::config::{PhysicsConfig, SimConfig};
use crate::helm::{apply_helm, HelmInput};
use crate::integrator::advance;
use crate::navigation::{Waypoint, WaypointSpawner};
use crate::telemetry::Telemetry;
use crate::wake::WakeTrail;
use crate::wind::{Wind, WindOscillator};
use crate::Boat;

/// Event raised when a physics step would leave a boat in a non-finite state.
///
/// The step is discarded and the boat keeps its previous state.
#[derive(Event, Debug, Clone, Error)]
#[error("boat {entity} produced non-finite state over a {dt} s step")]
pub struct SimulationError {
    /// The boat whose step was rejected.
    pub entity: Entity,
    /// Frame duration that was rejected, s.
    pub dt: f64,
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn log_simulation_error(event: On<SimulationError>) {
    warn!("rejected physics step: {}", event.event());
}

/// Systems that advance the simulation each frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SailingSet;

/// Installs the simulation resources, spawns the boat and schedules the
/// per-frame systems.
#[derive(Debug, Clone, Default)]
pub struct SailingPlugin {
    config: SimConfig,
}

impl SailingPlugin {
    /// Plugin running with `config`.
    #[must_use]
    pub const fn new(config: SimConfig) -> Self {
        Self { config }
    }
}

impl Plugin for SailingPlugin {
    fn build(&self, app: &mut App) {
        let SimConfig {
            physics,
            wind,
            navigation,
        } = self.config.clone();
        let oscillator = WindOscillator::new(wind);

        app.insert_resource(oscillator.current())
            .insert_resource(oscillator)
            .insert_resource(physics)
            .insert_resource(WaypointSpawner::new(&navigation))
            .init_resource::<Waypoint>()
            .init_resource::<HelmInput>()
            .init_resource::<WakeTrail>()
            .init_resource::<Telemetry>()
            .add_observer(log_simulation_error)
            .add_systems(Startup, spawn_boat)
            .add_systems(
                Update,
                (
                    oscillate_wind,
                    steer,
                    step_boats,
                    refresh_waypoint,
                    record_wake,
                    publish_telemetry,
                    sync_pose,
                )
                    .chain()
                    .in_set(SailingSet),
            );

        #[cfg(feature = "render")]
        app.add_systems(Update, read_keyboard.before(SailingSet));
    }
}

fn spawn_boat(
    mut commands: Commands,
    mut spawner: ResMut<WaypointSpawner>,
    mut waypoint: ResMut<Waypoint>,
) {
    let boat = Boat::new();
    *waypoint = spawner.place_around(boat.position);
    info!(
        "boat launched on {:.0}°; first waypoint at ({:.1}, {:.1})",
        boat.heading.to_degrees(),
        waypoint.position.x,
        waypoint.position.y
    );
    commands.spawn((boat.pose(), boat));
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn oscillate_wind(time: Res<Time>, mut oscillator: ResMut<WindOscillator>, mut wind: ResMut<Wind>) {
    *wind = oscillator.advance(time.delta_secs_f64());
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn steer(time: Res<Time>, helm: Res<HelmInput>, mut boats: Query<&mut Boat>) {
    let dt = time.delta_secs_f64();
    for mut boat in &mut boats {
        apply_helm(&mut boat, *helm, dt);
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn step_boats(
    mut commands: Commands,
    time: Res<Time>,
    wind: Res<Wind>,
    config: Res<PhysicsConfig>,
    mut boats: Query<(Entity, &mut Boat)>,
) {
    let dt = time.delta_secs_f64();
    for (entity, mut boat) in &mut boats {
        let next = advance(&boat, &wind, &config, dt);
        if next.is_finite() {
            *boat = next;
        } else {
            commands.trigger(SimulationError { entity, dt });
        }
    }
}

fn refresh_waypoint(
    boats: Query<&Boat>,
    mut spawner: ResMut<WaypointSpawner>,
    mut waypoint: ResMut<Waypoint>,
) {
    let Ok(boat) = boats.single() else {
        return;
    };
    // Copy out so change detection fires only on a respawn.
    let mut next = *waypoint;
    if spawner.refresh(boat, &mut next) {
        *waypoint = next;
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn record_wake(time: Res<Time>, boats: Query<&Boat>, mut wake: ResMut<WakeTrail>) {
    let Ok(boat) = boats.single() else {
        return;
    };
    wake.record(boat.position, time.delta_secs_f64());
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn publish_telemetry(
    boats: Query<&Boat>,
    wind: Res<Wind>,
    waypoint: Res<Waypoint>,
    mut telemetry: ResMut<Telemetry>,
) {
    let Ok(boat) = boats.single() else {
        return;
    };
    *telemetry = Telemetry::capture(boat, &wind, &waypoint);
}

fn sync_pose(mut boats: Query<(&Boat, &mut Transform), Changed<Boat>>) {
    for (boat, mut transform) in &mut boats {
        *transform = boat.pose();
    }
}

#[cfg(feature = "render")]
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn read_keyboard(keyboard: Res<ButtonInput<KeyCode>>, mut helm: ResMut<HelmInput>) {
    use crate::helm::{RudderCommand, SheetCommand};

    let pressed = |a, b| keyboard.pressed(a) || keyboard.pressed(b);
    let rudder = match (
        pressed(KeyCode::KeyA, KeyCode::ArrowLeft),
        pressed(KeyCode::KeyD, KeyCode::ArrowRight),
    ) {
        (true, false) => RudderCommand::Port,
        (false, true) => RudderCommand::Starboard,
        _ => RudderCommand::Centre,
    };
    let sheet = match (
        pressed(KeyCode::KeyW, KeyCode::ArrowUp),
        pressed(KeyCode::KeyS, KeyCode::ArrowDown),
    ) {
        (true, false) => SheetCommand::TrimIn,
        (false, true) => SheetCommand::Ease,
        _ => SheetCommand::Hold,
    };
    *helm = HelmInput { rudder, sheet };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WindConfig;
    use bevy::time::TimeUpdateStrategy;
    use rstest::rstest;
    use std::time::Duration;

    fn app_with(config: SimConfig) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(20)))
            .add_plugins(SailingPlugin::new(config));
        app
    }

    fn boat(app: &mut App) -> Boat {
        let world = app.world_mut();
        let mut query = world.query::<&Boat>();
        query.single(world).expect("exactly one boat").clone()
    }

    #[rstest]
    fn plugin_initialises_resources() {
        let mut app = app_with(SimConfig::default());
        assert!(app.world().contains_resource::<Wind>());
        assert!(app.world().contains_resource::<HelmInput>());
        assert!(app.world().contains_resource::<PhysicsConfig>());
        app.update();
        let waypoint = *app.world().resource::<Waypoint>();
        assert!(waypoint.active);
        let b = boat(&mut app);
        assert!(waypoint.distance_from(&b) >= 80.0 - 1e-9);
    }

    #[rstest]
    fn boat_moves_and_telemetry_follows() {
        let mut app = app_with(SimConfig::default());
        for _ in 0..100 {
            app.update();
        }
        let b = boat(&mut app);
        assert!(b.speed() > 0.0);
        let telemetry = app.world().resource::<Telemetry>();
        assert!((telemetry.speed - b.speed()).abs() < 1e-12);
        assert!(!app.world().resource::<WakeTrail>().is_empty());
    }

    #[derive(Resource, Default)]
    struct Rejected(Vec<SimulationError>);

    #[expect(
        clippy::needless_pass_by_value,
        reason = "Observer systems must accept On<T> by value."
    )]
    fn capture(event: On<SimulationError>, mut rejected: ResMut<Rejected>) {
        rejected.0.push(event.event().clone());
    }

    #[rstest]
    fn non_finite_step_is_rejected() {
        let mut app = app_with(SimConfig::default());
        app.init_resource::<Rejected>().add_observer(capture);
        app.update();
        app.update();
        let before = boat(&mut app);

        *app.world_mut().resource_mut::<WindOscillator>() = WindOscillator::new(WindConfig {
            speed: f64::NAN,
            ..WindConfig::default()
        });
        app.update();

        assert_eq!(boat(&mut app), before);
        let rejected = &app.world().resource::<Rejected>().0;
        assert_eq!(rejected.len(), 1);
        assert!((rejected[0].dt - 0.02).abs() < 1e-9);
    }
}
