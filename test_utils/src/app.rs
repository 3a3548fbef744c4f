//! Headless Bevy app fixtures.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use sailsim::{Boat, HelmInput, SailingPlugin, SimConfig};

/// Builder for headless apps running [`SailingPlugin`] on a fixed clock.
pub struct SailingTestAppBuilder {
    app: App,
}

impl SailingTestAppBuilder {
    /// Create a headless app that advances `frame` per update.
    #[must_use]
    pub fn new(config: SimConfig, frame: Duration) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(frame))
            .add_plugins(SailingPlugin::new(config));
        Self { app }
    }

    /// Hold `helm` for the whole run.
    #[must_use]
    pub fn helm(mut self, helm: HelmInput) -> Self {
        self.app.insert_resource(helm);
        self
    }

    /// Run the startup schedule and prime the clock. The first update
    /// always sees a zero frame time.
    #[must_use]
    pub fn prime(mut self) -> Self {
        self.app.update();
        self
    }

    /// Build and return the configured `App`.
    #[must_use]
    pub fn build(self) -> App {
        self.app
    }
}

/// Copy of the single boat in `app`.
///
/// # Panics
/// Panics unless exactly one boat exists.
pub fn boat(app: &mut App) -> Boat {
    let world = app.world_mut();
    let mut query = world.query::<&Boat>();
    query
        .single(world)
        .unwrap_or_else(|e| panic!("expected exactly one boat: {e}"))
        .clone()
}

/// Run `frames` updates.
pub fn run_frames(app: &mut App, frames: u32) {
    for _ in 0..frames {
        app.update();
    }
}
