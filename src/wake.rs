//! Wake trail: a bounded history of recent boat positions.

use std::collections::VecDeque;

use bevy::prelude::Resource;

use crate::constants::{WAKE_INTERVAL, WAKE_LENGTH};
use crate::Vector2D;

/// Samples the boat's position at a fixed interval, keeping the newest
/// `capacity` points.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct WakeTrail {
    points: VecDeque<Vector2D>,
    since_last: f64,
    interval: f64,
    capacity: usize,
}

impl Default for WakeTrail {
    fn default() -> Self {
        Self::new(WAKE_INTERVAL, WAKE_LENGTH)
    }
}

impl WakeTrail {
    /// An empty trail.
    #[must_use]
    pub fn new(interval: f64, capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            since_last: 0.0,
            interval,
            capacity,
        }
    }

    /// Accumulates `dt` and appends `position` once the interval has elapsed.
    /// Returns whether a sample was taken.
    pub fn record(&mut self, position: Vector2D, dt: f64) -> bool {
        if !dt.is_finite() || dt <= 0.0 {
            return false;
        }
        self.since_last += dt;
        if self.since_last < self.interval {
            return false;
        }
        self.since_last = 0.0;
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        if self.capacity > 0 {
            self.points.push_back(position);
        }
        true
    }

    /// Samples from oldest to newest.
    pub fn points(&self) -> impl Iterator<Item = &Vector2D> {
        self.points.iter()
    }

    /// Number of retained samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no samples have been taken yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
