//! Pendulum collection management
//!
//! `PendulumSet` owns a flat collection of independent pendulum states and
//! is the access point for drivers that evolve and read them.

use crate::pendulum::PendulumState;
use crate::util::remap;

/// An owned, indexable collection of pendulum states
///
/// States are value types stored contiguously; no state references another,
/// so a driver may advance them one at a time or hand the whole slice to a
/// parallel stepper.
pub struct PendulumSet {
    states: Vec<PendulumState>,
}

impl PendulumSet {
    /// Create a new empty set
    pub fn new() -> Self {
        PendulumSet { states: Vec::new() }
    }

    /// Create a new empty set with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        PendulumSet {
            states: Vec::with_capacity(capacity),
        }
    }

    /// Build a set of `count` pendulums with release angles spread evenly
    /// over `[min_angle, max_angle]`
    ///
    /// Each pendulum starts at its spread angle with the angular velocity
    /// of a release from `reference_angle`
    /// (see [`PendulumState::from_release`]).
    ///
    /// # Panics
    ///
    /// Panics if `count < 2`: a single-point spread would make the angle
    /// interpolation range degenerate.
    pub fn spread(
        count: usize,
        min_angle: f64,
        max_angle: f64,
        reference_angle: f64,
        gravity: f64,
        length: f64,
    ) -> Self {
        assert!(count >= 2, "Spread requires at least two pendulums");

        let mut set = PendulumSet::with_capacity(count);
        for i in 0..count {
            let angle = remap(i as f64, 0.0, (count - 1) as f64, min_angle, max_angle);
            set.push(PendulumState::from_release(
                angle,
                reference_angle,
                gravity,
                length,
            ));
        }
        set
    }

    /// Add a state to the set, returning its index
    pub fn push(&mut self, state: PendulumState) -> usize {
        self.states.push(state);
        self.states.len() - 1
    }

    /// Get the number of pendulums
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Get the state at `index`
    pub fn get(&self, index: usize) -> Option<&PendulumState> {
        self.states.get(index)
    }

    /// Get a mutable reference to the state at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut PendulumState> {
        self.states.get_mut(index)
    }

    /// Remove all pendulums
    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// Get an iterator over the states
    pub fn iter(&self) -> impl Iterator<Item = &PendulumState> {
        self.states.iter()
    }

    /// View the states as a slice
    pub fn states(&self) -> &[PendulumState] {
        &self.states
    }

    /// View the states as a mutable slice, e.g. for a stepper
    pub fn states_mut(&mut self) -> &mut [PendulumState] {
        &mut self.states
    }
}

impl Default for PendulumSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_lifecycle() {
        let mut set = PendulumSet::new();

        let i0 = set.push(PendulumState::new(0.1, 0.0));
        let i1 = set.push(PendulumState::new(0.2, 0.0));

        assert_eq!((i0, i1), (0, 1));
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1).unwrap().angle(), 0.2);
        assert!(set.get(2).is_none());

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_set_get_mut() {
        let mut set = PendulumSet::new();
        set.push(PendulumState::zero());

        set.get_mut(0).unwrap().set_angle(1.5);
        assert_eq!(set.get(0).unwrap().angle(), 1.5);
    }

    #[test]
    fn test_spread_endpoint_angles() {
        // Integer-valued range keeps the interpolation exact
        let set = PendulumSet::spread(5, 0.0, 4.0, 4.0, 9.8, 1.0);

        assert_eq!(set.len(), 5);
        assert_eq!(set.get(0).unwrap().angle(), 0.0);
        assert_eq!(set.get(2).unwrap().angle(), 2.0);
        assert_eq!(set.get(4).unwrap().angle(), 4.0);
    }

    #[test]
    fn test_spread_symmetric_range() {
        let set = PendulumSet::spread(20, -2.4, 2.4, 2.8, 9.8, 1.0);

        assert_eq!(set.get(0).unwrap().angle(), -2.4);
        assert!((set.get(19).unwrap().angle() - 2.4).abs() < 1e-12);
        // Everything the spread produces is a valid release
        for state in set.iter() {
            assert!(state.is_valid());
            assert!(state.angular_velocity() >= 0.0);
        }
    }

    #[test]
    #[should_panic(expected = "at least two pendulums")]
    fn test_spread_single_pendulum_panics() {
        PendulumSet::spread(1, -1.0, 1.0, 1.0, 9.8, 1.0);
    }

    #[test]
    fn test_set_default() {
        let set: PendulumSet = Default::default();
        assert!(set.is_empty());
    }
}
