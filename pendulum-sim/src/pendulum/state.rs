// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Pendulum state representation
//!
//! A pendulum is described by its angular displacement from the stable
//! equilibrium and its angular velocity. States are plain value types with
//! double-precision fields; a collection of pendulums is an array of
//! independent states.

/// Angular state of a single simple pendulum
///
/// The angle is measured in radians from the stable (hanging) equilibrium
/// and is deliberately never wrapped to [-π, π]: a pendulum with enough
/// energy to go over the top accumulates angle without bound. Angular
/// velocity is in radians per time unit.
///
/// # Examples
///
/// ```
/// use pendulum_sim::pendulum::PendulumState;
///
/// let state = PendulumState::new(0.5, 0.0);
/// assert_eq!(state.angle(), 0.5);
/// assert!(state.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumState {
    angle: f64,
    angular_velocity: f64,
}

impl PendulumState {
    /// Create a new state with the given angle and angular velocity
    pub fn new(angle: f64, angular_velocity: f64) -> Self {
        PendulumState {
            angle,
            angular_velocity,
        }
    }

    /// Create a state at rest at the stable equilibrium
    pub fn zero() -> Self {
        PendulumState::new(0.0, 0.0)
    }

    /// Create a state released from a zero-velocity amplitude
    ///
    /// The pendulum is considered to have been released at rest from
    /// `reference_angle` (taken with the sign of `start_angle`) and is
    /// observed at `start_angle`; its angular velocity is the speed implied
    /// by energy conservation between those two angles:
    ///
    /// ```text
    /// v² = 2·(gravity/length)·(cos(start_angle) − cos(±reference_angle))
    /// ```
    ///
    /// A negative radicand (floating-point round-off at the turning point,
    /// or a start angle beyond the reference amplitude) is floored to zero,
    /// so the result degenerates to a release at rest rather than a NaN.
    /// The returned angular velocity is always `>= 0`.
    ///
    /// `gravity` and `length` are not validated here; callers supply
    /// positive values.
    ///
    /// # Examples
    ///
    /// ```
    /// use pendulum_sim::pendulum::PendulumState;
    ///
    /// // Released exactly at the amplitude: at rest.
    /// let at_rest = PendulumState::from_release(1.2, 1.2, 9.8, 1.0);
    /// assert_eq!(at_rest.angular_velocity(), 0.0);
    ///
    /// // Observed below the amplitude: moving.
    /// let swinging = PendulumState::from_release(0.3, 1.2, 9.8, 1.0);
    /// assert!(swinging.angular_velocity() > 0.0);
    /// ```
    pub fn from_release(
        start_angle: f64,
        reference_angle: f64,
        gravity: f64,
        length: f64,
    ) -> Self {
        let turning_point = reference_angle.copysign(start_angle);
        let v_squared = 2.0 * (gravity / length) * (start_angle.cos() - turning_point.cos());
        PendulumState::new(start_angle, v_squared.max(0.0).sqrt())
    }

    /// Get the angle in radians
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Get the angular velocity in radians per time unit
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    /// Set the angle
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    /// Set the angular velocity
    pub fn set_angular_velocity(&mut self, angular_velocity: f64) {
        self.angular_velocity = angular_velocity;
    }

    /// Check if both fields are finite (not NaN or infinite)
    pub fn is_valid(&self) -> bool {
        self.angle.is_finite() && self.angular_velocity.is_finite()
    }

    /// Get the state as an `[angle, angular_velocity]` array
    pub fn as_array(&self) -> [f64; 2] {
        [self.angle, self.angular_velocity]
    }

    /// Create a state from an `[angle, angular_velocity]` array
    pub fn from_array(arr: [f64; 2]) -> Self {
        PendulumState::new(arr[0], arr[1])
    }

    /// Cartesian offset of the bob from the pivot
    ///
    /// Returns `[length·sin(angle), −length·cos(angle)]`: x to the right,
    /// y up, so the equilibrium bob hangs at `[0, −length]`. Drivers use
    /// this to place visual elements; the simulation itself never reads it.
    pub fn bob_offset(&self, length: f64) -> [f64; 2] {
        [length * self.angle.sin(), -length * self.angle.cos()]
    }
}

impl Default for PendulumState {
    fn default() -> Self {
        PendulumState::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_creation() {
        let state = PendulumState::new(1.0, -2.0);
        assert_eq!(state.angle(), 1.0);
        assert_eq!(state.angular_velocity(), -2.0);
    }

    #[test]
    fn test_state_zero() {
        let state = PendulumState::zero();
        assert_eq!(state.angle(), 0.0);
        assert_eq!(state.angular_velocity(), 0.0);
    }

    #[test]
    fn test_state_validation() {
        let valid = PendulumState::new(1.0, 2.0);
        assert!(valid.is_valid());

        let invalid = PendulumState::new(f64::NAN, 2.0);
        assert!(!invalid.is_valid());

        let infinite = PendulumState::new(1.0, f64::INFINITY);
        assert!(!infinite.is_valid());
    }

    #[test]
    fn test_state_array_conversion() {
        let state = PendulumState::new(1.0, 2.0);
        assert_eq!(state.as_array(), [1.0, 2.0]);

        let state2 = PendulumState::from_array([3.0, 4.0]);
        assert_eq!(state2.angle(), 3.0);
        assert_eq!(state2.angular_velocity(), 4.0);
    }

    #[test]
    fn test_release_at_amplitude_is_at_rest() {
        // cos(θ) − cos(θ) is exactly zero, so the velocity is exactly zero
        let state = PendulumState::from_release(0.8, 0.8, 9.8, 1.0);
        assert_eq!(state.angle(), 0.8);
        assert_eq!(state.angular_velocity(), 0.0);
    }

    #[test]
    fn test_release_below_amplitude_is_moving() {
        let state = PendulumState::from_release(0.0, 1.0, 9.8, 1.0);
        // v² = 2·9.8·(1 − cos(1))
        let expected = (2.0 * 9.8 * (1.0 - 1.0_f64.cos())).sqrt();
        assert!((state.angular_velocity() - expected).abs() < 1e-15);
    }

    #[test]
    fn test_release_beyond_amplitude_clamps_to_rest() {
        // Start angle past the turning point: radicand is negative and the
        // policy is to floor it, never to produce NaN
        let state = PendulumState::from_release(1.5, 1.0, 9.8, 1.0);
        assert_eq!(state.angular_velocity(), 0.0);
        assert!(state.is_valid());
    }

    #[test]
    fn test_release_speed_sign_symmetry() {
        let positive = PendulumState::from_release(0.7, 1.3, 9.8, 1.0);
        let negative = PendulumState::from_release(-0.7, 1.3, 9.8, 1.0);
        assert_eq!(
            positive.angular_velocity(),
            negative.angular_velocity()
        );
        assert_eq!(negative.angle(), -0.7);
    }

    #[test]
    fn test_release_velocity_never_negative() {
        for start in [-3.0, -1.0, -0.1, 0.0, 0.1, 1.0, 3.0] {
            let state = PendulumState::from_release(start, 1.0, 9.8, 1.0);
            assert!(state.angular_velocity() >= 0.0);
        }
    }

    #[test]
    fn test_bob_offset() {
        let hanging = PendulumState::zero().bob_offset(2.0);
        assert_eq!(hanging, [0.0, -2.0]);

        let horizontal = PendulumState::new(std::f64::consts::FRAC_PI_2, 0.0).bob_offset(1.0);
        assert!((horizontal[0] - 1.0).abs() < 1e-15);
        assert!(horizontal[1].abs() < 1e-15);
    }

    #[test]
    fn test_state_default() {
        let state: PendulumState = Default::default();
        assert_eq!(state, PendulumState::zero());
    }
}
