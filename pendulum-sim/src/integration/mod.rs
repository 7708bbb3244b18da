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
//! Numerical integration of the pendulum equation of motion
//!
//! The frictionless simple pendulum obeys the nonlinear system
//!
//! ```text
//! dθ/dt = ω
//! dω/dt = −(gravity/length)·sin(θ)
//! ```
//!
//! This module provides a classical fourth-order Runge-Kutta (RK4) stepper
//! for that system plus the energy diagnostics used to monitor it.
//!
//! # Timestep Guidelines
//!
//! - Too small: numerical precision issues and wasted computation
//! - Too large: instability and inaccuracy
//! - Recommended: start with h = 1/60 (one step per rendered frame) and
//!   adjust; [`Rk4Stepper::validate_timestep`] flags steps that are extreme
//!   relative to the pendulum's natural period
//!
//! RK4 is explicit and fourth-order accurate, but not symplectic: over very
//! long runs the mechanical energy drifts slowly rather than being conserved
//! exactly. The drift is bounded and small for frame-rate timesteps.

use crate::pendulum::PendulumState;

mod rk4;

pub use rk4::{step, Rk4Stepper};

/// Calculate the kinetic energy of a pendulum state
///
/// Expressed per unit m·l²: KE = ½·ω²
pub fn kinetic_energy(state: &PendulumState) -> f64 {
    0.5 * state.angular_velocity() * state.angular_velocity()
}

/// Calculate the gravitational potential energy of a pendulum state
///
/// Expressed per unit m·l², zero at pivot height: PE = −(gravity/length)·cos(θ)
pub fn potential_energy(state: &PendulumState, gravity: f64, length: f64) -> f64 {
    -(gravity / length) * state.angle().cos()
}

/// Calculate the total mechanical energy of a pendulum state
///
/// The conserved quantity of the frictionless pendulum. An RK4 run keeps it
/// approximately constant; the drift over a simulation is a direct measure
/// of integration error.
pub fn mechanical_energy(state: &PendulumState, gravity: f64, length: f64) -> f64 {
    kinetic_energy(state) + potential_energy(state, gravity, length)
}

/// Calculate the total mechanical energy over multiple pendulums
pub fn total_mechanical_energy<'a, I>(states: I, gravity: f64, length: f64) -> f64
where
    I: Iterator<Item = &'a PendulumState>,
{
    let mut total = 0.0;
    for state in states {
        total += mechanical_energy(state, gravity, length);
    }
    total
}
