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
//! # Pendulum Sim
//!
//! A simulation core for collections of independent simple pendulums,
//! advanced with a classical fourth-order Runge-Kutta (RK4) integrator.
//!
//! ## Features
//!
//! - **Value-type states**: each pendulum is a plain (angle, angular velocity)
//!   pair with no shared or hidden data
//! - **Energy-based release**: initial angular velocity derived from a
//!   zero-velocity release amplitude
//! - **RK4 stepping**: fixed-step fourth-order integration of the nonlinear
//!   pendulum equation of motion
//! - **Parallelization**: optional Rayon support for stepping many pendulums
//!   at once
//!
//! ## Example
//!
//! ```rust
//! use pendulum_sim::{PendulumSet, Rk4Stepper};
//!
//! // Twenty pendulums, release angles spread over [-2, 2] radians, all
//! // sharing a 2.5 rad release amplitude.
//! let mut set = PendulumSet::spread(20, -2.0, 2.0, 2.5, 9.8, 1.0);
//! let stepper = Rk4Stepper::new(1.0 / 60.0);
//!
//! let advanced = stepper.step_all(set.states_mut(), 9.8, 1.0, false);
//! assert_eq!(advanced, 20);
//! ```

#![warn(missing_docs)]

/// Pendulum state and collection types
pub mod pendulum;

/// Numerical integration of the pendulum equation of motion
pub mod integration;

/// Small numeric utilities shared with external drivers
pub mod util;

pub use integration::Rk4Stepper;
pub use pendulum::{PendulumSet, PendulumState};
