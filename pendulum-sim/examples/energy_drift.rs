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
//! Energy drift diagnostic
//!
//! Steps a single large-amplitude pendulum for ten seconds and reports how
//! far the mechanical energy has moved from its initial value. RK4 is not
//! symplectic, so a small bounded drift is expected; a large one points at
//! a timestep problem.

use pendulum_sim::integration::{kinetic_energy, mechanical_energy, potential_energy, Rk4Stepper};
use pendulum_sim::PendulumState;

const GRAVITY: f64 = 9.8;
const LENGTH: f64 = 1.0;

fn main() {
    println!("Pendulum Sim - Energy Drift Example");
    println!("====================================\n");

    let mut state = PendulumState::from_release(
        140.0_f64.to_radians(),
        160.0_f64.to_radians(),
        GRAVITY,
        LENGTH,
    );
    let stepper = Rk4Stepper::new(1.0 / 60.0);
    let initial_energy = mechanical_energy(&state, GRAVITY, LENGTH);

    println!(
        "{:>6} {:>12} {:>12} {:>12} {:>14}",
        "t (s)", "KE", "PE", "E", "rel. drift"
    );

    for frame in 0..600 {
        state = stepper.step(&state, GRAVITY, LENGTH);

        if frame % 60 == 59 {
            let t = (frame + 1) as f64 / 60.0;
            let ke = kinetic_energy(&state);
            let pe = potential_energy(&state, GRAVITY, LENGTH);
            let energy = mechanical_energy(&state, GRAVITY, LENGTH);
            let drift = (energy - initial_energy).abs() / initial_energy.abs();
            println!(
                "{:6.1} {:12.6} {:12.6} {:12.6} {:14.3e}",
                t, ke, pe, energy, drift
            );
        }
    }

    println!("\nExample completed successfully!");
}
