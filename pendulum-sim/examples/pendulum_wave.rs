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
//! Pendulum wave demonstration
//!
//! A row of pendulums with release angles spread across a range, all
//! sharing one release amplitude, stepped in lockstep at 60 FPS. A real
//! driver would hand each bob offset to its renderer; here each frame is
//! condensed into a row of digits giving the horizontal bob positions.

use pendulum_sim::util::remap;
use pendulum_sim::{PendulumSet, Rk4Stepper};

const GRAVITY: f64 = 9.8;
const LENGTH: f64 = 1.0;

fn main() {
    println!("Pendulum Sim - Pendulum Wave Example");
    println!("=====================================\n");

    let count = 20;
    let release = 160.0_f64.to_radians();
    let min_angle = (-140.0_f64).to_radians();
    let max_angle = 140.0_f64.to_radians();

    let mut set = PendulumSet::spread(count, min_angle, max_angle, release, GRAVITY, LENGTH);
    let stepper = Rk4Stepper::new(1.0 / 60.0);
    stepper
        .validate_timestep(GRAVITY, LENGTH)
        .expect("frame-rate timestep should validate");

    println!(
        "Created {} pendulums over [{:.0}, {:.0}] deg, release amplitude {:.0} deg\n",
        set.len(),
        min_angle.to_degrees(),
        max_angle.to_degrees(),
        release.to_degrees()
    );

    // Ten seconds of simulation, one printed row per half second
    for frame in 0..600 {
        stepper.step_all(set.states_mut(), GRAVITY, LENGTH, true);

        if frame % 30 == 29 {
            let t = (frame + 1) as f64 / 60.0;
            let row: String = set
                .iter()
                .map(|state| {
                    let [x, _] = state.bob_offset(LENGTH);
                    // Horizontal position mapped onto a 0..=9 glyph ramp
                    let cell = remap(x, -LENGTH, LENGTH, 0.0, 9.0).round().clamp(0.0, 9.0);
                    char::from_digit(cell as u32, 10).unwrap()
                })
                .collect();
            println!("t = {:4.1}s  |{}|", t, row);
        }
    }

    println!("\nExample completed successfully!");
}
