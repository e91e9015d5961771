//! Demonstrates smoothing, sleeping and edge snapping with responsive-analog
//!
//! Feeds a simulated noisy 10-bit pot through channels with different
//! settings and prints how each responds.

use responsive_analog::{Config, Instant, ResponsiveAnalog};

/// Deterministic +/-3 LSB noise
fn noise(t: u32) -> i32 {
    ((t.wrapping_mul(2_654_435_761) >> 29) as i32) - 3
}

fn pot(t: u32) -> u16 {
    let position = match t {
        0..=999 => 300,
        1000..=1999 => 800,
        _ => 2,
    };
    (position + noise(t)).clamp(0, 1023) as u16
}

fn run(title: &str, config: Config) {
    println!("{}", title);
    println!("   t(ms)   raw → value  changed  sleeping");

    let mut channel = ResponsiveAnalog::new(config);
    for t in (0..3000).step_by(5) {
        let reading = channel.update(pot(t), Instant::from_ticks(t));
        if t % 250 == 0 || (reading.changed && t % 25 == 0) {
            println!(
                "   {:5}  {:4} → {:4}  {:7}  {}",
                t,
                channel.raw_value(),
                reading.value,
                reading.changed,
                channel.is_sleeping()
            );
        }
    }
    println!();
}

fn main() {
    println!("=== responsive-analog Settling Examples ===\n");

    run("1. Smoothing only (sleep disabled)", Config::new(false, 0.01));

    run("2. Sleep enabled, edge snap disabled", Config {
        edge_snap_enabled: false,
        ..Config::new(true, 0.01)
    });

    run("3. Sleep and edge snap (defaults)", Config::default());
}
