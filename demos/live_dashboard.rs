//! Headless live dashboard.
//!
//! Runs the tick driver in real time for a few seconds, freezing the sine
//! trace halfway through, and prints per-channel metrics once a second.
//! Finally writes the last five seconds of the square trace as CSV to stdout.

use std::thread;
use std::time::{Duration, Instant};
use wavescope::export::{export_csv, export_file_name};
use wavescope::{Channel, DashboardConfig, TickDriver, peak_bin};

const RUN_SECONDS: u64 = 4;

fn main() -> Result<(), anyhow::Error> {
    let config = DashboardConfig::default();
    let interval = Duration::from_millis(config.update_interval_ms);
    let ticks_per_second = config.ticks_per_second();
    let sampling_rate = config.sampling_rate_hz;

    let mut driver = TickDriver::new(config)?;
    let started = Instant::now();
    let mut next_deadline = started;

    for tick in 1..=RUN_SECONDS * ticks_per_second {
        let frame = driver.tick();

        if tick == RUN_SECONDS * ticks_per_second / 2 {
            driver.toggle_freeze(Channel::Sine);
            println!("-- sine frozen --");
        }

        if tick % ticks_per_second == 0 {
            println!("t = {:.2}s (tick {})", started.elapsed().as_secs_f64(), frame.tick);
            for trace in &frame.traces {
                if let Some(metrics) = trace.metrics {
                    println!(
                        "  {:<16} max {:>7.3}  min {:>7.3}  rms {:>7.3}",
                        trace.channel.title(),
                        metrics.max,
                        metrics.min,
                        metrics.rms
                    );
                }
            }
            if let Some(bin) = frame
                .trace(Channel::Spectrum)
                .and_then(|spectrum| peak_bin(&spectrum.values))
            {
                println!("  spectrum peak at bin {bin}");
            }
        }

        // Fixed-rate schedule; a late tick is not made up for.
        next_deadline += interval;
        let now = Instant::now();
        if next_deadline > now {
            thread::sleep(next_deadline - now);
        } else {
            next_deadline = now;
        }
    }

    let square = driver.frame();
    let square = square
        .trace(Channel::Square)
        .ok_or_else(|| anyhow::anyhow!("square trace missing"))?;
    println!("\n{}", export_file_name(Channel::Square.title(), 5));
    export_csv(std::io::stdout().lock(), &square.values, 5, sampling_rate)?;

    Ok(())
}
