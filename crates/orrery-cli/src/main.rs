use anyhow::Result;
use clap::{Parser, Subcommand};
use orrery_sim::{
    summarize, validate_system, OrbitalSystem, SimulationClock, TickPolicy,
};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "orrery")]
#[command(about = "Orbital simulation clock for the solar-system scene")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the tick loop and print per-body positions each frame
    Run {
        /// Real-time duration to simulate (seconds)
        #[arg(short, long, default_value = "10")]
        duration: f64,

        /// Target frames per second
        #[arg(long, default_value = "10")]
        fps: f64,

        /// Use a fixed per-tick step instead of measured wall-clock deltas
        #[arg(long)]
        fixed_dt: Option<f64>,

        /// Playback rate (simulated seconds per real second)
        #[arg(long, default_value = "1.0")]
        rate: f64,

        /// Seed for randomized initial angles
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Pause after this many seconds, resume after the same span again
        #[arg(long)]
        pause_after: Option<f64>,
    },

    /// List the built-in body catalog
    Bodies,

    /// Advance the system once by T simulated seconds and print positions
    Snapshot {
        /// Simulated seconds to advance
        #[arg(short, long, default_value = "0")]
        t: f64,

        /// Seed for randomized initial angles
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Emit JSON instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Advance over a long horizon and report orbit-circle drift
    Validate {
        /// Total simulated seconds
        #[arg(long, default_value = "100000")]
        duration: f64,

        /// Step size (simulated seconds)
        #[arg(long, default_value = "0.1")]
        step: f64,

        /// Seed for randomized initial angles
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            duration,
            fps,
            fixed_dt,
            rate,
            seed,
            pause_after,
        } => {
            if fps <= 0.0 {
                anyhow::bail!("fps must be positive");
            }

            let policy = match fixed_dt {
                Some(step) => TickPolicy::Fixed(step),
                None => TickPolicy::Measured,
            };
            let mut clock = SimulationClock::new(policy);
            clock.set_rate(rate);

            let mut system = OrbitalSystem::solar_system(seed);
            tracing::info!(
                "Running {} bodies at {} fps ({:?}, rate {})",
                system.len(),
                fps,
                policy,
                clock.rate()
            );

            let frame_time = Duration::from_secs_f64(1.0 / fps);
            let frames = (duration * fps) as usize;
            let pause_frame = pause_after.map(|s| (s * fps) as usize);

            for frame in 0..frames {
                if let Some(p) = pause_frame {
                    if frame == p {
                        clock.pause();
                        tracing::info!("Paused at frame {}", frame);
                    } else if frame == 2 * p {
                        clock.resume();
                        tracing::info!("Resumed at frame {}", frame);
                    }
                }

                let dt = clock.tick();
                if let Err(e) = system.advance(dt, clock.is_paused()) {
                    tracing::warn!("Skipping tick: {}", e);
                }

                print_frame(frame, clock.elapsed_seconds(), &system);
                std::thread::sleep(frame_time);
            }
        }

        Commands::Bodies => {
            let system = OrbitalSystem::solar_system(0);

            println!("{:<10} {:>12} {:>14} {:>12}", "Body", "Orbit", "Speed (rad/s)", "Period (s)");
            for body in system.bodies() {
                let period = body
                    .period()
                    .map(|p| format!("{:.1}", p))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<10} {:>12.1} {:>14.4} {:>12}",
                    body.name, body.orbital_radius, body.angular_speed, period
                );
            }
        }

        Commands::Snapshot { t, seed, json } => {
            let mut system = OrbitalSystem::solar_system(seed);
            system.advance(t, false)?;

            let snapshot = system.snapshot();
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                println!("Positions after {:.2} simulated seconds:", t);
                for state in &snapshot.states {
                    println!(
                        "  {:<10} angle={:>9.4}  x={:>10.3}  z={:>10.3}",
                        state.name, state.angle, state.position.x, state.position.z
                    );
                }
            }
        }

        Commands::Validate { duration, step, seed } => {
            if step <= 0.0 {
                anyhow::bail!("step must be positive");
            }

            let mut system = OrbitalSystem::solar_system(seed);
            let steps = (duration / step) as usize;
            let mut points = Vec::new();

            for _ in 0..steps {
                system.advance(step, false)?;
                points.extend(validate_system(&system));
            }

            let summary = summarize(&points);
            println!("Validated {} samples over {:.0} simulated seconds", summary.num_points, duration);
            println!("  mean radial drift: {:.3e}", summary.mean_drift);
            println!("  max radial drift:  {:.3e}", summary.max_drift);
        }
    }

    Ok(())
}

fn print_frame(frame: usize, elapsed: f64, system: &OrbitalSystem) {
    let line: Vec<String> = system
        .bodies()
        .iter()
        .filter(|b| !b.is_stationary())
        .map(|b| {
            let pos = b.position();
            format!("{}=({:.1},{:.1})", b.name, pos.x, pos.z)
        })
        .collect();

    println!("t={:>8.2} frame {:>5}: {}", elapsed, frame, line.join(" "));
}
