use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use log::info;
use sailsim::helm::RudderCommand;
use sailsim::{init_logging, HelmInput, SailingPlugin, SailingSet, SimConfig, Telemetry};

/// Simulated frame rate of the headless runner.
const FRAME_RATE: u32 = 60;

/// A frame-stepped sailing simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// TOML file overriding the default configuration
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Simulated seconds to run headless
    #[arg(short, long, default_value_t = 60)]
    seconds: u32,
    /// Rudder held for the whole headless run
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true,
          value_parser = clap::value_parser!(i8).range(-1..=1))]
    rudder: i8,
    /// Run without a window even when rendering is available
    #[cfg(feature = "render")]
    #[arg(long)]
    headless: bool,
}

/// Logs the telemetry read-out once per simulated second.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn report_telemetry(time: Res<Time>, telemetry: Res<Telemetry>, mut since: Local<f64>) {
    *since += time.delta_secs_f64();
    if *since >= 1.0 {
        *since -= 1.0;
        info!("t={:.0}s {}", time.elapsed_secs_f64(), *telemetry);
    }
}

fn run_headless(config: SimConfig, args: &Args) {
    let frame = Duration::from_secs(1) / FRAME_RATE;
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(frame))
        .insert_resource(HelmInput {
            rudder: RudderCommand::from_deflection(f64::from(args.rudder)),
            ..HelmInput::default()
        })
        .add_plugins(SailingPlugin::new(config))
        .add_systems(Update, report_telemetry.after(SailingSet));

    // The first update only primes the clock.
    for _ in 0..=args.seconds * FRAME_RATE {
        app.update();
    }
    info!(
        "finished after {} simulated seconds: {}",
        args.seconds,
        *app.world().resource::<Telemetry>()
    );
}

#[cfg(feature = "render")]
fn run_windowed(config: SimConfig) {
    use bevy::log::LogPlugin;

    App::new()
        .add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .add_plugins(SailingPlugin::new(config))
        .add_systems(Update, report_telemetry.after(SailingSet))
        .run();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let config = SimConfig::load(args.config.as_deref()).context("loading configuration")?;

    #[cfg(feature = "render")]
    if !args.headless {
        run_windowed(config);
        return Ok(());
    }

    run_headless(config, &args);
    Ok(())
}
