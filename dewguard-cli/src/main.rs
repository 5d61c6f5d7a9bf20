//! `dewguard`: one heater cycle per invocation
//!
//! Meant to be run from cron or a systemd timer every few minutes:
//!
//! ```text
//! */5 * * * * dewguard /etc/dewguard.toml
//! ```
//!
//! Exit status: 0 on success, 1 if the cycle failed, 2 for usage or
//! configuration errors.

mod config;

use std::process::ExitCode;

use anyhow::Context;
use argh::FromArgs;
use dewguard_connectors::{OpenWeatherClient, SysfsGpio};
use dewguard_core::{run_cycle, ActuateSink, DecisionSink, MarginConfig, ReportSink};

use crate::config::HeaterConfig;

const EXIT_CYCLE_FAILED: u8 = 1;
const EXIT_CONFIG: u8 = 2;

#[derive(FromArgs)]
/// Switch an all-sky camera dew heater from current weather conditions
struct Args {
    /// path to the TOML configuration file
    #[argh(positional)]
    config: String,

    /// print the computed values instead of driving the heater pin
    #[argh(switch, short = 'n')]
    dry_run: bool,
}

fn main() -> ExitCode {
    // Initialize logging
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::init_from_env(env);

    let args = match parse_args() {
        Ok(args) => args,
        Err(code) => return code,
    };

    let config = match HeaterConfig::load(&args.config) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let mut client = match build_client(&config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("{:#}", e);
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    log::debug!(
        "Site ({:.4}, {:.4}), pin {}, margin {:.2}°C",
        config.latitude,
        config.longitude,
        config.pin,
        config.temperature_margin_c
    );

    let result = if args.dry_run {
        cycle(&mut client, ReportSink::stdout(), config.margin())
    } else {
        let mut pin = SysfsGpio::with_root(config.pin, config.gpio.sysfs_root.clone());
        if let Some(base) = config.gpio.chip_base {
            pin = pin.with_chip_base(base);
        }
        cycle(&mut client, ActuateSink::new(pin), config.margin())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(EXIT_CYCLE_FAILED)
        }
    }
}

/// Parse arguments, mapping usage errors to the configuration exit status
fn parse_args() -> Result<Args, ExitCode> {
    let strings: Vec<String> = std::env::args().collect();
    let command = strings
        .first()
        .and_then(|s| std::path::Path::new(s).file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("dewguard");
    let rest: Vec<&str> = strings.iter().skip(1).map(String::as_str).collect();

    Args::from_args(&[command], &rest).map_err(|early_exit| {
        if early_exit.status.is_ok() {
            println!("{}", early_exit.output);
            ExitCode::SUCCESS
        } else {
            eprintln!("{}\nRun {} --help for more information.", early_exit.output, command);
            ExitCode::from(EXIT_CONFIG)
        }
    })
}

fn build_client(config: &HeaterConfig) -> anyhow::Result<OpenWeatherClient> {
    let weather = config
        .weather_config()
        .context("Location out of range")?;
    OpenWeatherClient::new(weather).context("Failed to create weather client")
}

/// Run one cycle into `sink`, logging the failure category
fn cycle<K>(client: &mut OpenWeatherClient, mut sink: K, margin: MarginConfig) -> anyhow::Result<()>
where
    K: DecisionSink,
    K::Error: std::error::Error + Send + Sync + 'static,
{
    match run_cycle(client, &mut sink, margin) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::warn!("Cycle aborted ({} error)", e.kind());
            Err(e.into())
        }
    }
}
