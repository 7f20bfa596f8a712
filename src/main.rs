// SPDX-License-Identifier: MPL-2.0
use smart_scan::app::{self, paths, Flags};
use smart_scan::error::Error;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
SmartScan prototype

USAGE:
  smart_scan [OPTIONS]

OPTIONS:
  --lang <tag>          UI language (e.g. en-US, fr)
  --version-b           Start on prototype version B
  --config-dir <path>   Directory holding settings.toml
  --time-scale <f32>    Animation playback speed (0.1 to 4.0)
  -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        version_b: args.contains("--version-b"),
        config_dir: args.opt_value_from_str("--config-dir")?,
        time_scale: args.opt_value_from_str("--time-scale")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(Error::Cli(format!("unexpected arguments: {remaining:?}")));
    }
    Ok(Some(flags))
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            tracing::error!(error = %err, "invalid command line");
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting SmartScan prototype");

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
