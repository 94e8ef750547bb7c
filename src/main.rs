// SPDX-License-Identifier: MPL-2.0
use chantier::app::{self, paths, Flags};
use chantier::config;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
chantier - construction-site operations desk

USAGE:
  chantier [OPTIONS]

OPTIONS:
  --sites <FILE>        Site list to open (default: <data dir>/sites.toml)
  --data-dir <DIR>      Data directory (overrides CHANTIER_DATA_DIR)
  --config-dir <DIR>    Config directory (overrides CHANTIER_CONFIG_DIR)
  -h, --help            Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        sites_path: args.opt_value_from_str("--sites")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {rest:?}");
    }

    Ok(flags)
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    let (config, _) = config::load();
    init_logging(&config.logging.level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting chantier");

    app::run(flags)
}
