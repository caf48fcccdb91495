use clap::error::ErrorKind;
use clap::Parser;

use bugz::cli::{execute_command, output, Cli, PreviewHandler};
use bugz::config::Settings;
use bugz::exitcode;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

fn main() {
    // help and --version exit 0; every other parse failure is a usage error
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exitcode::OK,
                _ => exitcode::USAGE,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    setup_logging();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            output::error(&e);
            std::process::exit(exitcode::CONFIG);
        }
    };

    let mut handler = PreviewHandler::new();
    if let Err(e) = execute_command(cli, &settings, &mut handler) {
        output::error(&e);
        std::process::exit(e.exit_code());
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_env("BUGZ_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(filter),
        )
        .init();
}
