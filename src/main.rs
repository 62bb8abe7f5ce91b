use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use bindep_filter::cli::{Cli, output};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Usage errors must exit 1; clap defaults to 2. Help/version stay at 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    if let Err(err) = cli.run() {
        output::error(&format!("{:#}", err));
        std::process::exit(1);
    }
}
