use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

#[derive(Parser)]
#[command(name = "minipress", version, about = "Markdown blog builder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the whole site under the given root
    Build {
        /// Site root holding config/, templates/ and content/
        #[arg(default_value = ".")]
        root: PathBuf,
    },
    /// Convert Markdown on stdin to an HTML fragment on stdout
    Render,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build { root } => {
            if let Err(err) = minipress::site::build_site(&root) {
                error!(%err, "build failed");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Command::Render => {
            let mut input = String::new();
            if let Err(err) = io::stdin().read_to_string(&mut input) {
                error!(%err, "failed to read stdin");
                return ExitCode::FAILURE;
            }
            print!("{}", minipress::render(&input));
            ExitCode::SUCCESS
        }
    }
}
