use crate::commands::{run_batch, run_compute, BatchArgs, ComputeArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use flames::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "flames",
    about = "Work out the FLAMES relationship between two names, or serve the form",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP form service (default command)
    Serve(ServeArgs),
    /// Compare two names and print the relationship
    Compute(ComputeArgs),
    /// Score every name pair in a CSV file
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Compute(args) => run_compute(args),
        Command::Batch(args) => run_batch(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["flames"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from(["flames", "serve", "--host", "0.0.0.0", "--port", "8080"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
                assert_eq!(args.port, Some(8080));
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn compute_takes_two_positional_names() {
        let cli = Cli::try_parse_from(["flames", "compute", "David", "Maria", "--explain"])
            .expect("parses");
        match cli.command {
            Some(Command::Compute(args)) => {
                assert_eq!(args.name1, "David");
                assert_eq!(args.name2, "Maria");
                assert!(args.explain);
                assert!(!args.json);
            }
            other => panic!("expected compute, got {other:?}"),
        }
    }

    #[test]
    fn compute_requires_both_names() {
        assert!(Cli::try_parse_from(["flames", "compute", "David"]).is_err());
    }
}
