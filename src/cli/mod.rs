//! Command line interface for the registration API

pub mod serve;

use clap::{Parser, Subcommand};

/// Registration API - user account registration service
#[derive(Parser)]
#[command(name = "registration-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["registration-api", "serve", "--port", "9000"]).unwrap();

        let Command::Serve(args) = cli.command;
        assert_eq!(args.port, Some(9000));
        assert!(args.host.is_none());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["registration-api"]).is_err());
    }
}
