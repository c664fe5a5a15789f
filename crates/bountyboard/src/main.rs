//! bountyboard CLI - catalog bug bounty programs and their testable assets

mod cli;
mod colors;
mod commands;
mod interaction;
mod output;

use std::process::ExitCode;

use cli::Commands;
use commands::create::CreateArgs;

fn main() -> ExitCode {
    let cli = cli::parse();

    let result = match cli.command {
        Some(Commands::Board) => commands::run_board(cli.quiet, cli.config),
        Some(Commands::List { eligibility }) => {
            commands::run_list(eligibility, cli.json, cli.quiet, cli.verbose, cli.config)
        }
        Some(Commands::Create {
            name,
            start_date,
            website,
            twitter,
            assets,
        }) => commands::run_create(
            CreateArgs {
                name,
                start_date,
                website,
                twitter,
                assets,
            },
            cli.json,
            cli.quiet,
            cli.config,
        ),
        None => {
            // No subcommand - print version info
            if !cli.quiet {
                println!("bountyboard v{}", env!("CARGO_PKG_VERSION"));
                println!("Use --help for usage information");
            }
            Ok(0)
        }
    };

    match result {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        crate::cli::Cli::command().debug_assert();
    }
}
