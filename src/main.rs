use clap::Parser;

use slotsync::cli::{Cli, Commands, commands, output};

fn main() {
    let args = Cli::parse();

    let result = match &args.command {
        Commands::Push => commands::push::execute(
            args.prefs.as_deref(),
            args.config.as_deref(),
            args.verbose,
        ),
        Commands::Forget => commands::forget::execute(args.prefs.as_deref()),
    };

    if let Err(e) = result {
        output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
