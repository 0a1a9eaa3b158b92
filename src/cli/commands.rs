// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate {
        /// Password length
        #[arg(long, short)]
        length: Option<usize>,

        /// Leave out uppercase letters (A-Z)
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out lowercase letters (a-z)
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out numbers (0-9)
        #[arg(long)]
        no_numbers: bool,

        /// Leave out special characters (!@#$)
        #[arg(long)]
        no_symbols: bool,
    },

    /// Rate the strength of a password
    Classify {
        /// Password to rate
        #[arg(required = true)]
        password: String,
    },
}
