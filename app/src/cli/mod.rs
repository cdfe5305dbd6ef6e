pub mod decode;
pub mod lookup;
pub mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "ech-inspect")]
#[command(about = "Decode and inspect ECH config lists", long_about = None)]
#[command(version)]
pub struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a base64 ECHConfigList (argument, --file, or stdin)
    Decode(decode::DecodeArgs),
    /// Fetch a domain's HTTPS record over DoH and decode its ech parameter
    Lookup(lookup::LookupArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Human,
    Json,
}
