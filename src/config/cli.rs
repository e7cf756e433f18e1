use clap::Parser;

/// Command line options. Only logging is affected; none are needed for the
/// interactive session.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "isbn-check")]
#[command(about = "Compute or validate ISBN-10 and ISBN-13 check digits")]
pub struct CliConfig {
    /// Optional TOML session file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
