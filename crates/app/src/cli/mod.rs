use clap::{Parser, Subcommand};

mod audit;

#[derive(Debug, Parser)]
#[command(name = "tally-app", about = "Tally CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Audit(audit::AuditCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Audit(command) => audit::run(command).await,
        }
    }
}
