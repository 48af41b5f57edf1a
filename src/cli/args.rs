use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "biodash", version, about = "A terminal dashboard for calories, daily tasks and XP streaks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print today's calorie progress, tasks and XP
    Summary {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the XP required for every level
    Levels,
    /// Write a default config.toml
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}
