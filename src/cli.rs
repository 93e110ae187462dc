use clap::{Parser, Subcommand};

/// HealthPlanner — terminal client for the health/nutrition calculator service.
#[derive(Parser, Debug)]
#[command(name = "health_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the calculator backend.
    #[arg(short, long, default_value = "http://localhost:5000")]
    pub server: String,

    /// Path to the local data JSON file.
    #[arg(short, long, default_value = "health_data.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill in the health form, calculate requirements, and review results.
    Plan,

    /// Show a saved plan.
    Show {
        /// Date of the plan (YYYY-MM-DD), defaulting to today.
        date: Option<String>,
    },

    /// Clear locally stored data.
    Reset {
        /// Remove the saved form snapshot.
        #[arg(long)]
        form: bool,

        /// Remove all saved plans.
        #[arg(long)]
        plans: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}
