//! CLI command definitions and subcommands

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use bila_dkhane::domain::settings::Language;

/// Bila Dkhane - smoke-free streak tracker
#[derive(Parser)]
#[command(
    name = "bila-dkhane",
    about = "Track smoke-free days, earn levels and ask the coach for help",
    version
)]
pub struct Cli {
    /// Directory holding the progress snapshot (overrides BILA_DKHANE__STORAGE__DATA_DIR)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Show the dashboard overview
    Status {
        /// Print the overview as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record today as smoke-free
    CheckIn,

    /// Log how you feel (1 = worst, 5 = best)
    Mood {
        #[arg(value_name = "VALUE")]
        value: u8,
    },

    /// Get advice for a craving and log it
    Craving {
        /// What triggered it (Stress, Pressure, Habit, Fatigue, ...)
        trigger: String,

        /// Intensity from 1 to 5
        #[arg(short, long, default_value = "5")]
        intensity: u8,
    },

    /// Complete the current mission
    Mission,

    /// Update name and quitting parameters
    Profile {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        cigarettes_per_day: Option<f64>,
        #[arg(long)]
        pack_price: Option<f64>,
        #[arg(long)]
        wish_name: Option<String>,
        #[arg(long)]
        wish_price: Option<f64>,
        #[arg(long)]
        language: Option<Language>,
        #[arg(long)]
        target_days: Option<u32>,
    },

    /// Print an affirmation for today
    Wisdom,

    /// Ask the coach a question
    Coach {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Generate and cache an image of your reward
    WishImage,

    /// Generate a before/after anatomy rendering
    Anatomy {
        #[arg(value_enum, default_value = "recovered")]
        variant: AnatomyArg,
    },

    /// Erase all progress
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AnatomyArg {
    Smoker,
    Recovered,
}
