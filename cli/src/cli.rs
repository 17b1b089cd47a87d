//! Command line surface.

use clap::{Parser, Subcommand};

/// API base used when neither `--api-base` nor the environment sets one.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(name = "ad-cli", version, about = "Appointment desk admin CLI")]
pub struct Cli {
    /// Backend API base URL.
    #[arg(long, global = true, env = "APPOINTMENT_DESK_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
    /// Admin session token issued at login.
    #[arg(long, global = true, env = "APPOINTMENT_DESK_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every registered user as JSON.
    Users,
    /// Print every appointment as JSON.
    Appointments,
    /// Print appointments booked with one phone number as JSON.
    ByPhone {
        /// Phone number to search for.
        #[arg(long)]
        phone: String,
    },
    /// Print appointments in one month as JSON.
    ByMonth {
        /// Month, 1-12.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
        /// Four-digit year.
        #[arg(long)]
        year: i32,
    },
    /// Render the admin actions screen once as text.
    View(ViewArgs),
}

/// Interactions applied before the screen is rendered.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ViewArgs {
    /// Run the phone search for this number.
    #[arg(long, conflicts_with_all = ["month", "year"])]
    pub phone: Option<String>,
    /// Run the month/year search for this month (clamped to 1-12).
    #[arg(long)]
    pub month: Option<i64>,
    /// Run the month/year search for this year (never before the current
    /// year).
    #[arg(long)]
    pub year: Option<i64>,
    /// Expand the users list.
    #[arg(long)]
    pub expand_users: bool,
    /// Expand the all-appointments list.
    #[arg(long)]
    pub expand_appointments: bool,
    /// Page shown in the users list.
    #[arg(long, default_value_t = 1)]
    pub users_page: usize,
    /// Page shown in the all-appointments list.
    #[arg(long, default_value_t = 1)]
    pub appointments_page: usize,
}
