//! CLI argument definitions for the Bazaar client.

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "bazaar",
    version,
    about = "Bazaar marketplace client - talk to a marketplace backend from the terminal",
    long_about = "Talk to a Bazaar marketplace backend from the terminal.\n\n\
                  Validates form input locally before sending it, manages the\n\
                  session returned by the server, and can follow the live\n\
                  notification and statistics channels."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Base URL of the backend.
    #[arg(
        long = "base-url",
        value_name = "URL",
        env = "BAZAAR_API_URL",
        default_value = "http://localhost:443",
        global = true
    )]
    pub base_url: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ask the server who it thinks this client is.
    Probe,

    /// Validate credentials locally, then log in.
    Login(LoginArgs),

    /// Validate the registration form locally, then register.
    Register(RegisterArgs),

    /// Follow the push-notification stream for a user.
    Watch(WatchArgs),

    /// Follow the live usage-statistics stream.
    StatsWatch(StatsWatchArgs),
}

#[derive(Parser)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub password: String,
}

#[derive(Parser)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,
}

#[derive(Parser)]
pub struct WatchArgs {
    /// Username whose notification stream to follow.
    #[arg(long)]
    pub username: String,
}

#[derive(Parser)]
pub struct StatsWatchArgs {
    /// Date range filter applied before printing (dd/mm/yyyy).
    #[arg(long = "from", value_name = "DATE")]
    pub from: Option<String>,

    #[arg(long = "to", value_name = "DATE")]
    pub to: Option<String>,
}
