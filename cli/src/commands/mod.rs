//! Subcommand implementations.

pub mod api;
pub mod view;

use anyhow::Result;
use appointment_desk_shared::Session;

use crate::{
    cli::{Cli, Commands},
    client::HttpAdminApi,
};

/// Session built from the `--token` flag.
pub fn session_from_token(token: Option<String>) -> Session {
    Session {
        logged_in: token.is_some(),
        token,
    }
}

/// Dispatch the parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let client = HttpAdminApi::new(cli.api_base.clone());
    let session = session_from_token(cli.token);
    tracing::debug!(api_base = %cli.api_base, "using admin API");

    match cli.command {
        Commands::View(args) => view::run(&client, &session, args).await,
        command => api::run(&client, &session, command).await,
    }
}
