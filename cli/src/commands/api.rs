//! Raw list endpoints printed as JSON.

use anyhow::{bail, Context, Result};
use appointment_desk_shared::{AdminApi, Session, LOGIN_WARNING};
use serde::Serialize;

use crate::cli::Commands;

/// Run one of the JSON list commands.
pub async fn run<A>(api: &A, session: &Session, command: Commands) -> Result<()>
where
    A: AdminApi + ?Sized,
{
    let Some(token) = session.active_token() else {
        bail!("{LOGIN_WARNING} (pass --token or set APPOINTMENT_DESK_TOKEN)");
    };

    match command {
        Commands::Users => {
            let users = api.get_all_users(token).await.context("failed to list users")?;
            print_json(&users)
        },
        Commands::Appointments => {
            let appointments = api
                .get_all_appointments(token)
                .await
                .context("failed to list appointments")?;
            print_json(&appointments)
        },
        Commands::ByPhone {
            phone,
        } => {
            let phone = phone.trim();
            if phone.is_empty() {
                bail!("phone number must not be blank");
            }
            let appointments = api
                .get_appointments_by_phone(token, phone)
                .await
                .with_context(|| format!("failed to search appointments for phone {phone}"))?;
            if appointments.is_empty() {
                tracing::warn!("no appointments for phone {phone}");
            }
            print_json(&appointments)
        },
        Commands::ByMonth {
            month,
            year,
        } => {
            let appointments = api
                .get_appointments_by_month_year(token, month, year)
                .await
                .with_context(|| format!("failed to search appointments for {month}/{year}"))?;
            if appointments.is_empty() {
                tracing::warn!("no appointments for {month}/{year}");
            }
            print_json(&appointments)
        },
        Commands::View(_) => bail!("`view` is not a JSON list command"),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
