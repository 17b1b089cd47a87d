//! One render pass of the admin actions screen, printed as text.

use anyhow::{Context, Result};
use appointment_desk_shared::{
    render_pass, AdminApi, AdminEvent, AdminViewState, ListPanel, PageOutcome, Session,
};
use chrono::Datelike;

use crate::{cli::ViewArgs, render::render_screen};

/// Replay the interactions described by `args` on a fresh state.
pub fn state_from_args(args: &ViewArgs, current_year: i32) -> AdminViewState {
    let mut state = AdminViewState::new(current_year);

    state.apply(AdminEvent::SetExpanded(ListPanel::Users, args.expand_users));
    state.apply(AdminEvent::SetExpanded(ListPanel::AllAppointments, args.expand_appointments));
    state.apply(AdminEvent::ChangePage(ListPanel::Users, args.users_page));
    state.apply(AdminEvent::ChangePage(ListPanel::AllAppointments, args.appointments_page));

    if let Some(phone) = args.phone.clone() {
        state.apply(AdminEvent::PhoneInput(phone));
        state.apply(AdminEvent::SubmitPhoneSearch);
    }
    if args.month.is_some() || args.year.is_some() {
        if let Some(month) = args.month {
            state.apply(AdminEvent::MonthInput(month));
        }
        if let Some(year) = args.year {
            state.apply(AdminEvent::YearInput(year));
        }
        state.apply(AdminEvent::SubmitMonthYearSearch);
    }

    state
}

/// Render the screen once and print it.
pub async fn run<A>(api: &A, session: &Session, args: ViewArgs) -> Result<()>
where
    A: AdminApi + ?Sized,
{
    let mut state = state_from_args(&args, chrono::Local::now().year());

    let outcome = render_pass(api, session, &state)
        .await
        .context("failed to load the admin screen")?;
    if let PageOutcome::Ready(snapshot) = &outcome {
        let (users_pages, appointments_pages) = snapshot.page_counts();
        state.clamp_pages(users_pages, appointments_pages);
    }

    println!("{}", render_screen(&state, &outcome));
    Ok(())
}
