//! Plain-text rendering of the admin actions screen.

use appointment_desk_shared::{
    pagination::{clamp_page, page_slice, total_pages, PAGE_SIZE},
    AdminActionsSnapshot, AdminViewState, Appointment, ListPanel, PageOutcome, SearchResults,
    User,
};

const DIVIDER: &str = "---";

/// One line describing `user`.
pub fn render_user(user: &User) -> String {
    let mut line = format!("#{} {}", user.id, user.username);
    if user.is_admin {
        line.push_str(" [admin]");
    }
    if let Some(email) = user.email.as_deref() {
        line.push_str(&format!(" | {email}"));
    }
    if let Some(phone) = user.phone_number.as_deref() {
        line.push_str(&format!(" | {phone}"));
    }
    line
}

/// One line describing `appointment`, tagged with the search that found it
/// when there is one.
pub fn render_appointment(appointment: &Appointment, source: Option<(&str, &str)>) -> String {
    let name = appointment
        .name
        .clone()
        .unwrap_or_else(|| "(no name)".to_string());
    let mut line = format!(
        "#{} {} | {} | {}",
        appointment.id, name, appointment.phone_number, appointment.date
    );
    if let Some(time) = appointment.time.as_deref() {
        line.push_str(&format!(" {time}"));
    }
    if let Some(service) = appointment.service.as_deref() {
        line.push_str(&format!(" | {service}"));
    }
    if let Some((tag, dismiss_key)) = source {
        line.push_str(&format!(" [{tag}] (dismiss: {dismiss_key})"));
    }
    line
}

fn expander<T>(
    out: &mut Vec<String>,
    label: &str,
    items: &[T],
    open: bool,
    page: usize,
    render: impl Fn(&T) -> String,
) {
    let marker = if open { "[-]" } else { "[+]" };
    out.push(format!("{marker} {label} ({} records)", items.len()));
    if !open {
        return;
    }
    let total = total_pages(items.len(), PAGE_SIZE);
    let page = clamp_page(page, total);
    out.extend(page_slice(items, page, PAGE_SIZE).iter().map(|item| format!("    {}", render(item))));
    out.push(format!("    Page {page} of {total}"));
}

fn search_section(out: &mut Vec<String>, results: &SearchResults) {
    match results {
        SearchResults::Hidden => {},
        SearchResults::NotFound(message) => out.push(format!("error: {message}")),
        SearchResults::Found {
            kind,
            appointments,
        } => {
            for appointment in appointments {
                out.push(render_appointment(appointment, Some((kind.tag(), kind.dismiss_key()))));
                out.push(DIVIDER.to_string());
            }
        },
    }
}

fn render_snapshot(state: &AdminViewState, snapshot: &AdminActionsSnapshot) -> Vec<String> {
    let mut out = vec!["Admin Actions".to_string(), "=============".to_string()];

    out.push("### All Users".to_string());
    expander(
        &mut out,
        "Show Users",
        &snapshot.users,
        state.is_expanded(ListPanel::Users),
        state.page_of(ListPanel::Users),
        render_user,
    );
    out.push(DIVIDER.to_string());

    out.push("### All Appointments".to_string());
    expander(
        &mut out,
        "Show All Appointments",
        &snapshot.appointments,
        state.is_expanded(ListPanel::AllAppointments),
        state.page_of(ListPanel::AllAppointments),
        |appointment| render_appointment(appointment, None),
    );
    out.push(DIVIDER.to_string());

    out.push("### Appointments by Phone".to_string());
    out.push(format!("phone: {}", state.phone_num));
    search_section(&mut out, &snapshot.phone_results);

    out.push("### Appointments by Month and Year".to_string());
    out.push(format!("month: {}  year: {}", state.month, state.year));
    search_section(&mut out, &snapshot.month_year_results);

    out
}

/// Text of the whole screen for one render pass.
pub fn render_screen(state: &AdminViewState, outcome: &PageOutcome) -> String {
    match outcome {
        PageOutcome::LoginRequired(warning) => format!("warning: {warning}"),
        PageOutcome::Ready(snapshot) => render_snapshot(state, snapshot).join("\n"),
    }
}
