//! One top-to-bottom evaluation of the admin actions screen.

use crate::{
    api::{AdminApi, ApiError},
    pagination::{total_pages, PAGE_SIZE},
    view_state::{AdminViewState, SearchKind},
    Appointment, Session, User,
};

/// Warning shown instead of the screen when no one is logged in.
pub const LOGIN_WARNING: &str = "Please log in to access this page";

/// What a search section shows below its form.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults {
    /// Search not active.
    Hidden,
    /// Search active but nothing matched; carries the inline message.
    NotFound(String),
    /// Matching appointments, rendered with the search's tag and dismiss key.
    Found {
        /// Search that produced the list.
        kind: SearchKind,
        /// Matches in backend order.
        appointments: Vec<Appointment>,
    },
}

impl SearchResults {
    fn from_matches(kind: SearchKind, appointments: Vec<Appointment>, criteria: String) -> Self {
        if appointments.is_empty() {
            SearchResults::NotFound(criteria)
        } else {
            SearchResults::Found {
                kind,
                appointments,
            }
        }
    }

    /// Number of appointment blocks this section renders.
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Found {
                appointments, ..
            } => appointments.len(),
            _ => 0,
        }
    }

    /// Whether the section renders no appointment blocks.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Data the screen renders after a successful pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminActionsSnapshot {
    /// Every registered user.
    pub users: Vec<User>,
    /// Every appointment.
    pub appointments: Vec<Appointment>,
    /// Phone search section.
    pub phone_results: SearchResults,
    /// Month/year search section.
    pub month_year_results: SearchResults,
}

impl AdminActionsSnapshot {
    /// Page counts of the users and all-appointments lists.
    pub fn page_counts(&self) -> (usize, usize) {
        (total_pages(self.users.len(), PAGE_SIZE), total_pages(self.appointments.len(), PAGE_SIZE))
    }

    /// Same lists with both search sections hidden. Kept on screen after a
    /// failed pass so old matches are never shown under new search inputs.
    pub fn without_searches(&self) -> Self {
        Self {
            users: self.users.clone(),
            appointments: self.appointments.clone(),
            phone_results: SearchResults::Hidden,
            month_year_results: SearchResults::Hidden,
        }
    }
}

/// Result of a render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// Guard rejected the pass; only the warning is rendered.
    LoginRequired(&'static str),
    /// Full screen data.
    Ready(AdminActionsSnapshot),
}

/// Inline message for a phone search without matches.
pub fn phone_not_found_message(phone: &str) -> String {
    format!("No appointments for phone {phone}")
}

/// Inline message for a month/year search without matches.
pub fn month_year_not_found_message(month: u32, year: i32) -> String {
    format!("No appointments for {month}/{year}")
}

/// Run one pass: guard, both lists, then whichever search is pinned.
///
/// Every list is fetched on every pass; nothing is cached between passes.
pub async fn render_pass<A>(
    api: &A,
    session: &Session,
    state: &AdminViewState,
) -> Result<PageOutcome, ApiError>
where
    A: AdminApi + ?Sized,
{
    let Some(token) = session.active_token() else {
        tracing::warn!("admin actions requested without an active session");
        return Ok(PageOutcome::LoginRequired(LOGIN_WARNING));
    };

    let users = api.get_all_users(token).await?;
    let appointments = api.get_all_appointments(token).await?;
    tracing::debug!(users = users.len(), appointments = appointments.len(), "admin lists loaded");

    let phone_results = if state.show_apps_phone() && state.phone_num.trim().is_empty() {
        SearchResults::NotFound(phone_not_found_message(state.phone_num.trim()))
    } else if state.show_apps_phone() {
        let matches = api.get_appointments_by_phone(token, &state.phone_num).await?;
        tracing::debug!(phone = %state.phone_num, matches = matches.len(), "phone search");
        SearchResults::from_matches(
            SearchKind::Phone,
            matches,
            phone_not_found_message(&state.phone_num),
        )
    } else {
        SearchResults::Hidden
    };

    let month_year_results = if state.show_apps_m_y() {
        let matches = api
            .get_appointments_by_month_year(token, state.month, state.year)
            .await?;
        tracing::debug!(
            month = state.month,
            year = state.year,
            matches = matches.len(),
            "month/year search"
        );
        SearchResults::from_matches(
            SearchKind::MonthYear,
            matches,
            month_year_not_found_message(state.month, state.year),
        )
    } else {
        SearchResults::Hidden
    };

    Ok(PageOutcome::Ready(AdminActionsSnapshot {
        users,
        appointments,
        phone_results,
        month_year_results,
    }))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;

    use super::{render_pass, PageOutcome, SearchResults, LOGIN_WARNING};
    use crate::{
        api::{AdminApi, ApiError},
        view_state::{AdminEvent, AdminViewState, SearchKind},
        Appointment, Session, User,
    };

    #[derive(Default)]
    struct InMemoryApi {
        users: Vec<User>,
        appointments: Vec<Appointment>,
        fail_users: bool,
        fail_phone: bool,
        calls: RefCell<Vec<String>>,
    }

    impl InMemoryApi {
        fn record(&self, call: impl Into<String>) {
            self.calls.borrow_mut().push(call.into());
        }
    }

    #[async_trait(?Send)]
    impl AdminApi for InMemoryApi {
        async fn get_all_users(&self, token: &str) -> Result<Vec<User>, ApiError> {
            self.record(format!("users:{token}"));
            if self.fail_users {
                return Err(ApiError::Status(500));
            }
            Ok(self.users.clone())
        }

        async fn get_all_appointments(&self, _token: &str) -> Result<Vec<Appointment>, ApiError> {
            self.record("appointments");
            Ok(self.appointments.clone())
        }

        async fn get_appointments_by_phone(
            &self,
            _token: &str,
            phone: &str,
        ) -> Result<Vec<Appointment>, ApiError> {
            self.record(format!("phone:{phone}"));
            if self.fail_phone {
                return Err(ApiError::Status(500));
            }
            Ok(self
                .appointments
                .iter()
                .filter(|item| item.phone_number == phone)
                .cloned()
                .collect())
        }

        async fn get_appointments_by_month_year(
            &self,
            _token: &str,
            month: u32,
            year: i32,
        ) -> Result<Vec<Appointment>, ApiError> {
            self.record(format!("month_year:{month}/{year}"));
            let prefix = format!("{year:04}-{month:02}-");
            Ok(self
                .appointments
                .iter()
                .filter(|item| item.date.starts_with(&prefix))
                .cloned()
                .collect())
        }
    }

    fn appointment(id: i64, phone: &str, date: &str) -> Appointment {
        Appointment {
            id,
            name: Some(format!("Customer {id}")),
            phone_number: phone.to_string(),
            date: date.to_string(),
            time: Some("10:00".to_string()),
            service: None,
            notes: None,
        }
    }

    fn sample_api() -> InMemoryApi {
        InMemoryApi {
            users: vec![User {
                id: 1,
                username: "admin".to_string(),
                email: None,
                phone_number: None,
                is_admin: true,
            }],
            appointments: vec![
                appointment(1, "555-0100", "2026-03-02"),
                appointment(2, "555-0100", "2026-04-11"),
                appointment(3, "555-0199", "2026-03-20"),
            ],
            ..InMemoryApi::default()
        }
    }

    fn ready(outcome: PageOutcome) -> super::AdminActionsSnapshot {
        match outcome {
            PageOutcome::Ready(snapshot) => snapshot,
            PageOutcome::LoginRequired(_) => panic!("expected a rendered screen"),
        }
    }

    #[tokio::test]
    async fn missing_session_renders_only_the_warning() {
        let api = sample_api();
        let outcome = render_pass(&api, &Session::default(), &AdminViewState::new(2026))
            .await
            .expect("render pass");
        assert_eq!(outcome, PageOutcome::LoginRequired(LOGIN_WARNING));
        assert!(api.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn idle_pass_fetches_both_lists_and_no_search() {
        let api = sample_api();
        let snapshot = ready(
            render_pass(&api, &Session::logged_in("tok"), &AdminViewState::new(2026))
                .await
                .expect("render pass"),
        );
        assert_eq!(snapshot.users.len(), 1);
        assert_eq!(snapshot.appointments.len(), 3);
        assert_eq!(snapshot.phone_results, SearchResults::Hidden);
        assert_eq!(snapshot.month_year_results, SearchResults::Hidden);
        assert_eq!(*api.calls.borrow(), vec!["users:tok".to_string(), "appointments".to_string()]);
    }

    #[tokio::test]
    async fn phone_search_without_matches_names_the_number() {
        let api = sample_api();
        let mut state = AdminViewState::new(2026);
        state.apply(AdminEvent::PhoneInput("555-0123".to_string()));
        state.apply(AdminEvent::SubmitPhoneSearch);

        let snapshot = ready(
            render_pass(&api, &Session::logged_in("tok"), &state)
                .await
                .expect("render pass"),
        );
        match snapshot.phone_results {
            SearchResults::NotFound(message) => assert!(message.contains("555-0123")),
            other => panic!("unexpected phone results: {other:?}"),
        }
    }

    #[tokio::test]
    async fn phone_search_renders_each_match_tagged_phone() {
        let api = sample_api();
        let mut state = AdminViewState::new(2026);
        state.apply(AdminEvent::PhoneInput("555-0100".to_string()));
        state.apply(AdminEvent::SubmitPhoneSearch);

        let snapshot = ready(
            render_pass(&api, &Session::logged_in("tok"), &state)
                .await
                .expect("render pass"),
        );
        assert_eq!(snapshot.phone_results.len(), 2);
        match &snapshot.phone_results {
            SearchResults::Found {
                kind, ..
            } => {
                assert_eq!(kind.tag(), "phone");
                assert_eq!(kind.dismiss_key(), "show_apps_phone");
            },
            other => panic!("unexpected phone results: {other:?}"),
        }
        assert_eq!(snapshot.month_year_results, SearchResults::Hidden);
    }

    #[tokio::test]
    async fn phone_results_survive_unrelated_interactions() {
        let api = sample_api();
        let mut state = AdminViewState::new(2026);
        state.apply(AdminEvent::PhoneInput("555-0100".to_string()));
        state.apply(AdminEvent::SubmitPhoneSearch);
        state.apply(AdminEvent::SetExpanded(crate::ListPanel::Users, true));
        state.apply(AdminEvent::MonthInput(5));

        let snapshot = ready(
            render_pass(&api, &Session::logged_in("tok"), &state)
                .await
                .expect("render pass"),
        );
        assert_eq!(snapshot.phone_results.len(), 2);
    }

    #[tokio::test]
    async fn month_year_search_uses_current_inputs() {
        let api = sample_api();
        let mut state = AdminViewState::new(2026);
        state.apply(AdminEvent::MonthInput(3));
        state.apply(AdminEvent::SubmitMonthYearSearch);

        let snapshot = ready(
            render_pass(&api, &Session::logged_in("tok"), &state)
                .await
                .expect("render pass"),
        );
        match &snapshot.month_year_results {
            SearchResults::Found {
                kind,
                appointments,
            } => {
                assert_eq!(*kind, SearchKind::MonthYear);
                assert_eq!(kind.tag(), "month_year");
                assert_eq!(appointments.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 3]);
            },
            other => panic!("unexpected month/year results: {other:?}"),
        }
        assert_eq!(snapshot.phone_results, SearchResults::Hidden);

        state.apply(AdminEvent::MonthInput(9));
        let snapshot = ready(
            render_pass(&api, &Session::logged_in("tok"), &state)
                .await
                .expect("render pass"),
        );
        assert_eq!(snapshot.month_year_results, SearchResults::NotFound("No appointments for 9/2026".to_string()));
    }

    #[tokio::test]
    async fn api_failures_propagate() {
        let api = InMemoryApi {
            fail_users: true,
            ..sample_api()
        };
        let err = render_pass(&api, &Session::logged_in("tok"), &AdminViewState::new(2026))
            .await
            .expect_err("users endpoint fails");
        assert_eq!(err, ApiError::Status(500));
    }

    #[tokio::test]
    async fn failed_search_leaves_no_search_data_behind() {
        let mut state = AdminViewState::new(2026);
        state.apply(AdminEvent::PhoneInput("555-0100".to_string()));
        state.apply(AdminEvent::SubmitPhoneSearch);
        let previous = ready(
            render_pass(&sample_api(), &Session::logged_in("tok"), &state)
                .await
                .expect("render pass"),
        );
        assert_eq!(previous.phone_results.len(), 2);

        let failing = InMemoryApi {
            fail_phone: true,
            ..sample_api()
        };
        state.apply(AdminEvent::PhoneInput("555-0199".to_string()));
        state.apply(AdminEvent::SubmitPhoneSearch);
        let err = render_pass(&failing, &Session::logged_in("tok"), &state)
            .await
            .expect_err("phone endpoint fails");
        assert_eq!(err, ApiError::Status(500));

        let kept = previous.without_searches();
        assert_eq!(kept.phone_results, SearchResults::Hidden);
        assert_eq!(kept.month_year_results, SearchResults::Hidden);
        assert_eq!(kept.users, previous.users);
        assert_eq!(kept.appointments, previous.appointments);
    }

    #[tokio::test]
    async fn padded_phone_queries_and_reports_the_same_number() {
        let api = sample_api();
        let mut state = AdminViewState::new(2026);
        state.apply(AdminEvent::PhoneInput(" 555-0123 ".to_string()));
        state.apply(AdminEvent::SubmitPhoneSearch);

        let snapshot = ready(
            render_pass(&api, &Session::logged_in("tok"), &state)
                .await
                .expect("render pass"),
        );
        assert_eq!(
            snapshot.phone_results,
            SearchResults::NotFound("No appointments for phone 555-0123".to_string())
        );
        assert!(api.calls.borrow().contains(&"phone:555-0123".to_string()));
    }

    #[tokio::test]
    async fn blank_phone_reports_no_matches_without_a_request() {
        let api = sample_api();
        let mut state = AdminViewState::new(2026);
        state.apply(AdminEvent::PhoneInput("   ".to_string()));
        state.apply(AdminEvent::SubmitPhoneSearch);

        let snapshot = ready(
            render_pass(&api, &Session::logged_in("tok"), &state)
                .await
                .expect("render pass"),
        );
        assert!(matches!(snapshot.phone_results, SearchResults::NotFound(_)));
        assert!(!api.calls.borrow().iter().any(|call| call.starts_with("phone:")));
    }
}
