//! Typed view model of the admin actions screen and its transitions.
//!
//! Every button, input and panel toggle on the screen becomes an
//! [`AdminEvent`]. [`AdminViewState::apply`] is the only place the state
//! changes, so a render pass always sees a consistent snapshot.

use serde::{Deserialize, Serialize};

/// Largest year accepted by the month/year search.
pub const MAX_YEAR: i32 = 9999;

/// Which appointment search, if any, has its results pinned on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    /// No search results shown.
    #[default]
    Idle,
    /// Results of the phone search are shown.
    ShowingPhoneResults,
    /// Results of the month/year search are shown.
    ShowingMonthYearResults,
}

/// The two appointment searches offered by the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    /// Search by phone number.
    Phone,
    /// Search by month and year.
    MonthYear,
}

impl SearchKind {
    /// Source tag handed to the appointment renderer.
    pub fn tag(self) -> &'static str {
        match self {
            SearchKind::Phone => "phone",
            SearchKind::MonthYear => "month_year",
        }
    }

    /// Key of the visibility flag an appointment card clears when dismissed.
    pub fn dismiss_key(self) -> &'static str {
        match self {
            SearchKind::Phone => "show_apps_phone",
            SearchKind::MonthYear => "show_apps_m_y",
        }
    }

    /// Resolve a dismiss key back to its search.
    pub fn from_dismiss_key(key: &str) -> Option<Self> {
        match key {
            "show_apps_phone" => Some(SearchKind::Phone),
            "show_apps_m_y" => Some(SearchKind::MonthYear),
            _ => None,
        }
    }

    fn showing_mode(self) -> SearchMode {
        match self {
            SearchKind::Phone => SearchMode::ShowingPhoneResults,
            SearchKind::MonthYear => SearchMode::ShowingMonthYearResults,
        }
    }
}

/// The two always-visible paged lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListPanel {
    /// All registered users.
    Users,
    /// All appointments.
    AllAppointments,
}

/// Screens the admin page can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// The operator's profile screen.
    Profile,
}

/// Operator interaction on the admin screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminEvent {
    /// "Back to Profile" button.
    BackToProfile,
    /// Expander header clicked; carries the new open state.
    SetExpanded(ListPanel, bool),
    /// Page navigation inside a list.
    ChangePage(ListPanel, usize),
    /// Phone input committed.
    PhoneInput(String),
    /// "Reset" under the phone search.
    ResetPhoneSearch,
    /// "Get Appointments" under the phone search.
    SubmitPhoneSearch,
    /// Month input committed; clamped to 1-12.
    MonthInput(i64),
    /// Year input committed; clamped to the allowed range.
    YearInput(i64),
    /// "Reset" under the month/year search.
    ResetMonthYearSearch,
    /// "Get Appointments" under the month/year search.
    SubmitMonthYearSearch,
    /// Appointment card dismissed the result list it belongs to.
    DismissResults(SearchKind),
}

/// Per-operator UI state of the admin screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminViewState {
    /// Users expander open.
    pub expander_users_open: bool,
    /// All-appointments expander open.
    pub expander_all_app_open: bool,
    /// 1-based page shown in the users list.
    pub current_users_page: usize,
    /// 1-based page shown in the all-appointments list.
    pub current_all_app_page: usize,
    /// Pinned search results.
    pub search: SearchMode,
    /// Phone search input.
    pub phone_num: String,
    /// Month search input, 1-12.
    pub month: u32,
    /// Year search input, never below `min_year`.
    pub year: i32,
    /// Calendar year when the state was created; floor of the year input.
    pub min_year: i32,
}

impl Default for AdminViewState {
    fn default() -> Self {
        Self::new(1970)
    }
}

impl AdminViewState {
    /// Fresh state with every field at its default.
    pub fn new(current_year: i32) -> Self {
        let current_year = current_year.min(MAX_YEAR);
        Self {
            expander_users_open: false,
            expander_all_app_open: false,
            current_users_page: 1,
            current_all_app_page: 1,
            search: SearchMode::Idle,
            phone_num: String::new(),
            month: 1,
            year: current_year,
            min_year: current_year,
        }
    }

    /// Restore a previously stored state, falling back to defaults for
    /// anything missing or out of range.
    pub fn restore_or_new(stored: Option<&str>, current_year: i32) -> Self {
        let Some(raw) = stored.filter(|raw| !raw.trim().is_empty()) else {
            return Self::new(current_year);
        };
        match serde_json::from_str::<AdminViewState>(raw) {
            Ok(mut state) => {
                state.min_year = current_year.min(MAX_YEAR);
                state.normalize();
                state
            },
            Err(err) => {
                tracing::warn!("discarding stored admin view state: {err}");
                Self::new(current_year)
            },
        }
    }

    /// Whether phone search results are pinned.
    pub fn show_apps_phone(&self) -> bool {
        self.search == SearchMode::ShowingPhoneResults
    }

    /// Whether month/year search results are pinned.
    pub fn show_apps_m_y(&self) -> bool {
        self.search == SearchMode::ShowingMonthYearResults
    }

    /// Whether the given list panel is expanded.
    pub fn is_expanded(&self, panel: ListPanel) -> bool {
        match panel {
            ListPanel::Users => self.expander_users_open,
            ListPanel::AllAppointments => self.expander_all_app_open,
        }
    }

    /// Current page of the given list panel.
    pub fn page_of(&self, panel: ListPanel) -> usize {
        match panel {
            ListPanel::Users => self.current_users_page,
            ListPanel::AllAppointments => self.current_all_app_page,
        }
    }

    /// Apply one interaction. Returns where to navigate, if anywhere.
    pub fn apply(&mut self, event: AdminEvent) -> Option<NavTarget> {
        tracing::debug!(?event, "admin view event");
        match event {
            AdminEvent::BackToProfile => {
                self.current_users_page = 1;
                self.expander_users_open = false;
                self.current_all_app_page = 1;
                self.expander_all_app_open = false;
                self.search = SearchMode::Idle;
                return Some(NavTarget::Profile);
            },
            AdminEvent::SetExpanded(panel, open) => match panel {
                ListPanel::Users => self.expander_users_open = open,
                ListPanel::AllAppointments => self.expander_all_app_open = open,
            },
            AdminEvent::ChangePage(panel, page) => {
                let page = page.max(1);
                match panel {
                    ListPanel::Users => self.current_users_page = page,
                    ListPanel::AllAppointments => self.current_all_app_page = page,
                }
            },
            AdminEvent::PhoneInput(phone) => self.phone_num = phone.trim().to_string(),
            AdminEvent::ResetPhoneSearch => {
                self.phone_num.clear();
                self.hide(SearchKind::Phone);
                self.collapse_lists();
            },
            AdminEvent::SubmitPhoneSearch => self.search = SearchKind::Phone.showing_mode(),
            AdminEvent::MonthInput(month) => self.month = clamp_month(month),
            AdminEvent::YearInput(year) => self.year = self.clamp_year(year),
            AdminEvent::ResetMonthYearSearch => {
                self.month = 1;
                self.year = self.min_year;
                self.hide(SearchKind::MonthYear);
                self.collapse_lists();
            },
            AdminEvent::SubmitMonthYearSearch => {
                self.search = SearchKind::MonthYear.showing_mode()
            },
            AdminEvent::DismissResults(kind) => self.hide(kind),
        }
        None
    }

    /// Keep pages within the list sizes seen by the last render pass.
    pub fn clamp_pages(&mut self, users_pages: usize, all_app_pages: usize) {
        self.current_users_page = crate::pagination::clamp_page(self.current_users_page, users_pages);
        self.current_all_app_page =
            crate::pagination::clamp_page(self.current_all_app_page, all_app_pages);
    }

    fn hide(&mut self, kind: SearchKind) {
        if self.search == kind.showing_mode() {
            self.search = SearchMode::Idle;
        }
    }

    // Both search resets close the list panels as well.
    fn collapse_lists(&mut self) {
        self.expander_users_open = false;
        self.expander_all_app_open = false;
    }

    fn clamp_year(&self, year: i64) -> i32 {
        let clamped = year.clamp(i64::from(self.min_year), i64::from(MAX_YEAR));
        i32::try_from(clamped).unwrap_or(self.min_year)
    }

    fn normalize(&mut self) {
        self.phone_num = self.phone_num.trim().to_string();
        self.month = clamp_month(i64::from(self.month));
        self.year = self.clamp_year(i64::from(self.year));
        self.current_users_page = self.current_users_page.max(1);
        self.current_all_app_page = self.current_all_app_page.max(1);
    }
}

fn clamp_month(month: i64) -> u32 {
    // 1..=12 always fits
    month.clamp(1, 12) as u32
}

#[cfg(test)]
mod tests {
    use super::{AdminEvent, AdminViewState, ListPanel, NavTarget, SearchKind, SearchMode};

    fn expanded_state() -> AdminViewState {
        let mut state = AdminViewState::new(2026);
        state.apply(AdminEvent::SetExpanded(ListPanel::Users, true));
        state.apply(AdminEvent::SetExpanded(ListPanel::AllAppointments, true));
        state
    }

    #[test]
    fn new_state_has_documented_defaults() {
        let state = AdminViewState::new(2026);
        assert!(!state.expander_users_open);
        assert!(!state.expander_all_app_open);
        assert_eq!(state.current_users_page, 1);
        assert_eq!(state.current_all_app_page, 1);
        assert!(!state.show_apps_phone());
        assert!(!state.show_apps_m_y());
        assert_eq!(state.phone_num, "");
        assert_eq!(state.month, 1);
        assert_eq!(state.year, 2026);
    }

    #[test]
    fn phone_reset_clears_input_results_and_expanders() {
        let mut state = expanded_state();
        state.apply(AdminEvent::PhoneInput("555-0100".to_string()));
        state.apply(AdminEvent::SubmitPhoneSearch);
        assert!(state.show_apps_phone());

        state.apply(AdminEvent::ResetPhoneSearch);
        assert_eq!(state.phone_num, "");
        assert!(!state.show_apps_phone());
        assert!(!state.expander_users_open);
        assert!(!state.expander_all_app_open);
    }

    #[test]
    fn phone_reset_keeps_month_year_results() {
        let mut state = AdminViewState::new(2026);
        state.apply(AdminEvent::SubmitMonthYearSearch);
        state.apply(AdminEvent::ResetPhoneSearch);
        assert!(state.show_apps_m_y());
    }

    #[test]
    fn month_year_reset_keeps_phone_results() {
        let mut state = AdminViewState::new(2026);
        state.apply(AdminEvent::PhoneInput("555-0100".to_string()));
        state.apply(AdminEvent::SubmitPhoneSearch);
        state.apply(AdminEvent::ResetMonthYearSearch);
        assert!(state.show_apps_phone());
        assert_eq!(state.phone_num, "555-0100");
    }

    #[test]
    fn phone_input_is_stored_trimmed() {
        let mut state = AdminViewState::new(2026);
        state.apply(AdminEvent::PhoneInput("  555-0100 ".to_string()));
        assert_eq!(state.phone_num, "555-0100");
    }

    #[test]
    fn month_year_reset_restores_defaults() {
        let mut state = expanded_state();
        state.apply(AdminEvent::MonthInput(7));
        state.apply(AdminEvent::YearInput(2030));
        state.apply(AdminEvent::SubmitMonthYearSearch);

        state.apply(AdminEvent::ResetMonthYearSearch);
        assert_eq!(state.month, 1);
        assert_eq!(state.year, 2026);
        assert!(!state.show_apps_m_y());
        assert!(!state.expander_users_open);
        assert!(!state.expander_all_app_open);
    }

    #[test]
    fn month_year_search_always_replaces_phone_results() {
        for prior in [SearchMode::Idle, SearchMode::ShowingPhoneResults, SearchMode::ShowingMonthYearResults] {
            let mut state = AdminViewState::new(2026);
            state.search = prior;
            state.apply(AdminEvent::SubmitMonthYearSearch);
            assert!(state.show_apps_m_y());
            assert!(!state.show_apps_phone());
        }

        let mut state = AdminViewState::new(2026);
        state.apply(AdminEvent::SubmitMonthYearSearch);
        state.apply(AdminEvent::SubmitPhoneSearch);
        assert!(state.show_apps_phone());
        assert!(!state.show_apps_m_y());
    }

    #[test]
    fn inputs_are_clamped() {
        let mut state = AdminViewState::new(2026);
        state.apply(AdminEvent::MonthInput(0));
        assert_eq!(state.month, 1);
        state.apply(AdminEvent::MonthInput(13));
        assert_eq!(state.month, 12);
        state.apply(AdminEvent::YearInput(2001));
        assert_eq!(state.year, 2026);
        state.apply(AdminEvent::YearInput(123_456));
        assert_eq!(state.year, 9999);
    }

    #[test]
    fn back_to_profile_resets_lists_and_searches() {
        let mut state = expanded_state();
        state.apply(AdminEvent::ChangePage(ListPanel::Users, 3));
        state.apply(AdminEvent::ChangePage(ListPanel::AllAppointments, 2));
        state.apply(AdminEvent::PhoneInput("555-0100".to_string()));
        state.apply(AdminEvent::SubmitPhoneSearch);

        assert_eq!(state.apply(AdminEvent::BackToProfile), Some(NavTarget::Profile));
        assert_eq!(state.current_users_page, 1);
        assert_eq!(state.current_all_app_page, 1);
        assert!(!state.expander_users_open);
        assert!(!state.expander_all_app_open);
        assert_eq!(state.search, SearchMode::Idle);
        assert_eq!(state.phone_num, "555-0100");
    }

    #[test]
    fn dismiss_only_hides_matching_results() {
        let mut state = AdminViewState::new(2026);
        state.apply(AdminEvent::SubmitPhoneSearch);
        state.apply(AdminEvent::DismissResults(SearchKind::MonthYear));
        assert!(state.show_apps_phone());
        state.apply(AdminEvent::DismissResults(SearchKind::Phone));
        assert_eq!(state.search, SearchMode::Idle);
        assert_eq!(SearchKind::from_dismiss_key("show_apps_m_y"), Some(SearchKind::MonthYear));
        assert_eq!(SearchKind::from_dismiss_key("page"), None);
    }

    #[test]
    fn restore_is_idempotent_and_tolerates_garbage() {
        let mut state = AdminViewState::new(2026);
        state.apply(AdminEvent::PhoneInput("555-0100".to_string()));
        state.apply(AdminEvent::SubmitPhoneSearch);
        let stored = serde_json::to_string(&state).expect("encode state");

        let restored = AdminViewState::restore_or_new(Some(&stored), 2026);
        assert_eq!(restored, state);
        assert_eq!(AdminViewState::restore_or_new(Some("{not json"), 2026), AdminViewState::new(2026));
        assert_eq!(AdminViewState::restore_or_new(None, 2026), AdminViewState::new(2026));
    }

    #[test]
    fn restore_fills_missing_fields_and_lifts_stale_year() {
        let restored = AdminViewState::restore_or_new(Some(r#"{"phone_num":"555","year":2020}"#), 2026);
        assert_eq!(restored.phone_num, "555");
        assert_eq!(restored.year, 2026);
        assert_eq!(restored.month, 1);
        assert_eq!(restored.current_users_page, 1);
    }
}
