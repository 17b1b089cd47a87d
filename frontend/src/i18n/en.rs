pub mod common {
    pub const LOADING: &str = "Loading...";
    pub const BRAND_NAME: &str = "Appointment Desk";
}

pub mod pagination {
    pub const ARIA_NAV: &str = "Pagination";
    pub const ARIA_PREV: &str = "Previous page";
    pub const ARIA_NEXT: &str = "Next page";
    pub const ARIA_GOTO_PAGE_TEMPLATE: &str = "Go to page {}";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
    pub const CLOSE_ARIA: &str = "Dismiss error";
}

pub mod expander {
    pub const COUNT_TEMPLATE: &str = "{} records";
    pub const PAGE_TEMPLATE: &str = "Page {} of {}";
    pub const EMPTY: &str = "Nothing to show yet.";
}

pub mod user_card {
    pub const ADMIN_BADGE: &str = "admin";
    pub const EMAIL: &str = "Email";
    pub const PHONE: &str = "Phone";
    pub const MISSING: &str = "—";
}

pub mod appointment_card {
    pub const PHONE: &str = "Phone";
    pub const WHEN: &str = "When";
    pub const SERVICE: &str = "Service";
    pub const NOTES: &str = "Notes";
    pub const DISMISS: &str = "Hide results";
    pub const SOURCE_PHONE: &str = "by phone";
    pub const SOURCE_MONTH_YEAR: &str = "by month";
}

pub mod admin_actions {
    pub const TITLE: &str = "Admin Actions";
    pub const BACK_TO_PROFILE: &str = "Back to Profile";
    pub const ALL_USERS: &str = "All Users";
    pub const SHOW_USERS: &str = "Show Users";
    pub const ALL_APPOINTMENTS: &str = "All Appointments";
    pub const SHOW_ALL_APPOINTMENTS: &str = "Show All Appointments";
    pub const BY_PHONE: &str = "Appointments by Phone";
    pub const PHONE_LABEL: &str = "Enter phone number";
    pub const BY_MONTH_YEAR: &str = "Appointments by Month and Year";
    pub const MONTH_LABEL: &str = "Enter month (1-12)";
    pub const YEAR_LABEL: &str = "Enter year";
    pub const RESET: &str = "Reset";
    pub const GET_APPOINTMENTS: &str = "Get Appointments";
    pub const LOAD_FAILED_TEMPLATE: &str = "Failed to load admin data: {}";
}

pub mod profile {
    pub const TITLE: &str = "Profile";
    pub const SIGNED_IN: &str = "You are signed in.";
    pub const SIGNED_OUT: &str = "You are not signed in. Log in from the main site to continue.";
    pub const OPEN_ADMIN: &str = "Open Admin Actions";
    pub const SIGN_OUT: &str = "Sign out";
}

pub mod not_found {
    pub const TITLE: &str = "404 - Page not found";
    pub const BODY: &str = "Sorry, the page you are looking for does not exist.";
    pub const BACK: &str = "Back to profile";
}
