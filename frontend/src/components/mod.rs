// Reusable components live here.

pub mod appointment_card;
pub mod error_banner;
pub mod expander;
pub mod loading_spinner;
pub mod pagination;
pub mod search_results;
pub mod user_card;
