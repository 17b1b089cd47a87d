pub mod admin_actions;
pub mod not_found;
pub mod profile;

pub use admin_actions::AdminActionsPage;
