//! Library half of `ad-cli`, split out so integration tests can drive the
//! argument parser, HTTP client and text renderer directly.

pub mod cli;
pub mod client;
pub mod commands;
pub mod render;
