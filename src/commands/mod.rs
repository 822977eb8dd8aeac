//! CLI commands

pub mod ensure;
pub mod list;
pub mod register;
