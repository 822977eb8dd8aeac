//! brave-profiles library
//!
//! Core functionality for provisioning numbered Brave browser profiles:
//! scanning `Profile <n>` directories, allocating the next free number,
//! writing per-profile `Preferences` and registering profiles in
//! `Local State`.
//!
//! # Disclaimer
//!
//! This tool is not affiliated with or endorsed by Brave Software, Inc.
//! It edits locally stored browser data on your machine. Close Brave before
//! running it; concurrent writes to `Local State` are not guarded against.

pub mod brave;
pub mod config;
pub mod error;
