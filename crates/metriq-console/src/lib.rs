//! metriq console library entry.
//!
//! This crate wires the config loader, HTTP API client, and view controller
//! into the runnable metrics console. It is intended to be consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod api;
pub mod config;
pub mod prompt;
pub mod view;
