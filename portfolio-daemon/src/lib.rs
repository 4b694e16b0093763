//! Portfolio Daemon - HTTP front end for the project store.
//!
//! This library provides the axum router and shared state so the server can be
//! embedded or driven in-process by tests.

pub mod server;
