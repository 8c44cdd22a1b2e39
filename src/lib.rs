//! bookmarks-service - bookmark and short link web service
//!
//! Registered users submit URLs and receive six character bookmark ids that
//! resolve back to the (post-redirect) URL. Three HTTP Basic schemes guard the
//! API: user login, API key pairs and a single super user.
//!
//! # Architecture
//! - `storage`: SeaORM persistence (SQLite / MySQL / PostgreSQL)
//! - `services`: business logic, credential checks and outbound URL verification
//! - `api`: HTTP handlers, guard chain and middleware
//! - `config`: static configuration
//! - `runtime`: application lifecycle and execution modes
//! - `system`: logging

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
