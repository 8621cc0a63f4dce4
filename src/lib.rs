//! Roster API Library
//!
//! Team and member entities with an explicit relationship API, the
//! repository ports that persist them, PostgreSQL and in-memory adapters,
//! and the HTTP layer on top.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
