//! Diesel models and configuration structures used by the service.

pub mod config;
pub mod user;
