//! Domain types shared by every layer of the directory.

pub mod filter;
pub mod types;
pub mod user;
