//! DTOs exchanged between services and the JSON API.

pub mod api;
