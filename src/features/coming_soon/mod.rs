//! Stores announced for upcoming openings. The listing takes no filters.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::ComingSoonService;
