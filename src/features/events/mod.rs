//! Mall events and promotions.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/events` | List events (type, isActive, startDate, endDate) |
//! | POST | `/api/events` | Create event |
//! | GET | `/api/events/{id}` | Get event |
//! | PATCH | `/api/events/{id}` | Partial update |
//! | DELETE | `/api/events/{id}` | Delete event |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::EventService;
