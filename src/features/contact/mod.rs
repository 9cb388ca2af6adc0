//! Contact form submissions.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/contact` | Submit the form |
//! | GET | `/api/contact` | List submissions, newest first |
//! | PATCH | `/api/contact/{id}` | Set `isResolved` |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::ContactService;
