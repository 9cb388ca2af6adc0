//! Newsletter subscriptions.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/newsletter` | Subscribe (409 if the email exists) |
//! | GET | `/api/newsletter` | List subscriptions, newest first |
//! | PATCH | `/api/newsletter/{id}` | Set `isActive` |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::NewsletterService;
