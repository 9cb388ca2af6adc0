//! News articles published by mall management.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/news` | List articles (category, isPublished) |
//! | POST | `/api/news` | Create article |
//! | GET | `/api/news/{id}` | Get article |
//! | PATCH | `/api/news/{id}` | Partial update |
//! | DELETE | `/api/news/{id}` | Delete article |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::NewsService;
