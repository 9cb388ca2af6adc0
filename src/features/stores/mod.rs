//! Store directory: the mall's tenants and their listing filters.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/stores` | List stores (category, subcategory, floor, search, isOpen) |
//! | POST | `/api/stores` | Create store |
//! | GET | `/api/stores/{id}` | Get store |
//! | PATCH | `/api/stores/{id}` | Partial update |
//! | DELETE | `/api/stores/{id}` | Delete store |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::StoreService;
