use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::coming_soon::handlers;
use crate::features::coming_soon::services::ComingSoonService;

pub fn routes(service: Arc<ComingSoonService>) -> Router {
    Router::new()
        .route(
            "/api/coming-soon",
            get(handlers::list_coming_soon).post(handlers::create_coming_soon),
        )
        .route(
            "/api/coming-soon/{id}",
            get(handlers::get_coming_soon)
                .patch(handlers::update_coming_soon)
                .delete(handlers::delete_coming_soon),
        )
        .with_state(service)
}
