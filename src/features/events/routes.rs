use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::events::handlers;
use crate::features::events::services::EventService;

pub fn routes(service: Arc<EventService>) -> Router {
    Router::new()
        .route(
            "/api/events",
            get(handlers::list_events).post(handlers::create_event),
        )
        .route(
            "/api/events/{id}",
            get(handlers::get_event)
                .patch(handlers::update_event)
                .delete(handlers::delete_event),
        )
        .with_state(service)
}
