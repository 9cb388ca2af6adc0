use std::sync::Arc;

use axum::{
    routing::{patch, post},
    Router,
};

use crate::features::contact::handlers;
use crate::features::contact::services::ContactService;

pub fn routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route(
            "/api/contact",
            post(handlers::submit_contact).get(handlers::list_contact_submissions),
        )
        .route("/api/contact/{id}", patch(handlers::update_contact_submission))
        .with_state(service)
}
