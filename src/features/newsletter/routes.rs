use std::sync::Arc;

use axum::{
    routing::{patch, post},
    Router,
};

use crate::features::newsletter::handlers;
use crate::features::newsletter::services::NewsletterService;

pub fn routes(service: Arc<NewsletterService>) -> Router {
    Router::new()
        .route(
            "/api/newsletter",
            post(handlers::subscribe).get(handlers::list_subscriptions),
        )
        .route("/api/newsletter/{id}", patch(handlers::update_subscription))
        .with_state(service)
}
