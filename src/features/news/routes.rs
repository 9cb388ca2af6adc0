use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::news::handlers;
use crate::features::news::services::NewsService;

pub fn routes(service: Arc<NewsService>) -> Router {
    Router::new()
        .route("/api/news", get(handlers::list_news).post(handlers::create_news))
        .route(
            "/api/news/{id}",
            get(handlers::get_news)
                .patch(handlers::update_news)
                .delete(handlers::delete_news),
        )
        .with_state(service)
}
