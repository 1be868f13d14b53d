use super::handlers::forward_prompt::{__path_forward_prompt, forward_prompt};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(forward_prompt))]
pub struct ProxyApiDoc;

pub fn proxy_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/prompt", state.args.server.root_path),
        post(forward_prompt),
    )
}
