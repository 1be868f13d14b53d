use crate::application::http::proxy::router::ProxyApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "VisionChef API"
    ),
    nest(
        (path = "/api", api = ProxyApiDoc),
    )
)]
pub struct ApiDoc;
