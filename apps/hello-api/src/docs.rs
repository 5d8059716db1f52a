use utoipa::OpenApi;

use crate::error::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::methods::hello::hello,
        crate::methods::health_check::health_check
    ),
    components(schemas(ErrorResponse)),
    tags(
        (name = "greeting", description = "Greeting endpoint"),
        (name = "service", description = "Operational endpoints")
    )
)]
pub struct ApiDoc;
