pub mod presentation_handlers;
pub mod shareholder_handlers;
pub mod site_handlers;

use actix_web::{
    web, Error, HttpRequest, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    error::JsonPayloadError,
    middleware::Next,
};

use crate::errors::AppError;
use crate::templates_structs::ApiErrorResponse;

/// Rejects POST/PUT requests whose Content-Type is not JSON.
/// Bodiless GET and DELETE requests are exempt.
async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let method = req.method().clone();

    if method == actix_web::http::Method::POST || method == actix_web::http::Method::PUT {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("application/json") {
            let response = HttpResponse::BadRequest().json(ApiErrorResponse {
                message: "Content-Type must be application/json for mutation requests".to_string(),
                details: None,
            });
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

/// Malformed JSON bodies get the same `{message, details}` envelope as
/// failed field validation.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    log::debug!("Rejected JSON body: {err}");
    AppError::Validation(vec![err.to_string()]).into()
}

/// Register every page, API and socket route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(site_handlers::home))
        .route("/presentation", web::get().to(presentation_handlers::page))
        .route("/presentation/ws", web::get().to(presentation_handlers::ws::connect))
        .route("/api/slides", web::get().to(presentation_handlers::slides_json));

    // /apply and /approval/{id} BEFORE /{id}
    cfg.service(
        web::scope("/api/shareholder")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .route("", web::get().to(shareholder_handlers::list))
            .route("/apply", web::post().to(shareholder_handlers::apply))
            .route("/approval/{id}", web::put().to(shareholder_handlers::update_approval))
            .route("/{id}", web::get().to(shareholder_handlers::read))
            .route("/{id}", web::delete().to(shareholder_handlers::delete)),
    );
}
