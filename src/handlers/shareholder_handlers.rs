use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::shareholder::{validate, NewApplication, ShareholderStore, StatusUpdate};
use crate::templates_structs::ApiMessage;

/// GET /api/shareholder - all applications, newest first
pub async fn list(store: web::Data<ShareholderStore>) -> HttpResponse {
    HttpResponse::Ok().json(store.list())
}

/// GET /api/shareholder/{id}
pub async fn read(
    store: web::Data<ShareholderStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let shareholder = store.find_by_id(&path).ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(shareholder))
}

/// POST /api/shareholder/apply
pub async fn apply(
    store: web::Data<ShareholderStore>,
    body: web::Json<NewApplication>,
) -> Result<HttpResponse, AppError> {
    let application = body.into_inner();

    let errors = validate::validate_application(&application);
    if !errors.is_empty() {
        log::debug!("Rejected shareholder application: {}", errors.join("; "));
        return Err(AppError::Validation(errors));
    }

    let shareholder = store.create(application);
    log::info!("Shareholder application {} received", shareholder.id);

    Ok(HttpResponse::Created().json(ApiMessage::new("Application submitted successfully", shareholder)))
}

/// PUT /api/shareholder/approval/{id}
pub async fn update_approval(
    store: web::Data<ShareholderStore>,
    path: web::Path<String>,
    body: web::Json<StatusUpdate>,
) -> Result<HttpResponse, AppError> {
    let status = body.into_inner().status;
    let shareholder = store.update_status(&path, status).ok_or(AppError::NotFound)?;
    log::info!("Shareholder application {} marked {}", shareholder.id, status.as_str());

    Ok(HttpResponse::Ok().json(ApiMessage::new("Status updated", shareholder)))
}

/// DELETE /api/shareholder/{id}
pub async fn delete(
    store: web::Data<ShareholderStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    if !store.delete(&path) {
        return Err(AppError::NotFound);
    }
    log::info!("Shareholder application {} deleted", path.as_str());

    Ok(HttpResponse::Ok().json(ApiMessage::text("Application deleted")))
}
