use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

use crate::templates_structs::ApiErrorResponse;

#[derive(Debug)]
pub enum AppError {
    Template(askama::Error),
    Validation(Vec<String>),
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Validation(errors) => write!(f, "Validation failed: {}", errors.join("; ")),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => HttpResponse::NotFound().json(ApiErrorResponse {
                message: "Not found".to_string(),
                details: None,
            }),
            AppError::Validation(errors) => HttpResponse::BadRequest().json(ApiErrorResponse {
                message: "Validation failed".to_string(),
                details: Some(errors.clone()),
            }),
            AppError::Template(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

/// Render an askama template into an HTML response.
pub fn render(tmpl: impl Template) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
