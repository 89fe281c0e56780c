use actix_web::{web, HttpResponse};

use crate::config::AppConfig;
use crate::errors::{self, AppError};
use crate::models::slide::{Deck, Layout, SlideKind};
use crate::presentation::renderer::StatTile;
use crate::templates_structs::{HeroSummary, HomeTemplate, PageContext};

const NOT_FOUND_PAGE: &str = include_str!("../../templates/errors/404.html");

/// GET / - landing page built from the deck's title and first stats slides.
pub async fn home(
    config: web::Data<AppConfig>,
    deck: web::Data<Deck>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&config, "/");

    let hero = deck.slides().iter().find_map(|slide| match &slide.layout {
        Layout::Title { body } => Some(HeroSummary {
            title: slide.title.clone(),
            subtitle: slide.subtitle.clone(),
            body: body.clone(),
        }),
        _ => None,
    });

    let highlights = deck
        .slides()
        .iter()
        .filter(|slide| slide.kind() == SlideKind::Stats)
        .find_map(|slide| match &slide.layout {
            Layout::Stats { stats, .. } => Some(stats.iter().map(StatTile::from).collect()),
            _ => None,
        })
        .unwrap_or_default();

    errors::render(HomeTemplate {
        ctx,
        hero,
        highlights,
        total_slides: deck.len().get(),
    })
}

/// Fallback for unmatched routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(NOT_FOUND_PAGE)
}
