pub mod ws;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::{self, AppError};
use crate::models::slide::Deck;
use crate::presentation::{renderer, Cursor};
use crate::templates_structs::{DeckControls, PageContext, PresentationPageTemplate};

/// Junk or missing values mean the first slide; range is checked by `Cursor`.
fn parse_index(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok()).unwrap_or(0)
}

#[derive(Debug, Default, Deserialize)]
pub struct SlideQuery {
    /// Kept raw so a bad value falls back instead of failing with 400.
    pub slide: Option<String>,
}

impl SlideQuery {
    pub fn index(&self) -> usize {
        parse_index(self.slide.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StartQuery {
    pub start: Option<String>,
}

impl StartQuery {
    pub fn index(&self) -> usize {
        parse_index(self.start.as_deref())
    }
}

/// GET /presentation?slide=N - full-screen-ready deck page at slide N.
pub async fn page(
    config: web::Data<AppConfig>,
    deck: web::Data<Deck>,
    query: web::Query<SlideQuery>,
) -> Result<HttpResponse, AppError> {
    let cursor = Cursor::at(deck.len(), query.index());
    let slide = deck.get(cursor.index()).ok_or(AppError::NotFound)?;

    let view = renderer::render(slide, cursor.index(), cursor.total().get());
    let ctx = PageContext::build(&config, "/presentation").presenting();

    errors::render(PresentationPageTemplate {
        ctx,
        view,
        controls: DeckControls::new(&cursor),
    })
}

/// GET /api/slides - the slide table in its source shape.
pub async fn slides_json(deck: web::Data<Deck>) -> HttpResponse {
    HttpResponse::Ok().json(deck.records())
}
