use askama::Template;

use crate::presentation::renderer::StatTile;

use super::PageContext;

pub struct HeroSummary {
    pub title: String,
    pub subtitle: Option<String>,
    pub body: String,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub hero: Option<HeroSummary>,
    pub highlights: Vec<StatTile>,
    pub total_slides: usize,
}
