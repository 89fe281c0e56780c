use askama::Template;

use crate::presentation::renderer::{SlideBody, SlideView};
use crate::presentation::state::{Cursor, next_index, previous_index};

use super::PageContext;

/// Full `/presentation` page; works without JavaScript through plain links.
#[derive(Template)]
#[template(path = "presentation/page.html")]
pub struct PresentationPageTemplate {
    pub ctx: PageContext,
    pub view: SlideView,
    pub controls: DeckControls,
}

/// Just the slide, as pushed over the presentation socket.
#[derive(Template)]
#[template(path = "presentation/slide.html")]
pub struct SlideFragment<'a> {
    pub view: &'a SlideView,
}

pub struct SlideDot {
    pub index: usize,
    pub position: usize,
    pub active: bool,
}

/// Link targets and progress for the deck chrome.
pub struct DeckControls {
    pub index: usize,
    pub position: usize,
    pub total: usize,
    pub percent: u8,
    pub first: usize,
    pub previous: usize,
    pub next: usize,
    pub last: usize,
    pub dots: Vec<SlideDot>,
}

impl DeckControls {
    pub fn new(cursor: &Cursor) -> Self {
        let total = cursor.total();
        let index = cursor.index();
        let dots = (0..total.get())
            .map(|i| SlideDot { index: i, position: i + 1, active: i == index })
            .collect();
        Self {
            index,
            position: index + 1,
            total: total.get(),
            percent: cursor.percent(),
            first: 0,
            previous: previous_index(index, total),
            next: next_index(index, total),
            last: total.get() - 1,
            dots,
        }
    }
}
