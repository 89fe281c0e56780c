//! Pure mapping from one slide to the view tree the templates draw.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::slide::{Layout, ProcessStep, Slide, SlideContent, SlideKind, Stat, StatIcon};

pub const BULLET: &str = "•";
pub const QUOTE_TAGLINE: &str = "Building India's industrial future, one factory at a time.";

/// A leading pictograph (with any variation selectors or ZWJ joins) or a bullet.
static LEADING_GLYPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\s*)((?:[\x{1F300}-\x{1F9FF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}])(?:\x{FE0F}|\x{200D}[\x{1F300}-\x{1F9FF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}])*|•)",
    )
    .expect("valid glyph pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView {
    pub index: usize,
    pub position: usize,
    pub total: usize,
    pub kind: SlideKind,
    pub title: String,
    pub subtitle: Option<String>,
    pub background: Option<String>,
    pub body: SlideBody,
}

impl SlideView {
    pub fn kind_class(&self) -> &'static str {
        self.kind.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideBody {
    Hero(String),
    List(Vec<ListItem>),
    Paragraph(String),
    Stats(Vec<StatTile>),
    Process(Vec<ProcessTile>),
    Quote(QuoteView),
    Cards(Vec<String>),
    Banner(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub glyph: String,
    pub text: String,
    pub indented: bool,
}

impl ListItem {
    pub fn parse(item: &str) -> Self {
        match LEADING_GLYPH.captures(item) {
            Some(caps) => {
                let whole = caps.get(0).map_or(0, |m| m.end());
                ListItem {
                    glyph: caps[2].to_string(),
                    text: item[whole..].trim().to_string(),
                    indented: !caps[1].is_empty(),
                }
            }
            None => ListItem {
                glyph: BULLET.to_string(),
                text: item.trim().to_string(),
                indented: item.starts_with(char::is_whitespace),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub icon: StatIcon,
    pub value: String,
    pub label: String,
}

impl From<&Stat> for StatTile {
    fn from(stat: &Stat) -> Self {
        StatTile {
            icon: StatIcon::resolve(stat.icon),
            value: stat.value.clone(),
            label: stat.label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessTile {
    pub number: String,
    pub title: String,
    pub description: String,
}

impl From<&ProcessStep> for ProcessTile {
    fn from(step: &ProcessStep) -> Self {
        ProcessTile {
            number: step.number.clone(),
            title: step.title.clone(),
            description: step.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteView {
    pub text: String,
    pub tagline: &'static str,
}

/// Build the view for the slide at zero-based `index` of `total`.
pub fn render(slide: &Slide, index: usize, total: usize) -> SlideView {
    let body = match &slide.layout {
        Layout::Title { body } => SlideBody::Hero(body.clone()),
        Layout::Content(content) => list_or_paragraph(content),
        Layout::Stats { stats, .. } => SlideBody::Stats(stats.iter().map(StatTile::from).collect()),
        Layout::Process { steps, .. } => {
            SlideBody::Process(steps.iter().map(ProcessTile::from).collect())
        }
        Layout::Quote { text } => SlideBody::Quote(QuoteView {
            text: text.clone(),
            tagline: QUOTE_TAGLINE,
        }),
        Layout::Cta(SlideContent::Items(items)) => SlideBody::Cards(items.clone()),
        Layout::Cta(SlideContent::Text(text)) => SlideBody::Banner(text.clone()),
    };

    SlideView {
        index,
        position: index + 1,
        total,
        kind: slide.kind(),
        title: slide.title.clone(),
        subtitle: slide.subtitle.clone(),
        background: slide.image.clone(),
        body,
    }
}

fn list_or_paragraph(content: &SlideContent) -> SlideBody {
    match content {
        SlideContent::Items(items) => {
            SlideBody::List(items.iter().map(|item| ListItem::parse(item)).collect())
        }
        SlideContent::Text(text) => SlideBody::Paragraph(text.clone()),
    }
}
