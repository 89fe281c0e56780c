use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;

use super::types::*;

/// Slide table compiled into the binary.
pub const BUILTIN_SLIDES: &str = include_str!("../../../data/slides.json");

#[derive(Debug)]
pub enum DeckError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Empty,
    ZeroId,
    DuplicateId(u32),
    EmptyTitle { id: u32 },
    MissingStats { id: u32 },
    MissingProcessSteps { id: u32 },
    ExpectedText { id: u32, kind: SlideKind },
    UnsafeImage { id: u32 },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Io(e) => write!(f, "Cannot read slide table: {e}"),
            DeckError::Json(e) => write!(f, "Malformed slide table: {e}"),
            DeckError::Empty => write!(f, "Slide table is empty"),
            DeckError::ZeroId => write!(f, "Slide ids must be positive"),
            DeckError::DuplicateId(id) => write!(f, "Duplicate slide id {id}"),
            DeckError::EmptyTitle { id } => write!(f, "Slide {id} has an empty title"),
            DeckError::MissingStats { id } => {
                write!(f, "Slide {id} is a stats slide without stats")
            }
            DeckError::MissingProcessSteps { id } => {
                write!(f, "Slide {id} is a process slide without process steps")
            }
            DeckError::ExpectedText { id, kind } => {
                write!(f, "Slide {id} ({}) needs a single string as content", kind.as_str())
            }
            DeckError::UnsafeImage { id } => {
                write!(f, "Slide {id} has an image path with quotes, parentheses or backslashes")
            }
        }
    }
}

impl std::error::Error for DeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeckError::Io(e) => Some(e),
            DeckError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DeckError {
    fn from(e: std::io::Error) -> Self {
        DeckError::Io(e)
    }
}

impl From<serde_json::Error> for DeckError {
    fn from(e: serde_json::Error) -> Self {
        DeckError::Json(e)
    }
}

/// The validated slide collection, ordered by id. Cloning shares the slides.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Arc<[Slide]>,
}

impl Deck {
    pub fn builtin() -> Result<Self, DeckError> {
        Self::from_json(BUILTIN_SLIDES)
    }

    pub fn from_file(path: &Path) -> Result<Self, DeckError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        let records: Vec<SlideRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_records(mut records: Vec<SlideRecord>) -> Result<Self, DeckError> {
        if records.is_empty() {
            return Err(DeckError::Empty);
        }
        records.sort_by_key(|r| r.id);

        let mut seen = HashSet::with_capacity(records.len());
        let mut slides = Vec::with_capacity(records.len());
        for record in records {
            if record.id == 0 {
                return Err(DeckError::ZeroId);
            }
            if !seen.insert(record.id) {
                return Err(DeckError::DuplicateId(record.id));
            }
            slides.push(validate(record)?);
        }

        Ok(Self { slides: slides.into() })
    }

    pub fn len(&self) -> NonZeroUsize {
        // from_records rejects empty tables
        NonZeroUsize::new(self.slides.len()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn records(&self) -> Vec<SlideRecord> {
        self.slides.iter().map(SlideRecord::from).collect()
    }
}

fn validate(record: SlideRecord) -> Result<Slide, DeckError> {
    let id = record.id;
    if record.title.trim().is_empty() {
        return Err(DeckError::EmptyTitle { id });
    }

    let image = record.image.filter(|s| !s.trim().is_empty());
    // the path lands inside a CSS url()
    if image.as_deref().is_some_and(|path| path.contains(['\'', '"', '(', ')', '\\'])) {
        return Err(DeckError::UnsafeImage { id });
    }

    let layout = match record.kind {
        SlideKind::Title => Layout::Title {
            body: expect_text(id, record.kind, record.content)?,
        },
        SlideKind::Quote => Layout::Quote {
            text: expect_text(id, record.kind, record.content)?,
        },
        SlideKind::Content => Layout::Content(record.content),
        SlideKind::Cta => Layout::Cta(record.content),
        SlideKind::Stats => match record.stats {
            Some(stats) if !stats.is_empty() => Layout::Stats {
                caption: record.content,
                stats,
            },
            _ => return Err(DeckError::MissingStats { id }),
        },
        SlideKind::Process => match record.process_steps {
            Some(steps) if !steps.is_empty() => Layout::Process {
                caption: record.content,
                steps,
            },
            _ => return Err(DeckError::MissingProcessSteps { id }),
        },
    };

    Ok(Slide {
        id,
        title: record.title,
        subtitle: record.subtitle.filter(|s| !s.trim().is_empty()),
        image,
        source_page: record.source_page,
        layout,
    })
}

fn expect_text(id: u32, kind: SlideKind, content: SlideContent) -> Result<String, DeckError> {
    match content {
        SlideContent::Text(text) => Ok(text),
        SlideContent::Items(_) => Err(DeckError::ExpectedText { id, kind }),
    }
}
