use serde::{Deserialize, Serialize};

/// Slide body text: one paragraph or an ordered list of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlideContent {
    Text(String),
    Items(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    Title,
    Content,
    Stats,
    Process,
    Quote,
    Cta,
}

impl SlideKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideKind::Title => "title",
            SlideKind::Content => "content",
            SlideKind::Stats => "stats",
            SlideKind::Process => "process",
            SlideKind::Quote => "quote",
            SlideKind::Cta => "cta",
        }
    }
}

/// Icons a stat tile may name. Names match exactly, case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatIcon {
    #[default]
    Factory,
    ShoppingCart,
    Users,
    Target,
    IndianRupee,
    Building,
    Heart,
    Sparkles,
}

impl StatIcon {
    pub const ALL: [StatIcon; 8] = [
        StatIcon::Factory,
        StatIcon::ShoppingCart,
        StatIcon::Users,
        StatIcon::Target,
        StatIcon::IndianRupee,
        StatIcon::Building,
        StatIcon::Heart,
        StatIcon::Sparkles,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StatIcon::Factory => "Factory",
            StatIcon::ShoppingCart => "ShoppingCart",
            StatIcon::Users => "Users",
            StatIcon::Target => "Target",
            StatIcon::IndianRupee => "IndianRupee",
            StatIcon::Building => "Building",
            StatIcon::Heart => "Heart",
            StatIcon::Sparkles => "Sparkles",
        }
    }

    pub fn lookup(name: &str) -> Option<StatIcon> {
        Self::ALL.into_iter().find(|icon| icon.name() == name)
    }

    /// Absent icons render as the default (`Factory`).
    pub fn resolve(icon: Option<StatIcon>) -> StatIcon {
        icon.unwrap_or_default()
    }

    /// Glyph used by the HTML templates.
    pub fn glyph(&self) -> &'static str {
        match self {
            StatIcon::Factory => "🏭",
            StatIcon::ShoppingCart => "🛒",
            StatIcon::Users => "👥",
            StatIcon::Target => "🎯",
            StatIcon::IndianRupee => "₹",
            StatIcon::Building => "🏢",
            StatIcon::Heart => "❤",
            StatIcon::Sparkles => "✨",
        }
    }

    /// CSS modifier, e.g. `icon-shopping-cart`.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatIcon::Factory => "icon-factory",
            StatIcon::ShoppingCart => "icon-shopping-cart",
            StatIcon::Users => "icon-users",
            StatIcon::Target => "icon-target",
            StatIcon::IndianRupee => "icon-indian-rupee",
            StatIcon::Building => "icon-building",
            StatIcon::Heart => "icon-heart",
            StatIcon::Sparkles => "icon-sparkles",
        }
    }
}

impl TryFrom<String> for StatIcon {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        StatIcon::lookup(&name).ok_or_else(|| format!("unknown icon `{name}`"))
    }
}

impl From<StatIcon> for String {
    fn from(icon: StatIcon) -> Self {
        icon.name().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<StatIcon>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub number: String,
    pub title: String,
    pub description: String,
}

/// A slide as it appears in the JSON table, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideRecord {
    pub id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub content: SlideContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub source_page: String,
    #[serde(rename = "type")]
    pub kind: SlideKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<Stat>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_steps: Option<Vec<ProcessStep>>,
}

/// Kind-specific payload of a validated slide. Each variant carries exactly
/// the fields its layout needs, so the renderer never checks for absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    Title { body: String },
    Content(SlideContent),
    Stats { caption: SlideContent, stats: Vec<Stat> },
    Process { caption: SlideContent, steps: Vec<ProcessStep> },
    Quote { text: String },
    Cta(SlideContent),
}

impl Layout {
    pub fn kind(&self) -> SlideKind {
        match self {
            Layout::Title { .. } => SlideKind::Title,
            Layout::Content(_) => SlideKind::Content,
            Layout::Stats { .. } => SlideKind::Stats,
            Layout::Process { .. } => SlideKind::Process,
            Layout::Quote { .. } => SlideKind::Quote,
            Layout::Cta(_) => SlideKind::Cta,
        }
    }
}

/// A validated, immutable slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub id: u32,
    pub title: String,
    pub subtitle: Option<String>,
    pub image: Option<String>,
    pub source_page: String,
    pub layout: Layout,
}

impl Slide {
    pub fn kind(&self) -> SlideKind {
        self.layout.kind()
    }
}

impl From<&Slide> for SlideRecord {
    fn from(slide: &Slide) -> Self {
        let (content, stats, process_steps) = match &slide.layout {
            Layout::Title { body } => (SlideContent::Text(body.clone()), None, None),
            Layout::Content(content) | Layout::Cta(content) => (content.clone(), None, None),
            Layout::Stats { caption, stats } => (caption.clone(), Some(stats.clone()), None),
            Layout::Process { caption, steps } => (caption.clone(), None, Some(steps.clone())),
            Layout::Quote { text } => (SlideContent::Text(text.clone()), None, None),
        };
        SlideRecord {
            id: slide.id,
            title: slide.title.clone(),
            subtitle: slide.subtitle.clone(),
            content,
            image: slide.image.clone(),
            source_page: slide.source_page.clone(),
            kind: slide.kind(),
            stats,
            process_steps,
        }
    }
}
