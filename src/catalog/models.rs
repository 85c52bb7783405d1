use serde::Deserialize;

use crate::components::icon::Glyph;
use crate::style::StyleParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppStatus {
    Live,
    Beta,
    ComingSoon,
}

impl AppStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppStatus::Live => "live",
            AppStatus::Beta => "beta",
            AppStatus::ComingSoon => "coming-soon",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: Glyph,
    pub url: String,
    pub status: AppStatus,
    pub category: String,
}

impl AppItem {
    /// Apps that are not out yet link to `#`.
    pub fn is_placeholder_link(&self) -> bool {
        self.url.trim() == "#"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdFormat {
    Horizontal,
    Rectangle,
    Vertical,
}

impl AdFormat {
    /// Width and height in CSS pixels (IAB leaderboard, medium rectangle, skyscraper).
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            AdFormat::Horizontal => (728, 90),
            AdFormat::Rectangle => (300, 250),
            AdFormat::Vertical => (160, 600),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdFormat::Horizontal => "horizontal",
            AdFormat::Rectangle => "rectangle",
            AdFormat::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdSlotConfig {
    pub format: AdFormat,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "slot", rename_all = "lowercase")]
pub enum SlotKind {
    Featured,
    Compact,
    Intro,
    Ad(AdSlotConfig),
}

impl SlotKind {
    pub fn takes_app(&self) -> bool {
        matches!(self, SlotKind::Featured | SlotKind::Compact)
    }
}

fn one() -> u8 {
    1
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridCell {
    #[serde(flatten)]
    pub slot: SlotKind,
    #[serde(default = "one")]
    pub col_span: u8,
    #[serde(default = "one")]
    pub row_span: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Headline {
    pub lead: String,
    pub highlight: String,
    pub tail: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IntroCopy {
    pub title: String,
    pub body: Vec<String>,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudioInfo {
    pub name: String,
    pub tagline: String,
    pub headline: Headline,
    pub lede: String,
    pub status_note: String,
    pub intro: IntroCopy,
    pub contact_email: String,
    pub copyright_holder: String,
    pub since_year: i32,
}

impl StudioInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariantConfig {
    pub apps: Vec<AppItem>,
    pub grid: Vec<GridCell>,
    #[serde(default)]
    pub banner: Option<AdSlotConfig>,
    #[serde(default)]
    pub style: StyleParams,
}
