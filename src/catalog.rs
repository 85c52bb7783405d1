//! The studio catalog: every promoted app and every page arrangement, embedded
//! at build time and checked once at startup.

pub mod models;

use std::collections::{HashMap, HashSet};

use log::info;
use serde::Deserialize;
use thiserror::Error;

use models::{AdSlotConfig, AppItem, GridCell, SlotKind, StudioInfo, VariantConfig};

use crate::style::StyleParams;

const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown page variant '{0}'")]
    UnknownVariant(String),
    #[error("app #{index} has an empty id")]
    EmptyId { index: usize },
    #[error("app '{id}' has an empty title")]
    EmptyTitle { id: String },
    #[error("app id '{0}' is used more than once")]
    DuplicateId(String),
    #[error("grid must contain {expected} featured cell(s), found {found}")]
    FeaturedCount { found: usize, expected: usize },
    #[error("grid has {slots} app cells but the variant lists {apps} apps")]
    SlotMismatch { slots: usize, apps: usize },
    #[error("grid cell #{index} has an invalid span {span:?}")]
    InvalidSpan { index: usize, span: (u8, u8) },
}

#[derive(Debug, Deserialize)]
struct Catalog {
    studio: StudioInfo,
    variants: HashMap<String, VariantConfig>,
}

/// What a grid cell shows once apps have been assigned.
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Featured(AppItem),
    Compact(AppItem),
    Intro,
    Ad(AdSlotConfig),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCell {
    pub content: CellContent,
    pub col_span: u8,
    pub row_span: u8,
}

/// A validated page ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub studio: StudioInfo,
    pub cells: Vec<ResolvedCell>,
    pub banner: Option<AdSlotConfig>,
    pub style: StyleParams,
}

impl PageLayout {
    pub fn featured(&self) -> impl Iterator<Item = &AppItem> {
        self.cells.iter().filter_map(|cell| match &cell.content {
            CellContent::Featured(app) => Some(app),
            _ => None,
        })
    }

    pub fn compact(&self) -> impl Iterator<Item = &AppItem> {
        self.cells.iter().filter_map(|cell| match &cell.content {
            CellContent::Compact(app) => Some(app),
            _ => None,
        })
    }

    /// Ad slots on the page, the banner included.
    pub fn ad_count(&self) -> usize {
        let in_grid = self
            .cells
            .iter()
            .filter(|cell| matches!(cell.content, CellContent::Ad(_)))
            .count();
        in_grid + usize::from(self.banner.is_some())
    }
}

/// Loads the embedded catalog and resolves `variant`.
pub fn load(variant: &str) -> Result<PageLayout, CatalogError> {
    load_from_str(CATALOG_JSON, variant)
}

pub fn load_from_str(json: &str, variant: &str) -> Result<PageLayout, CatalogError> {
    let mut catalog: Catalog = serde_json::from_str(json)?;
    let config = catalog
        .variants
        .remove(variant)
        .ok_or_else(|| CatalogError::UnknownVariant(variant.to_string()))?;

    let layout = resolve(catalog.studio, config)?;
    info!(
        "Loaded variant '{}': {} cells, {} ad slots",
        variant,
        layout.cells.len(),
        layout.ad_count()
    );
    Ok(layout)
}

pub fn validate_apps(apps: &[AppItem]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (index, app) in apps.iter().enumerate() {
        if app.id.trim().is_empty() {
            return Err(CatalogError::EmptyId { index });
        }
        if app.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle { id: app.id.clone() });
        }
        if !seen.insert(app.id.as_str()) {
            return Err(CatalogError::DuplicateId(app.id.clone()));
        }
    }
    Ok(())
}

fn validate_grid(grid: &[GridCell], app_count: usize) -> Result<(), CatalogError> {
    for (index, cell) in grid.iter().enumerate() {
        if !(1..=3).contains(&cell.col_span) || cell.row_span == 0 {
            return Err(CatalogError::InvalidSpan {
                index,
                span: (cell.col_span, cell.row_span),
            });
        }
    }

    // A variant without apps shows only intro and ad cells.
    let expected = usize::from(app_count > 0);
    let featured = grid.iter().filter(|cell| cell.slot == SlotKind::Featured).count();
    if featured != expected {
        return Err(CatalogError::FeaturedCount { found: featured, expected });
    }

    let slots = grid.iter().filter(|cell| cell.slot.takes_app()).count();
    if slots != app_count {
        return Err(CatalogError::SlotMismatch { slots, apps: app_count });
    }
    Ok(())
}

/// Validates a variant and hands apps to app cells in list order.
pub fn resolve(studio: StudioInfo, config: VariantConfig) -> Result<PageLayout, CatalogError> {
    validate_apps(&config.apps)?;
    validate_grid(&config.grid, config.apps.len())?;

    let mut apps = config.apps.into_iter();
    let cells = config
        .grid
        .into_iter()
        .filter_map(|cell| {
            // validate_grid guarantees one app per app cell
            let content = match cell.slot {
                SlotKind::Featured => CellContent::Featured(apps.next()?),
                SlotKind::Compact => CellContent::Compact(apps.next()?),
                SlotKind::Intro => CellContent::Intro,
                SlotKind::Ad(ad) => CellContent::Ad(ad),
            };
            Some(ResolvedCell {
                content,
                col_span: cell.col_span,
                row_span: cell.row_span,
            })
        })
        .collect();

    Ok(PageLayout {
        studio,
        cells,
        banner: config.banner,
        style: config.style,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::{AdFormat, AppStatus};

    const STUDIO: &str = r#"{
        "name": "Studio",
        "tagline": "Indie App Studio",
        "headline": { "lead": "Fill the gaps", "highlight": "green", "tail": "." },
        "lede": "We make small tools.",
        "status_note": "Running",
        "intro": { "title": "Sustainable", "body": ["Values over numbers."], "cta": "Contact Studio" },
        "contact_email": "hello@example.com",
        "copyright_holder": "Studio",
        "since_year": 2025
    }"#;

    fn catalog(variant: &str) -> String {
        format!(r#"{{ "studio": {}, "variants": {{ "test": {} }} }}"#, STUDIO, variant)
    }

    fn app(id: &str, status: &str) -> String {
        format!(
            r##"{{ "id": "{id}", "title": "App {id}", "description": "About {id}",
                 "icon": "compass", "url": "#", "status": "{status}", "category": "Lab" }}"##,
            id = id,
            status = status
        )
    }

    #[test]
    fn shipped_solo_variant_has_one_featured_card() {
        let layout = load("solo").unwrap();
        assert_eq!(layout.featured().count(), 1);
        assert_eq!(layout.compact().count(), 0);
        assert_eq!(layout.ad_count(), 2);
        assert!(layout.cells.iter().any(|cell| cell.content == CellContent::Intro));
    }

    #[test]
    fn shipped_bento_variant_keeps_list_order() {
        let layout = load("bento").unwrap();
        let featured: Vec<_> = layout.featured().map(|app| app.id.as_str()).collect();
        let compact: Vec<_> = layout.compact().map(|app| app.id.as_str()).collect();
        assert_eq!(featured, vec!["harugalpi"]);
        assert_eq!(compact, vec!["project-b", "idea-lab"]);
        assert_eq!(layout.ad_count(), 2);
    }

    #[test]
    fn shipped_apps_are_valid() {
        for variant in ["solo", "bento"] {
            let layout = load(variant).unwrap();
            let featured = layout.featured().next().unwrap();
            assert_eq!(featured.status, AppStatus::Live);
            assert!(!featured.is_placeholder_link());
        }
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let err = load("gallery").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownVariant(ref name) if name == "gallery"));
        assert_eq!(err.to_string(), "unknown page variant 'gallery'");
    }

    #[test]
    fn apps_fill_cells_in_list_order() {
        let json = catalog(&format!(
            r#"{{ "apps": [{}, {}, {}],
                 "grid": [ {{ "slot": "compact" }}, {{ "slot": "intro" }},
                           {{ "slot": "featured", "col_span": 2 }}, {{ "slot": "compact" }} ] }}"#,
            app("a", "beta"),
            app("b", "live"),
            app("c", "coming-soon")
        ));
        let layout = load_from_str(&json, "test").unwrap();
        let ids: Vec<_> = layout
            .cells
            .iter()
            .map(|cell| match &cell.content {
                CellContent::Featured(app) | CellContent::Compact(app) => app.id.clone(),
                CellContent::Intro => "intro".to_string(),
                CellContent::Ad(_) => "ad".to_string(),
            })
            .collect();
        assert_eq!(ids, vec!["a", "intro", "b", "c"]);
        assert_eq!(layout.cells[2].col_span, 2);
        assert!(layout.banner.is_none());
    }

    #[test]
    fn duplicate_ids_fail_fast() {
        let json = catalog(&format!(
            r#"{{ "apps": [{}, {}], "grid": [ {{ "slot": "featured" }}, {{ "slot": "compact" }} ] }}"#,
            app("a", "live"),
            app("a", "beta")
        ));
        let err = load_from_str(&json, "test").unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "a"));
    }

    #[test]
    fn unknown_status_is_a_parse_error() {
        let json = catalog(&format!(
            r#"{{ "apps": [{}], "grid": [ {{ "slot": "featured" }} ] }}"#,
            app("a", "retired")
        ));
        assert!(matches!(load_from_str(&json, "test"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn grid_needs_exactly_one_featured_cell() {
        let json = catalog(&format!(
            r#"{{ "apps": [{}, {}], "grid": [ {{ "slot": "compact" }}, {{ "slot": "compact" }} ] }}"#,
            app("a", "live"),
            app("b", "beta")
        ));
        assert!(matches!(
            load_from_str(&json, "test"),
            Err(CatalogError::FeaturedCount { found: 0, expected: 1 })
        ));
    }

    #[test]
    fn variant_without_apps_is_valid() {
        let json = catalog(
            r#"{ "apps": [],
                 "grid": [ { "slot": "intro" }, { "slot": "ad", "format": "rectangle" } ] }"#,
        );
        let layout = load_from_str(&json, "test").unwrap();
        assert_eq!(layout.featured().count(), 0);
        assert_eq!(layout.compact().count(), 0);
        assert_eq!(layout.cells.len(), 2);
    }

    #[test]
    fn featured_cell_without_apps_is_rejected() {
        let json = catalog(r#"{ "apps": [], "grid": [ { "slot": "featured" }, { "slot": "intro" } ] }"#);
        assert!(matches!(
            load_from_str(&json, "test"),
            Err(CatalogError::FeaturedCount { found: 1, expected: 0 })
        ));
    }

    #[test]
    fn second_featured_cell_is_rejected() {
        let json = catalog(&format!(
            r#"{{ "apps": [{}, {}], "grid": [ {{ "slot": "featured" }}, {{ "slot": "featured" }} ] }}"#,
            app("a", "live"),
            app("b", "beta")
        ));
        assert!(matches!(
            load_from_str(&json, "test"),
            Err(CatalogError::FeaturedCount { found: 2, expected: 1 })
        ));
    }

    #[test]
    fn shipped_banners_are_muted() {
        for variant in ["solo", "bento"] {
            let layout = load(variant).unwrap();
            let banner = layout.banner.expect("shipped variants carry a banner");
            assert_eq!(banner.class.as_deref(), Some("ad-banner--muted"));
        }
    }

    #[test]
    fn every_app_needs_a_cell() {
        let json = catalog(&format!(
            r#"{{ "apps": [{}, {}], "grid": [ {{ "slot": "featured" }}, {{ "slot": "intro" }} ] }}"#,
            app("a", "live"),
            app("b", "beta")
        ));
        assert!(matches!(
            load_from_str(&json, "test"),
            Err(CatalogError::SlotMismatch { slots: 1, apps: 2 })
        ));
    }

    #[test]
    fn spans_are_bounded_by_the_grid() {
        let json = catalog(&format!(
            r#"{{ "apps": [{}], "grid": [ {{ "slot": "featured", "col_span": 4 }} ] }}"#,
            app("a", "live")
        ));
        assert!(matches!(
            load_from_str(&json, "test"),
            Err(CatalogError::InvalidSpan { index: 0, span: (4, 1) })
        ));
    }

    #[test]
    fn empty_title_is_rejected() {
        let apps = vec![AppItem {
            id: "x".into(),
            title: "  ".into(),
            description: String::new(),
            icon: crate::components::icon::Glyph::Leaf,
            url: "#".into(),
            status: AppStatus::Live,
            category: String::new(),
        }];
        assert!(matches!(validate_apps(&apps), Err(CatalogError::EmptyTitle { .. })));
    }

    #[test]
    fn ad_cells_keep_their_config() {
        let json = catalog(&format!(
            r#"{{ "apps": [{}],
                 "grid": [ {{ "slot": "featured" }}, {{ "slot": "ad", "format": "vertical" }} ],
                 "banner": {{ "format": "horizontal", "label": "Partner" }} }}"#,
            app("a", "live")
        ));
        let layout = load_from_str(&json, "test").unwrap();
        assert_eq!(layout.ad_count(), 2);
        match &layout.cells[1].content {
            CellContent::Ad(ad) => assert_eq!(ad.format, AdFormat::Vertical),
            other => panic!("unexpected cell {:?}", other),
        }
        assert_eq!(layout.banner.as_ref().and_then(|b| b.label.as_deref()), Some("Partner"));
    }
}
