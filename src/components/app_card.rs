use yew::prelude::*;

use crate::catalog::models::{AppItem, AppStatus};
use crate::components::icon::{Glyph, Icon};

/// Lines of description shown on a compact card before it is clamped.
pub const COMPACT_DESCRIPTION_LINES: u32 = 3;

/// Badge text for a card, `None` when no badge is shown.
///
/// Featured cards always carry a badge; compact cards only flag apps that are
/// not live yet.
pub fn badge_text(status: AppStatus, featured: bool) -> Option<&'static str> {
    match (featured, status) {
        (true, AppStatus::Live) => Some("Live Service"),
        (false, AppStatus::Live) => None,
        (_, other) => Some(other.as_str()),
    }
}

#[derive(Properties, PartialEq)]
pub struct AppCardProps {
    pub app: AppItem,
    #[prop_or_default]
    pub featured: bool,
}

#[function_component(AppCard)]
pub fn app_card(props: &AppCardProps) -> Html {
    if props.featured {
        featured_card(&props.app)
    } else {
        compact_card(&props.app)
    }
}

fn featured_card(app: &AppItem) -> Html {
    let inert = app.is_placeholder_link();

    html! {
        <article class="app-card app-card--featured">
            <div class="app-card__body">
                <div class="app-card__top">
                    <div class="app-card__icon">
                        <Icon glyph={app.icon} size={36} stroke_width={1.5} />
                    </div>
                    if let Some(badge) = badge_text(app.status, true) {
                        <span class="app-card__badge">{badge}</span>
                    }
                </div>

                <h3 class="app-card__title">{&app.title}</h3>
                <p class="app-card__description">{&app.description}</p>

                <div class="app-card__footer">
                    <div class="app-card__category">
                        <span class="app-card__category-label">{"Category"}</span>
                        <span class="app-card__category-value">{&app.category}</span>
                    </div>

                    <a
                        href={app.url.clone()}
                        class={classes!("app-card__cta", inert.then_some("app-card__cta--inert"))}
                        aria-disabled={inert.then_some("true")}
                    >
                        {"앱 열어보기"}
                        <Icon glyph={Glyph::ArrowRight} size={16} />
                    </a>
                </div>
            </div>
        </article>
    }
}

fn compact_card(app: &AppItem) -> Html {
    let clamp = format!("-webkit-line-clamp: {};", COMPACT_DESCRIPTION_LINES);

    html! {
        <article class="app-card app-card--compact">
            <div class="app-card__top">
                <div class="app-card__icon app-card__icon--small">
                    <Icon glyph={app.icon} size={22} />
                </div>
                if let Some(badge) = badge_text(app.status, false) {
                    <span class="app-card__badge app-card__badge--muted">{badge}</span>
                }
            </div>

            <h3 class="app-card__title app-card__title--small">{&app.title}</h3>
            <p class="app-card__description app-card__description--clamped" style={clamp}>
                {&app.description}
            </p>

            <div class="app-card__more">
                <span>{"More Info"}</span>
                <Icon glyph={Glyph::ExternalLink} size={12} />
            </div>
        </article>
    }
}

pub const APP_CARD_CSS: &str = r#"
.app-card {
    position: relative;
    height: 100%;
    display: flex;
    flex-direction: column;
    background: #ffffff;
    border: 1px solid #e7e5e4;
    border-radius: var(--card-radius, 0.75rem);
    overflow: hidden;
}

.app-card--featured .app-card__body {
    position: relative;
    z-index: 1;
    display: flex;
    flex-direction: column;
    height: 100%;
    padding: var(--card-padding, 3rem);
}

.app-card--compact {
    min-height: 250px;
    padding: calc(var(--card-padding, 3rem) * 0.66);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.app-card__top {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    margin-bottom: 2rem;
}

.app-card__icon {
    width: 5rem;
    height: 5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 1rem;
    background: #ecfdf5;
    border: 1px solid #d1fae5;
    color: var(--accent, #059669);
}

.app-card__icon--small {
    width: 3rem;
    height: 3rem;
    border-radius: 0.75rem;
    background: #fafaf9;
    border-color: #f5f5f4;
    color: #78716c;
    transition: color 0.3s, background 0.3s, border-color 0.3s;
}

.app-card--compact:hover .app-card__icon--small {
    color: var(--accent, #059669);
    background: #ecfdf5;
    border-color: #d1fae5;
}

.app-card__badge {
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    background: #d1fae5;
    color: #047857;
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

.app-card__badge--muted {
    padding: 0.125rem 0.5rem;
    background: transparent;
    border: 1px solid #e7e5e4;
    color: #a8a29e;
    font-size: 10px;
}

.app-card__title {
    margin: 0 0 1rem;
    font-size: 2.25rem;
    font-weight: 700;
    color: #1c1917;
    transition: color 0.3s;
}

.app-card:hover .app-card__title {
    color: #065f46;
}

.app-card__title--small {
    margin-bottom: 0.5rem;
    font-size: 1.25rem;
    color: #292524;
}

.app-card__description {
    max-width: 32rem;
    margin: 0 0 2.5rem;
    color: #78716c;
    font-size: 1.125rem;
    font-weight: 300;
    line-height: 1.7;
}

.app-card__description--clamped {
    margin-bottom: 1.5rem;
    font-size: 0.875rem;
    font-weight: 400;
    display: -webkit-box;
    -webkit-box-orient: vertical;
    overflow: hidden;
}

.app-card__footer {
    margin-top: auto;
    padding-top: 2rem;
    border-top: 1px solid #f5f5f4;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.app-card__category {
    display: flex;
    flex-direction: column;
}

.app-card__category-label {
    margin-bottom: 0.25rem;
    font-size: 10px;
    font-weight: 700;
    color: #a8a29e;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

.app-card__category-value {
    font-size: 0.875rem;
    font-weight: 500;
    color: #44403c;
}

.app-card__cta {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem 1rem 0.75rem 1.5rem;
    border-radius: 9999px;
    background: #1c1917;
    color: #ffffff;
    font-weight: 500;
    text-decoration: none;
    box-shadow: 0 20px 25px -5px #e7e5e4;
}

.app-card__cta:hover {
    background: var(--accent, #059669);
}

.app-card__cta--inert {
    pointer-events: none;
    opacity: 0.6;
}

.app-card__more {
    margin-top: auto;
    padding-top: 1rem;
    border-top: 1px solid #fafaf9;
    display: inline-flex;
    align-items: center;
    gap: 0.25rem;
    font-size: 0.75rem;
    font-weight: 700;
    color: #d6d3d1;
    transition: color 0.3s;
}

.app-card--compact:hover .app-card__more {
    color: var(--accent, #059669);
}

@media (max-width: 768px) {
    .app-card--featured .app-card__body {
        padding: 2rem;
    }
    .app-card__icon {
        width: 4rem;
        height: 4rem;
    }
    .app-card__title {
        font-size: 1.875rem;
    }
    .app-card__description {
        font-size: 1rem;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn app(status: AppStatus, url: &str) -> AppItem {
        AppItem {
            id: "journal".into(),
            title: "Quiet Journal".into(),
            description: "A minimal diary that keeps one page per day, with no feeds, no likes and nothing else to distract from writing.".into(),
            icon: Glyph::PenLine,
            url: url.into(),
            status,
            category: "Lifestyle".into(),
        }
    }

    async fn render(app: AppItem, featured: bool) -> String {
        yew::ServerRenderer::<AppCard>::with_props(move || AppCardProps { app, featured })
            .render()
            .await
    }

    #[tokio::test]
    async fn featured_card_shows_full_text() {
        let item = app(AppStatus::Live, "https://example.com");
        let html = render(item.clone(), true).await;
        assert!(html.contains("app-card--featured"));
        assert!(html.contains(&item.title));
        assert!(html.contains(&item.description));
        assert!(html.contains(&item.category));
        assert!(html.contains("Live Service"));
        assert!(html.contains(r#"href="https://example.com""#));
        assert!(!html.contains("aria-disabled"));
    }

    #[tokio::test]
    async fn featured_card_with_hash_link_is_inert() {
        let html = render(app(AppStatus::ComingSoon, "#"), true).await;
        assert!(html.contains(r#"aria-disabled="true""#));
        assert!(html.contains("app-card__cta--inert"));
    }

    #[tokio::test]
    async fn compact_card_for_live_app_has_no_badge() {
        let html = render(app(AppStatus::Live, "https://example.com"), false).await;
        assert!(html.contains("app-card--compact"));
        assert!(!html.contains("app-card__badge"));
        assert!(html.contains("More Info"));
    }

    #[tokio::test]
    async fn compact_card_badge_matches_status() {
        for status in [AppStatus::Beta, AppStatus::ComingSoon] {
            let item = app(status, "#");
            let html = render(item.clone(), false).await;
            assert!(html.contains("app-card__badge"));
            assert!(html.contains(&format!(">{}<", status.as_str())));
            // clamped visually only, the full text is still in the markup
            assert!(html.contains(&item.description));
            assert!(html.contains("-webkit-line-clamp: 3;"));
        }
    }

    #[test]
    fn compact_badge_hidden_for_live_apps() {
        assert_eq!(badge_text(AppStatus::Live, false), None);
    }

    #[test]
    fn compact_badge_shows_raw_status() {
        assert_eq!(badge_text(AppStatus::Beta, false), Some("beta"));
        assert_eq!(badge_text(AppStatus::ComingSoon, false), Some("coming-soon"));
    }

    #[test]
    fn featured_badge_is_always_present() {
        assert_eq!(badge_text(AppStatus::Live, true), Some("Live Service"));
        assert_eq!(badge_text(AppStatus::Beta, true), Some("beta"));
        assert_eq!(badge_text(AppStatus::ComingSoon, true), Some("coming-soon"));
    }
}
