use std::rc::Rc;

use chrono::Datelike;
use log::info;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::catalog::models::StudioInfo;
use crate::catalog::{CellContent, PageLayout, ResolvedCell};
use crate::components::ad_placeholder::{AdPlaceholder, AD_PLACEHOLDER_CSS};
use crate::components::app_card::{AppCard, APP_CARD_CSS};
use crate::components::icon::{Glyph, Icon};
use crate::components::intro_card::{IntroCard, INTRO_CARD_CSS};
use crate::config::SCROLL_THRESHOLD_PX;
use crate::motion::MotionConfig;
use crate::reveal::Reveal;
use crate::scroll::{use_header_state, HeaderState};

/// Grid placement for a cell. Spans only apply on wide screens, see `LANDING_CSS`.
pub fn cell_style(cell: &ResolvedCell) -> String {
    format!("--col-span: {}; --row-span: {};", cell.col_span, cell.row_span)
}

pub fn header_class(state: HeaderState) -> Classes {
    classes!("site-header", state.is_scrolled().then_some("site-header--scrolled"))
}

pub fn copyright_line(holder: &str, since: i32, current: i32) -> String {
    if current > since {
        format!("© {}–{} {}. All rights reserved.", since, current, holder)
    } else {
        format!("© {} {}. All rights reserved.", since, holder)
    }
}

fn page_css(motion: &MotionConfig) -> String {
    let mut css = String::from(LANDING_CSS);
    for component in [APP_CARD_CSS, INTRO_CARD_CSS, AD_PLACEHOLDER_CSS] {
        css.push_str(component);
    }
    css.push_str(&motion.stylesheet());
    css
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub layout: Rc<PageLayout>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let layout = &props.layout;
    let motion = use_memo(|style| style.motion(), layout.style.clone());
    let variant_class = use_memo(|style| style.class_name(), layout.style.clone());

    {
        let counts = (layout.featured().count(), layout.compact().count(), layout.cells.len());
        use_effect_with_deps(
            move |(featured, compact, cells)| {
                info!(
                    "Landing page mounted: {} featured, {} compact, {} grid cells",
                    featured, compact, cells
                );
                || ()
            },
            counts,
        );
    }

    html! {
        <ContextProvider<MotionConfig> context={(*motion).clone()}>
            <div class={classes!("landing", (*variant_class).clone())}>
                <style>{page_css(&motion)}</style>

                <Header studio={layout.studio.clone()} />

                <main class="landing__main">
                    <Hero studio={layout.studio.clone()} />

                    <Reveal entrance={motion.grid_reveal.clone()} class="landing__grid">
                        { for layout.cells.iter().map(|cell| grid_cell(cell, &layout.studio)) }
                    </Reveal>

                    if let Some(banner) = &layout.banner {
                        <Reveal entrance={motion.banner_reveal.clone()} class="landing__banner">
                            <div class="landing__banner-inner">
                                <AdPlaceholder slot={banner.clone()} />
                            </div>
                        </Reveal>
                    }
                </main>

                <Footer studio={layout.studio.clone()} />
            </div>
        </ContextProvider<MotionConfig>>
    }
}

fn grid_cell(cell: &ResolvedCell, studio: &StudioInfo) -> Html {
    let content = match &cell.content {
        CellContent::Featured(app) => html! { <AppCard app={app.clone()} featured=true /> },
        CellContent::Compact(app) => html! { <AppCard app={app.clone()} /> },
        CellContent::Intro => html! { <IntroCard studio={studio.clone()} /> },
        CellContent::Ad(slot) => html! {
            <div class="ad-cell">
                <AdPlaceholder slot={slot.clone()} />
                <p class="ad-cell__caption">{"ADVERTISEMENT"}</p>
            </div>
        },
    };

    html! {
        <div class="landing__cell" style={cell_style(cell)}>
            {content}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    studio: StudioInfo,
}

#[function_component(Header)]
fn header(props: &SectionProps) -> Html {
    let motion = use_context::<MotionConfig>().unwrap_or_default();
    let state = use_header_state(SCROLL_THRESHOLD_PX);
    let studio = &props.studio;

    let scroll_to_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <header class={header_class(state)}>
            <div class="site-header__content">
                <div
                    class="site-header__brand"
                    style={motion.header_left.style(0.0)}
                    onclick={scroll_to_top}
                >
                    <div class="site-header__mark">
                        <Icon glyph={Glyph::Leaf} size={18} fill=true />
                    </div>
                    <span class="site-header__name">{&studio.name}</span>
                </div>

                <nav class="site-header__nav" style={motion.header_right.style(0.0)}>
                    <a href={studio.mailto()} class="site-header__contact">
                        <Icon glyph={Glyph::Mail} size={14} />
                        {"Contact"}
                    </a>
                </nav>
            </div>
        </header>
    }
}

#[function_component(Hero)]
fn hero(props: &SectionProps) -> Html {
    let motion = use_context::<MotionConfig>().unwrap_or_default();
    let studio = &props.studio;
    let item = |index: usize| motion.hero_item.style(motion.hero.delay_for(index));

    html! {
        <section class="hero">
            <div class="hero__copy">
                <div class="hero__tagline" style={item(0)}>
                    <Icon glyph={Glyph::Sparkles} size={12} />
                    {&studio.tagline}
                </div>

                <h1 class="hero__headline" style={item(1)}>
                    {&studio.headline.lead}
                    <br />
                    <span class="hero__highlight">
                        {&studio.headline.highlight}
                        <span class="hero__highlighter" style={motion.highlight_style()}></span>
                    </span>
                    {&studio.headline.tail}
                </h1>

                <p class="hero__lede" style={item(2)}>{&studio.lede}</p>
            </div>

            <div class="hero__status" style={item(3)}>
                <span class="hero__pulse">
                    <span class="hero__pulse-ring"></span>
                    <span class="hero__pulse-dot"></span>
                </span>
                {&studio.status_note}
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer(props: &SectionProps) -> Html {
    let studio = &props.studio;
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="site-footer__content">
                <div class="site-footer__brand">
                    <Icon glyph={Glyph::Leaf} size={20} />
                    <span>{&studio.name}</span>
                </div>

                <div class="site-footer__contact">
                    <a href={studio.mailto()} class="site-footer__mail">
                        <Icon glyph={Glyph::Mail} size={16} />
                        {&studio.contact_email}
                    </a>
                    <p class="site-footer__copyright">
                        {copyright_line(&studio.copyright_holder, studio.since_year, year)}
                    </p>
                </div>
            </div>
        </footer>
    }
}

const LANDING_CSS: &str = r#"
.landing {
    min-height: 100vh;
    background: #f5f5f4;
    color: #292524;
    font-family: ui-sans-serif, system-ui, -apple-system, "Apple SD Gothic Neo", "Noto Sans KR", sans-serif;
}

.landing ::selection {
    background: #d1fae5;
    color: #064e3b;
}

.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    padding: var(--header-padding, 1.5rem) 0;
    background: transparent;
    border-bottom: 1px solid transparent;
    transition: all 0.5s;
}

.site-header--scrolled {
    padding: var(--header-padding-scrolled, 0.75rem) 0;
    background: rgba(245, 245, 244, 0.8);
    backdrop-filter: blur(12px);
    -webkit-backdrop-filter: blur(12px);
    border-bottom-color: #e7e5e4;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.site-header__content {
    max-width: var(--page-max-width, 64rem);
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.site-header__brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    cursor: pointer;
}

.site-header__mark {
    width: 2.25rem;
    height: 2.25rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 0.75rem;
    background: var(--accent, #059669);
    color: #ffffff;
    box-shadow: 0 10px 15px -3px #a7f3d0;
    transition: transform 0.2s;
}

.site-header__mark:hover {
    transform: scale(1.1) rotate(15deg);
}

.site-header__name {
    font-size: 1.25rem;
    font-weight: 700;
    letter-spacing: -0.025em;
}

.site-header__nav {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}

.site-header__contact {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.625rem 1.25rem;
    border-radius: 9999px;
    background: #1c1917;
    color: #ffffff;
    font-size: 0.875rem;
    font-weight: 500;
    text-decoration: none;
    transition: background 0.3s;
}

.site-header__contact:hover {
    background: var(--accent, #059669);
}

.landing__main {
    max-width: var(--page-max-width, 64rem);
    margin: 0 auto;
    padding: 9rem 1.5rem 5rem;
}

.hero {
    margin-bottom: var(--hero-spacing, 6rem);
    display: flex;
    align-items: flex-end;
    justify-content: space-between;
    gap: 2.5rem;
}

.hero__copy {
    position: relative;
    z-index: 1;
    max-width: 42rem;
}

.hero__tagline {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 1.5rem;
    padding: 0.375rem 0.75rem;
    border-radius: 9999px;
    background: #ffffff;
    border: 1px solid #d1fae5;
    color: #047857;
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

.hero__headline {
    margin: 0 0 2rem;
    font-size: 4.5rem;
    font-weight: 700;
    line-height: 1.1;
    letter-spacing: -0.025em;
    color: #1c1917;
}

.hero__highlight {
    position: relative;
    z-index: 1;
    display: inline-block;
    color: var(--accent, #059669);
}

.hero__highlighter {
    position: absolute;
    left: 0;
    bottom: 0.5rem;
    z-index: -1;
    height: 1rem;
    border-radius: 0.125rem;
    background: rgba(167, 243, 208, 0.5);
}

.hero__lede {
    max-width: 32rem;
    margin: 0;
    color: #78716c;
    font-size: 1.125rem;
    font-weight: 300;
    line-height: 1.7;
}

.hero__status {
    padding-bottom: 0.5rem;
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: #78716c;
    font-size: 0.875rem;
    font-weight: 500;
}

.hero__pulse {
    position: relative;
    display: flex;
    width: 0.625rem;
    height: 0.625rem;
}

.hero__pulse-ring {
    position: absolute;
    inset: 0;
    border-radius: 9999px;
    background: #34d399;
    opacity: 0.75;
    animation: pulse-ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
}

.hero__pulse-dot {
    position: relative;
    width: 100%;
    height: 100%;
    border-radius: 9999px;
    background: #10b981;
}

@keyframes pulse-ping {
    75%, 100% {
        transform: scale(2);
        opacity: 0;
    }
}

.landing__grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: var(--grid-gap, 2rem);
}

.ad-cell {
    height: 100%;
    min-height: 250px;
    box-sizing: border-box;
    padding: 1.5rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    background: #ffffff;
    border: 1px solid #e7e5e4;
    border-radius: var(--card-radius, 0.75rem);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.ad-cell__caption {
    margin: 1rem 0 0;
    padding: 0 1rem;
    font-size: 10px;
    font-weight: 500;
    letter-spacing: 0.05em;
    color: #d6d3d1;
}

.landing__banner {
    margin: 6rem 0 2.5rem;
}

.landing__banner-inner {
    max-width: 56rem;
    margin: 0 auto;
    padding-top: 3rem;
    border-top: 1px solid #e7e5e4;
    display: flex;
    flex-direction: column;
    align-items: center;
}

.site-footer {
    padding: 4rem 0;
    background: #fafaf9;
    border-top: 1px solid #e7e5e4;
}

.site-footer__content {
    max-width: var(--page-max-width, 64rem);
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1.5rem;
    text-align: center;
}

.site-footer__brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: #047857;
    opacity: 0.8;
    font-size: 1.125rem;
    font-weight: 700;
}

.site-footer__contact {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.75rem;
}

.site-footer__mail {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: #78716c;
    font-weight: 500;
    text-decoration: none;
    transition: color 0.3s;
}

.site-footer__mail:hover {
    color: var(--accent, #059669);
}

.site-footer__copyright {
    margin: 0;
    color: #a8a29e;
    font-size: 0.875rem;
}

@media (min-width: 1024px) {
    .landing__grid {
        grid-template-columns: repeat(3, 1fr);
        grid-auto-flow: row dense;
    }

    .landing__cell {
        grid-column: span var(--col-span, 1);
        grid-row: span var(--row-span, 1);
    }
}

@media (max-width: 768px) {
    .hero {
        flex-direction: column;
        align-items: center;
        text-align: center;
    }

    .hero__headline {
        font-size: 2.25rem;
    }

    .hero__status {
        display: none;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn header_class_follows_state() {
        assert_eq!(header_class(HeaderState::AtTop).to_string(), "site-header");
        assert_eq!(
            header_class(HeaderState::Scrolled).to_string(),
            "site-header site-header--scrolled"
        );
    }

    #[test]
    fn cell_style_carries_spans() {
        let layout = catalog::load("solo").unwrap();
        assert_eq!(cell_style(&layout.cells[0]), "--col-span: 2; --row-span: 2;");
        assert_eq!(cell_style(&layout.cells[1]), "--col-span: 1; --row-span: 1;");
    }

    #[test]
    fn copyright_spans_years_once_past_launch() {
        assert_eq!(
            copyright_line("Chorokdam Studio", 2025, 2025),
            "© 2025 Chorokdam Studio. All rights reserved."
        );
        assert_eq!(
            copyright_line("Chorokdam Studio", 2025, 2027),
            "© 2025–2027 Chorokdam Studio. All rights reserved."
        );
    }

    #[derive(Properties, PartialEq)]
    struct GridProps {
        layout: PageLayout,
    }

    #[function_component(Grid)]
    fn grid(props: &GridProps) -> Html {
        html! {
            <>{ for props.layout.cells.iter().map(|cell| grid_cell(cell, &props.layout.studio)) }</>
        }
    }

    async fn render_grid(variant: &'static str) -> String {
        yew::ServerRenderer::<Grid>::with_props(move || GridProps {
            layout: catalog::load(variant).unwrap(),
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn solo_grid_renders_one_featured_card() {
        let html = render_grid("solo").await;
        assert_eq!(html.matches("app-card--featured").count(), 1);
        assert_eq!(html.matches("app-card--compact").count(), 0);
        assert_eq!(html.matches("ad-cell__caption").count(), 1);
        assert!(html.contains("intro-card"));
    }

    #[tokio::test]
    async fn bento_grid_renders_compact_cards_in_list_order() {
        let html = render_grid("bento").await;
        assert_eq!(html.matches("app-card--featured").count(), 1);
        assert_eq!(html.matches("app-card--compact").count(), 2);

        let featured = html.find("하루갈피").unwrap();
        let project_b = html.find("Project B").unwrap();
        let idea_lab = html.find("Idea Lab").unwrap();
        assert!(featured < project_b && project_b < idea_lab);
    }

    #[test]
    fn page_css_bundles_component_styles() {
        let css = page_css(&MotionConfig::default());
        assert!(css.contains(".site-header--scrolled"));
        assert!(css.contains(".app-card__badge"));
        assert!(css.contains(".intro-card__link"));
        assert!(css.contains(".ad-placeholder"));
        assert!(css.contains("@keyframes grid-reveal"));
    }
}
