use yew::prelude::*;

use crate::catalog::models::StudioInfo;
use crate::components::icon::{Glyph, Icon};

#[derive(Properties, PartialEq)]
pub struct IntroCardProps {
    pub studio: StudioInfo,
}

#[function_component(IntroCard)]
pub fn intro_card(props: &IntroCardProps) -> Html {
    let studio = &props.studio;

    html! {
        <div class="intro-card">
            <div class="intro-card__icon">
                <Icon glyph={Glyph::Coffee} size={24} stroke_width={1.5} />
            </div>

            <h3 class="intro-card__title">{&studio.intro.title}</h3>
            <p class="intro-card__body">
                { for studio.intro.body.iter().enumerate().map(|(i, line)| html! {
                    <>
                        if i > 0 { <br /> }
                        {line}
                    </>
                }) }
            </p>

            <a href={studio.mailto()} class="intro-card__link">
                {&studio.intro.cta}
                <Icon glyph={Glyph::ArrowUpRight} size={14} class="intro-card__arrow" />
            </a>
        </div>
    }
}

pub const INTRO_CARD_CSS: &str = r#"
.intro-card {
    position: relative;
    overflow: hidden;
    height: fit-content;
    padding: calc(var(--card-padding, 3rem) * 0.66);
    background: #ffffff;
    border: 1px solid #e7e5e4;
    border-radius: var(--card-radius, 0.75rem);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.intro-card__icon {
    width: 3rem;
    height: 3rem;
    margin-bottom: 1.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 0.75rem;
    background: #f5f5f4;
    color: #57534e;
}

.intro-card__title {
    margin: 0 0 0.75rem;
    font-size: 1.25rem;
    font-weight: 700;
    color: #292524;
}

.intro-card__body {
    margin: 0 0 1.5rem;
    color: #78716c;
    font-size: 0.875rem;
    line-height: 1.7;
}

.intro-card__link {
    display: inline-flex;
    align-items: center;
    gap: 0.375rem;
    font-size: 0.875rem;
    font-weight: 700;
    color: #a8a29e;
    text-decoration: none;
    transition: color 0.3s;
}

.intro-card__link:hover {
    color: var(--accent, #059669);
}

.intro-card__arrow {
    transition: transform 0.2s;
}

.intro-card__link:hover .intro-card__arrow {
    transform: translate(2px, -2px);
}
"#;
