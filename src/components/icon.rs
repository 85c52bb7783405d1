use serde::Deserialize;
use yew::prelude::*;

/// Stroke glyphs drawn on a 24x24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    Leaf,
    PenLine,
    Mail,
    ArrowUpRight,
    ArrowRight,
    Sparkles,
    Coffee,
    ExternalLink,
    Lightbulb,
    Compass,
}

impl Glyph {
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Glyph::Leaf => &[
                "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z",
                "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12",
            ],
            Glyph::PenLine => &[
                "M12 20h9",
                "M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4Z",
            ],
            Glyph::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2Z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Glyph::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
            Glyph::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Glyph::Sparkles => &[
                "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z",
                "M5 3v4",
                "M19 17v4",
                "M3 5h4",
                "M17 19h4",
            ],
            Glyph::Coffee => &[
                "M17 8h1a4 4 0 1 1 0 8h-1",
                "M3 8h14v9a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4Z",
                "M6 2v2",
                "M10 2v2",
                "M14 2v2",
            ],
            Glyph::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            Glyph::Lightbulb => &[
                "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5",
                "M9 18h6",
                "M10 22h4",
            ],
            Glyph::Compass => &[
                "M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0",
                "M16.24 7.76 14.12 14.12 7.76 16.24 9.88 9.88Z",
            ],
        }
    }

    /// Glyphs drawn filled with the current color as well as stroked.
    fn filled(&self) -> bool {
        matches!(self, Glyph::Leaf)
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub glyph: Glyph,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or(2.0)]
    pub stroke_width: f32,
    #[prop_or_default]
    pub fill: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let size = props.size.to_string();
    let fill = if props.fill && props.glyph.filled() { "currentColor" } else { "none" };

    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class={classes!("icon", props.class.clone())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-width={props.stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.glyph.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
