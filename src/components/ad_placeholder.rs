use yew::prelude::*;

use crate::catalog::models::{AdFormat, AdSlotConfig};

/// Inline sizing for a placeholder: full width up to the unit's width, with
/// the unit's aspect ratio.
pub fn placeholder_style(format: AdFormat) -> String {
    let (width, height) = format.dimensions();
    format!(
        "max-width: {}px; aspect-ratio: {} / {};",
        width, width, height
    )
}

#[derive(Properties, PartialEq)]
pub struct AdPlaceholderProps {
    pub slot: AdSlotConfig,
}

#[function_component(AdPlaceholder)]
pub fn ad_placeholder(props: &AdPlaceholderProps) -> Html {
    let AdSlotConfig { format, label, class } = &props.slot;
    let (width, height) = format.dimensions();
    let label = label.clone().unwrap_or_else(|| "Advertisement".to_string());

    html! {
        <div
            class={classes!("ad-placeholder", format!("ad-placeholder--{}", format.as_str()), class.clone())}
            style={placeholder_style(*format)}
            role="img"
            aria-label={format!("{} ({}x{})", label, width, height)}
        >
            <span class="ad-placeholder__label">{label}</span>
            <span class="ad-placeholder__size">{format!("{} × {}", width, height)}</span>
        </div>
    }
}

pub const AD_PLACEHOLDER_CSS: &str = r#"
.ad-placeholder {
    width: 100%;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 0.25rem;
    border: 1px dashed #d6d3d1;
    border-radius: 0.5rem;
    background: repeating-linear-gradient(45deg, #fafaf9, #fafaf9 10px, #f5f5f4 10px, #f5f5f4 20px);
    color: #a8a29e;
}

.ad-placeholder__label {
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

.ad-placeholder__size {
    font-size: 10px;
    color: #d6d3d1;
}

.ad-placeholder--vertical {
    max-height: 600px;
}

.ad-banner--muted {
    opacity: 0.8;
    transition: opacity 0.3s;
}

.ad-banner--muted:hover {
    opacity: 1;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_keeps_unit_proportions() {
        assert_eq!(
            placeholder_style(AdFormat::Horizontal),
            "max-width: 728px; aspect-ratio: 728 / 90;"
        );
        assert_eq!(
            placeholder_style(AdFormat::Rectangle),
            "max-width: 300px; aspect-ratio: 300 / 250;"
        );
        assert_eq!(
            placeholder_style(AdFormat::Vertical),
            "max-width: 160px; aspect-ratio: 160 / 600;"
        );
    }
}
