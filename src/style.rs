use log::warn;
use serde::Deserialize;
use stylist::Style;

use crate::motion::{Easing, MotionConfig, Stagger};

/// Cosmetic knobs that differ between page variants. Every field has a default,
/// so a variant only lists what it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleParams {
    pub max_width_rem: f32,
    pub grid_gap_rem: f32,
    pub card_padding_rem: f32,
    pub card_radius_rem: f32,
    pub header_padding_rem: f32,
    pub header_padding_scrolled_rem: f32,
    pub hero_spacing_rem: f32,
    pub accent: String,
    pub ease: [f32; 4],
    pub delay_children: f32,
    pub stagger_children: f32,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self {
            max_width_rem: 64.0,
            grid_gap_rem: 2.0,
            card_padding_rem: 3.0,
            card_radius_rem: 0.75,
            header_padding_rem: 1.5,
            header_padding_scrolled_rem: 0.75,
            hero_spacing_rem: 6.0,
            accent: "#059669".to_string(),
            ease: [0.22, 1.0, 0.36, 1.0],
            delay_children: 0.3,
            stagger_children: 0.2,
        }
    }
}

impl StyleParams {
    pub fn motion(&self) -> MotionConfig {
        MotionConfig::new(
            Stagger {
                delay_children: self.delay_children,
                stagger_children: self.stagger_children,
            },
            Easing::from_points(self.ease),
        )
    }

    /// Custom properties consumed by the page stylesheet.
    pub fn css_vars(&self) -> String {
        format!(
            "--page-max-width: {}rem;\n\
             --grid-gap: {}rem;\n\
             --card-padding: {}rem;\n\
             --card-radius: {}rem;\n\
             --header-padding: {}rem;\n\
             --header-padding-scrolled: {}rem;\n\
             --hero-spacing: {}rem;\n\
             --accent: {};\n",
            self.max_width_rem,
            self.grid_gap_rem,
            self.card_padding_rem,
            self.card_radius_rem,
            self.header_padding_rem,
            self.header_padding_scrolled_rem,
            self.hero_spacing_rem,
            self.accent,
        )
    }

    /// Mounts the variables as a scoped class. `None` leaves the stylesheet
    /// fallbacks in charge.
    pub fn class_name(&self) -> Option<String> {
        match Style::new(self.css_vars()) {
            Ok(style) => Some(style.get_class_name().to_string()),
            Err(err) => {
                warn!("Failed to mount variant style: {}", err);
                None
            }
        }
    }
}
