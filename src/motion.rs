//! Declarative animation descriptions rendered to plain CSS.
//!
//! Components never animate by hand. They describe a starting pose, a target
//! pose and a transition, and this module turns that into `@keyframes` blocks
//! and inline `animation` declarations. Hover effects become `:hover` rules and
//! viewport-entry animations are paused until [`crate::reveal::Reveal`] flips
//! them on.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(a, b, c, d) => format!("cubic-bezier({}, {}, {}, {})", a, b, c, d),
        }
    }

    pub fn from_points(points: [f32; 4]) -> Self {
        Easing::CubicBezier(points[0], points[1], points[2], points[3])
    }
}

/// Visual properties an animation can move between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotate: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self { opacity: 1.0, x: 0.0, y: 0.0, scale: 1.0, rotate: 0.0 }
    }
}

impl Pose {
    pub fn hidden() -> Self {
        Self { opacity: 0.0, ..Self::default() }
    }

    pub fn offset_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    pub fn offset_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    pub fn transform(&self) -> String {
        let mut parts = Vec::new();
        if self.x != 0.0 || self.y != 0.0 {
            parts.push(format!("translate({}px, {}px)", self.x, self.y));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if self.rotate != 0.0 {
            parts.push(format!("rotate({}deg)", self.rotate));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }

    pub fn css(&self) -> String {
        format!("opacity: {}; transform: {};", self.opacity, self.transform())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Seconds.
    pub duration: f32,
    /// Seconds.
    pub delay: f32,
    pub easing: Easing,
}

impl Transition {
    pub fn new(duration: f32) -> Self {
        Self { duration, delay: 0.0, easing: Easing::EaseOut }
    }

    pub fn delayed(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn eased(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// What starts an entrance. Hover effects are plain `:hover` rules, see
/// [`Wiggle`] and [`HoverLift`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    Mount,
    ViewportEntry { once: bool, margin_px: i32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entrance {
    pub name: &'static str,
    pub from: Pose,
    pub to: Pose,
    pub transition: Transition,
    pub trigger: Trigger,
}

impl Entrance {
    pub fn keyframes(&self) -> String {
        format!(
            "@keyframes {} {{ from {{ {} }} to {{ {} }} }}",
            self.name,
            self.from.css(),
            self.to.css()
        )
    }

    /// Inline style for one element, with `extra_delay` seconds added on top of
    /// the transition's own delay.
    pub fn style(&self, extra_delay: f32) -> String {
        let t = &self.transition;
        let mut style = format!(
            "animation: {} {}s {} {}s both;",
            self.name,
            t.duration,
            t.easing.css(),
            round_ms(t.delay + extra_delay)
        );
        if let Trigger::ViewportEntry { .. } = self.trigger {
            style.push_str(" animation-play-state: paused;");
        }
        style
    }
}

/// Container-driven delays for a sequence of children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub delay_children: f32,
    pub stagger_children: f32,
}

impl Stagger {
    pub fn delay_for(&self, index: usize) -> f32 {
        round_ms(self.delay_children + index as f32 * self.stagger_children)
    }
}

/// Rotation sequence played while hovered.
#[derive(Debug, Clone, PartialEq)]
pub struct Wiggle {
    pub name: &'static str,
    pub angles: Vec<f32>,
    pub duration: f32,
}

impl Wiggle {
    pub fn keyframes(&self) -> String {
        let mut out = format!("@keyframes {} {{", self.name);
        let steps = self.angles.len().saturating_sub(1).max(1) as f32;
        for (i, angle) in self.angles.iter().enumerate() {
            let pct = (i as f32 / steps * 100.0).round();
            let _ = write!(out, " {}% {{ transform: rotate({}deg); }}", pct, angle);
        }
        out.push_str(" }");
        out
    }

    pub fn hover_rule(&self, selector: &str) -> String {
        format!(
            "{}:hover {{ animation: {} {}s ease-in-out; }}",
            selector, self.name, self.duration
        )
    }
}

/// Raise-and-shadow hover effect.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverLift {
    pub lift_px: f32,
    pub scale: f32,
    pub rest_shadow: Option<&'static str>,
    pub hover_shadow: Option<&'static str>,
    pub duration: f32,
}

impl HoverLift {
    pub fn rules(&self, selector: &str) -> String {
        let mut rest = format!("transition: transform {d}s ease, box-shadow {d}s ease;", d = self.duration);
        if let Some(shadow) = self.rest_shadow {
            let _ = write!(rest, " box-shadow: {};", shadow);
        }
        let lifted = Pose { y: -self.lift_px, scale: self.scale, ..Pose::default() };
        let mut hover = format!("transform: {};", lifted.transform());
        if let Some(shadow) = self.hover_shadow {
            let _ = write!(hover, " box-shadow: {};", shadow);
        }
        format!("{sel} {{ {rest} }} {sel}:hover {{ {hover} }}", sel = selector, rest = rest, hover = hover)
    }
}

/// Animation settings shared by every section of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionConfig {
    pub header_left: Entrance,
    pub header_right: Entrance,
    pub hero: Stagger,
    pub hero_item: Entrance,
    pub highlight: Transition,
    pub grid_reveal: Entrance,
    pub banner_reveal: Entrance,
    pub icon_wiggle: Wiggle,
    pub featured_lift: HoverLift,
    pub compact_lift: HoverLift,
    pub cta_press: HoverLift,
}

impl MotionConfig {
    pub fn new(stagger: Stagger, ease: Easing) -> Self {
        Self {
            header_left: Entrance {
                name: "header-in-left",
                from: Pose::hidden().offset_x(-20.0),
                to: Pose::default(),
                transition: Transition::new(0.6),
                trigger: Trigger::Mount,
            },
            header_right: Entrance {
                name: "header-in-right",
                from: Pose::hidden().offset_x(20.0),
                to: Pose::default(),
                transition: Transition::new(0.6),
                trigger: Trigger::Mount,
            },
            hero: stagger,
            hero_item: Entrance {
                name: "hero-item-in",
                from: Pose::hidden().offset_y(30.0),
                to: Pose::default(),
                transition: Transition::new(0.8).eased(ease),
                trigger: Trigger::Mount,
            },
            highlight: Transition::new(0.8).delayed(1.0).eased(Easing::EaseInOut),
            grid_reveal: Entrance {
                name: "grid-reveal",
                from: Pose::hidden().offset_y(40.0),
                to: Pose::default(),
                transition: Transition::new(0.8),
                trigger: Trigger::ViewportEntry { once: true, margin_px: -50 },
            },
            banner_reveal: Entrance {
                name: "banner-reveal",
                from: Pose::hidden(),
                to: Pose::default(),
                transition: Transition::new(0.3).delayed(0.5).eased(Easing::Linear),
                trigger: Trigger::ViewportEntry { once: true, margin_px: 0 },
            },
            icon_wiggle: Wiggle {
                name: "icon-wiggle",
                angles: vec![0.0, -10.0, 10.0, -5.0, 5.0, 0.0],
                duration: 0.5,
            },
            featured_lift: HoverLift {
                lift_px: 5.0,
                scale: 1.0,
                rest_shadow: Some("0 4px 6px -1px rgba(0, 0, 0, 0.05)"),
                hover_shadow: Some("0 20px 40px -12px rgba(0, 0, 0, 0.1)"),
                duration: 0.3,
            },
            compact_lift: HoverLift {
                lift_px: 5.0,
                scale: 1.0,
                rest_shadow: None,
                hover_shadow: None,
                duration: 0.3,
            },
            cta_press: HoverLift {
                lift_px: 0.0,
                scale: 1.05,
                rest_shadow: None,
                hover_shadow: None,
                duration: 0.2,
            },
        }
    }

    /// Every keyframe and hover rule the page needs, as one stylesheet.
    pub fn stylesheet(&self) -> String {
        let mut css = String::new();
        for entrance in [
            &self.header_left,
            &self.header_right,
            &self.hero_item,
            &self.grid_reveal,
            &self.banner_reveal,
        ] {
            css.push_str(&entrance.keyframes());
            css.push('\n');
        }
        css.push_str("@keyframes highlight-sweep { from { width: 0; } to { width: 100%; } }\n");
        css.push_str(&self.icon_wiggle.keyframes());
        css.push('\n');
        css.push_str(&self.icon_wiggle.hover_rule(".app-card--featured .app-card__icon"));
        css.push('\n');
        css.push_str(&self.featured_lift.rules(".app-card--featured"));
        css.push('\n');
        css.push_str(&self.compact_lift.rules(".app-card--compact"));
        css.push('\n');
        css.push_str(&self.cta_press.rules(".app-card__cta"));
        css.push_str("\n.app-card__cta:active { transform: scale(0.95); }\n");
        css.push_str(".revealed { animation-play-state: running !important; }\n");
        css
    }

    pub fn highlight_style(&self) -> String {
        let t = &self.highlight;
        format!(
            "animation: highlight-sweep {}s {} {}s both;",
            t.duration,
            t.easing.css(),
            t.delay
        )
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::new(
            Stagger { delay_children: 0.3, stagger_children: 0.2 },
            Easing::CubicBezier(0.22, 1.0, 0.36, 1.0),
        )
    }
}

fn round_ms(seconds: f32) -> f32 {
    (seconds * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_delays_grow_by_step() {
        let stagger = Stagger { delay_children: 0.3, stagger_children: 0.2 };
        assert_eq!(stagger.delay_for(0), 0.3);
        assert_eq!(stagger.delay_for(1), 0.5);
        assert_eq!(stagger.delay_for(3), 0.9);
    }

    #[test]
    fn pose_renders_only_moved_axes() {
        assert_eq!(Pose::default().transform(), "none");
        assert_eq!(Pose::hidden().offset_y(30.0).transform(), "translate(0px, 30px)");
        let spun = Pose { rotate: 15.0, scale: 1.1, ..Pose::default() };
        assert_eq!(spun.transform(), "scale(1.1) rotate(15deg)");
    }

    #[test]
    fn entrance_style_adds_stagger_delay() {
        let config = MotionConfig::default();
        let style = config.hero_item.style(config.hero.delay_for(1));
        assert_eq!(
            style,
            "animation: hero-item-in 0.8s cubic-bezier(0.22, 1, 0.36, 1) 0.5s both;"
        );
    }

    #[test]
    fn viewport_entrances_start_paused() {
        let config = MotionConfig::default();
        assert!(config.grid_reveal.style(0.0).contains("animation-play-state: paused"));
        assert!(!config.hero_item.style(0.0).contains("paused"));
    }

    #[test]
    fn wiggle_spreads_angles_over_the_timeline() {
        let wiggle = MotionConfig::default().icon_wiggle;
        let frames = wiggle.keyframes();
        assert!(frames.starts_with("@keyframes icon-wiggle {"));
        assert!(frames.contains("0% { transform: rotate(0deg); }"));
        assert!(frames.contains("20% { transform: rotate(-10deg); }"));
        assert!(frames.contains("100% { transform: rotate(0deg); }"));
    }

    #[test]
    fn hover_lift_moves_up_and_swaps_shadow() {
        let rules = MotionConfig::default().featured_lift.rules(".card");
        assert!(rules.contains(".card:hover { transform: translate(0px, -5px); box-shadow: 0 20px 40px"));
        assert!(rules.contains("box-shadow: 0 4px 6px"));
    }

    #[test]
    fn stylesheet_contains_every_keyframe() {
        let css = MotionConfig::default().stylesheet();
        for name in ["header-in-left", "hero-item-in", "grid-reveal", "banner-reveal", "highlight-sweep", "icon-wiggle"] {
            assert!(css.contains(&format!("@keyframes {}", name)), "missing {}", name);
        }
    }
}
