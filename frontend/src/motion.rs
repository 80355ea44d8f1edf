//! Entrance animations rendered to inline CSS.
//!
//! Reveal-gated elements switch between two inline styles and let a CSS
//! transition interpolate. Elements that animate on mount use the
//! `motion-enter` keyframes from the page stylesheet instead.

use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Ease,
    EaseOut,
}

impl Easing {
    fn css(self) -> &'static str {
        match self {
            Easing::Ease => "ease",
            Easing::EaseOut => "ease-out",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Motion {
    pub x: i32,
    pub y: i32,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Motion {
    /// Rises into place from `y` pixels below.
    pub const fn rise(y: i32) -> Self {
        Motion { x: 0, y, duration_ms: 800, delay_ms: 0, easing: Easing::EaseOut }
    }

    /// Slides in horizontally; negative `x` comes from the left.
    pub const fn slide(x: i32) -> Self {
        Motion { x, y: 0, duration_ms: 800, delay_ms: 0, easing: Easing::EaseOut }
    }

    pub const fn fade() -> Self {
        Motion { x: 0, y: 0, duration_ms: 600, delay_ms: 0, easing: Easing::Ease }
    }

    pub const fn duration(mut self, ms: u32) -> Self {
        self.duration_ms = ms;
        self
    }

    pub const fn delay(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Offsets the delay for the `index`-th item of a list.
    pub fn stagger(self, index: usize, step_ms: u32) -> Self {
        let extra = step_ms.saturating_mul(index as u32);
        self.delay(self.delay_ms.saturating_add(extra))
    }

    /// Inline style for a reveal-gated element.
    pub fn style(&self, revealed: bool) -> String {
        let mut style = if revealed {
            String::from("opacity: 1; transform: translate(0px, 0px);")
        } else {
            format!("opacity: 0; transform: translate({}px, {}px);", self.x, self.y)
        };
        let timing = format!("{}ms {} {}ms", self.duration_ms, self.easing.css(), self.delay_ms);
        let _ = write!(style, " transition: opacity {timing}, transform {timing};");
        style
    }

    /// Inline style for an element that animates once when it mounts.
    pub fn on_mount(&self) -> String {
        format!(
            "--motion-x: {}px; --motion-y: {}px; animation: motion-enter {}ms {} {}ms both;",
            self.x,
            self.y,
            self.duration_ms,
            self.easing.css(),
            self.delay_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_style_carries_the_offset() {
        let style = Motion::rise(60).style(false);
        assert!(style.starts_with("opacity: 0; transform: translate(0px, 60px);"));
        assert!(style.contains("transition: opacity 800ms ease-out 0ms, transform 800ms ease-out 0ms;"));
    }

    #[test]
    fn revealed_style_is_at_rest() {
        let style = Motion::slide(-60).delay(200).style(true);
        assert!(style.starts_with("opacity: 1; transform: translate(0px, 0px);"));
        assert!(style.contains("800ms ease-out 200ms"));
    }

    #[test]
    fn stagger_adds_to_the_base_delay() {
        let base = Motion::rise(20).duration(600).delay(600);
        assert_eq!(base.stagger(0, 100).delay_ms, 600);
        assert_eq!(base.stagger(3, 100).delay_ms, 900);
    }

    #[test]
    fn mount_style_uses_keyframes() {
        let style = Motion::slide(-30).duration(600).on_mount();
        assert_eq!(
            style,
            "--motion-x: -30px; --motion-y: 0px; animation: motion-enter 600ms ease-out 0ms both;"
        );
    }

    #[test]
    fn fade_has_no_offset() {
        let motion = Motion::fade().delay(1200);
        assert_eq!((motion.x, motion.y), (0, 0));
        assert!(motion.style(false).contains("ease 1200ms"));
    }
}
