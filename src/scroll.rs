use crate::config::{BACK_TO_TOP_OFFSET, NAVBAR_HIDE_OFFSET, REVEAL_DISTANCE};

pub const REVEAL_FROM_LEFT: &str = "gs_reveal_fromLeft";
pub const REVEAL_FROM_RIGHT: &str = "gs_reveal_fromRight";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealDirection {
    Up,
    Left,
    Right,
}

impl RevealDirection {
    pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut direction = Self::Up;
        for class in classes {
            match class {
                REVEAL_FROM_LEFT => return Self::Left,
                REVEAL_FROM_RIGHT => direction = Self::Right,
                _ => {}
            }
        }
        direction
    }

    /// Start offset `(x, y)` in pixels. Vertical reveals come from below on
    /// the way down and from above when re-entered scrolling up.
    pub fn offset(self, entering_back: bool) -> (f64, f64) {
        match self {
            Self::Left => (-REVEAL_DISTANCE, 0.0),
            Self::Right => (REVEAL_DISTANCE, 0.0),
            Self::Up if entering_back => (0.0, -REVEAL_DISTANCE),
            Self::Up => (0.0, REVEAL_DISTANCE),
        }
    }
}

/// Fraction of the scrollable distance covered, in `[0, 1]`.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

pub fn progress_transform(progress: f64) -> String {
    format!("scaleX({progress})")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarPosition {
    Shown,
    Hidden,
}

impl NavbarPosition {
    pub fn transform(self) -> &'static str {
        match self {
            Self::Shown => "translateY(0)",
            Self::Hidden => "translateY(-100%)",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavbarTracker {
    last_offset: f64,
}

impl NavbarTracker {
    pub fn update(&mut self, offset: f64) -> NavbarPosition {
        let position = if offset > self.last_offset && offset > NAVBAR_HIDE_OFFSET {
            NavbarPosition::Hidden
        } else {
            NavbarPosition::Shown
        };
        self.last_offset = offset;
        position
    }
}

pub fn back_to_top_visible(offset: f64) -> bool {
    offset > BACK_TO_TOP_OFFSET
}

/// Easing handed to the smooth-scroll helper.
pub fn smooth_scroll_easing(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// Who performs smooth scrolling once the scroll library has been tried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    Library,
    Native,
}

impl ScrollMode {
    pub fn after_construction<T, E>(outcome: &Result<T, E>) -> Self {
        match outcome {
            Ok(_) => Self::Library,
            Err(_) => Self::Native,
        }
    }

    /// `scroll-behavior` to set on the root element, if any.
    pub fn root_scroll_behavior(self) -> Option<&'static str> {
        match self {
            Self::Library => None,
            Self::Native => Some("smooth"),
        }
    }
}

pub fn section_link_href(section_id: &str) -> String {
    format!("#{section_id}")
}

/// Element id an in-page link points at, or `None` for links that leave the page.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_follows_class_tags() {
        assert_eq!(
            RevealDirection::from_classes(["gs_reveal"]),
            RevealDirection::Up
        );
        assert_eq!(
            RevealDirection::from_classes(["gs_reveal", REVEAL_FROM_LEFT]),
            RevealDirection::Left
        );
        assert_eq!(
            RevealDirection::from_classes([REVEAL_FROM_RIGHT, "gs_reveal"]),
            RevealDirection::Right
        );
    }

    #[test]
    fn vertical_offset_flips_on_enter_back() {
        assert_eq!(RevealDirection::Up.offset(false), (0.0, 50.0));
        assert_eq!(RevealDirection::Up.offset(true), (0.0, -50.0));
        assert_eq!(RevealDirection::Left.offset(true), (-50.0, 0.0));
        assert_eq!(RevealDirection::Right.offset(false), (50.0, 0.0));
    }

    #[test]
    fn progress_is_linear_and_clamped() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(2400.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(progress_transform(0.5), "scaleX(0.5)");
    }

    #[test]
    fn navbar_hides_on_downward_scroll_past_offset() {
        let mut tracker = NavbarTracker::default();
        assert_eq!(tracker.update(50.0), NavbarPosition::Shown);
        assert_eq!(tracker.update(150.0), NavbarPosition::Hidden);
        assert_eq!(tracker.update(400.0), NavbarPosition::Hidden);
        assert_eq!(tracker.update(350.0), NavbarPosition::Shown);
        assert_eq!(tracker.update(350.0), NavbarPosition::Shown);
    }

    #[test]
    fn back_to_top_appears_past_threshold() {
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(301.0));
    }

    #[test]
    fn failed_library_construction_falls_back_to_native() {
        let failed: Result<(), &str> = Err("Lenis is not defined");
        let mode = ScrollMode::after_construction(&failed);
        assert_eq!(mode, ScrollMode::Native);
        assert_eq!(mode.root_scroll_behavior(), Some("smooth"));

        let built: Result<(), &str> = Ok(());
        let mode = ScrollMode::after_construction(&built);
        assert_eq!(mode, ScrollMode::Library);
        assert_eq!(mode.root_scroll_behavior(), None);
    }

    #[test]
    fn skip_link_targets_main_content() {
        assert_eq!(anchor_target("#content"), Some("content"));
        assert_eq!(anchor_target(&section_link_href("about")), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("drive/"), None);
    }

    #[test]
    fn easing_reaches_one() {
        assert!(smooth_scroll_easing(0.0) < 0.01);
        assert_eq!(smooth_scroll_easing(1.0), 1.0);
        assert!(smooth_scroll_easing(0.3) < smooth_scroll_easing(0.6));
    }
}
