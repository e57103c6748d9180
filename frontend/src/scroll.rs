//! Scroll-driven visual state for the hero.
//!
//! Everything here is a pure function of [`ScrollProgress`]; nothing is
//! stored between scroll events.

/// Fraction of the viewport height over which progress runs from 0 to 1.
pub const ACTIVATION_WINDOW: f64 = 0.8;
/// Progress above which the helmet accepts clicks.
pub const CLICK_THRESHOLD: f64 = 0.7;
/// Progress above which the helmet screen lights up.
pub const SCREEN_ACTIVE_THRESHOLD: f64 = 0.8;
/// Scroll offset in pixels after which the navigation bar turns solid.
pub const NAV_SOLID_OFFSET: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    /// `clamp(offset / (viewport_height * 0.8), 0, 1)`. A viewport without a
    /// positive height yields zero.
    pub fn from_scroll(offset_y: f64, viewport_height: f64) -> Self {
        if !(viewport_height > 0.0) || !offset_y.is_finite() {
            return Self(0.0);
        }
        Self((offset_y / (viewport_height * ACTIVATION_WINDOW)).clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn helmet_scale(self) -> f64 {
        1.0 + self.0 * 5.0
    }

    pub fn screen_opacity(self) -> f64 {
        (self.0 * 2.0).min(1.0)
    }

    /// Fades out by two thirds of the way; clamped since the raw expression
    /// goes negative past that point.
    pub fn helmet_opacity(self) -> f64 {
        (1.0 - self.0 * 1.5).max(0.0)
    }

    pub fn scroll_prompt_opacity(self) -> f64 {
        (1.0 - self.0 * 3.0).max(0.0)
    }

    pub fn click_prompt_opacity(self) -> f64 {
        if self.0 > CLICK_THRESHOLD {
            (self.0 - CLICK_THRESHOLD) * 3.0
        } else {
            0.0
        }
    }

    pub fn click_through_enabled(self) -> bool {
        self.0 > CLICK_THRESHOLD
    }

    pub fn screen_active(self) -> bool {
        self.0 > SCREEN_ACTIVE_THRESHOLD
    }

    pub fn demo_button_opacity(self) -> f64 {
        (1.0 - self.0 * 2.0).clamp(0.0, 1.0)
    }

    /// Caption starts appearing at 30% and is fully shown at 70%.
    pub fn caption_reveal(self) -> f64 {
        ((self.0 - 0.3) / 0.4).clamp(0.0, 1.0)
    }

    pub fn caption_offset(self) -> f64 {
        30.0 - self.caption_reveal() * 30.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportScroll {
    pub offset_y: f64,
    pub viewport_height: f64,
}

impl ViewportScroll {
    pub fn progress(self) -> ScrollProgress {
        ScrollProgress::from_scroll(self.offset_y, self.viewport_height)
    }

    pub fn nav_solid(self) -> bool {
        self.offset_y > NAV_SOLID_OFFSET
    }

    pub fn parallax(self, speed: f64) -> f64 {
        self.offset_y.max(0.0) * speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(progress: f64) -> ScrollProgress {
        ScrollProgress(progress)
    }

    #[test]
    fn progress_follows_activation_window() {
        for &height in &[1.0, 480.0, 900.0, 2160.0] {
            for step in 0..=200 {
                let offset = step as f64 * height / 100.0;
                let progress = ScrollProgress::from_scroll(offset, height).value();
                let expected = (offset / (height * 0.8)).clamp(0.0, 1.0);
                assert!((progress - expected).abs() < 1e-12);
                assert!((0.0..=1.0).contains(&progress));
            }
        }
    }

    #[test]
    fn progress_endpoints() {
        assert_eq!(ScrollProgress::from_scroll(0.0, 1000.0).value(), 0.0);
        assert_eq!(ScrollProgress::from_scroll(800.0, 1000.0).value(), 1.0);
        assert_eq!(ScrollProgress::from_scroll(5000.0, 1000.0).value(), 1.0);
    }

    #[test]
    fn degenerate_viewport_yields_zero() {
        assert_eq!(ScrollProgress::from_scroll(300.0, 0.0).value(), 0.0);
        assert_eq!(ScrollProgress::from_scroll(300.0, -10.0).value(), 0.0);
        assert_eq!(ScrollProgress::from_scroll(300.0, f64::NAN).value(), 0.0);
        assert_eq!(ScrollProgress::from_scroll(-40.0, 900.0).value(), 0.0);
    }

    #[test]
    fn helmet_scale_spans_one_to_six() {
        assert_eq!(at(0.0).helmet_scale(), 1.0);
        assert_eq!(at(1.0).helmet_scale(), 6.0);
    }

    #[test]
    fn click_gate_is_exclusive_at_threshold() {
        assert!(!at(0.0).click_through_enabled());
        assert!(!at(0.7).click_through_enabled());
        assert!(at(0.7001).click_through_enabled());
        assert!(at(1.0).click_through_enabled());
    }

    #[test]
    fn screen_active_is_recomputed_both_ways() {
        let readings = [0.5, 0.85, 0.9, 0.79, 0.81];
        let active: Vec<bool> = readings.iter().map(|&p| at(p).screen_active()).collect();
        assert_eq!(active, vec![false, true, true, false, true]);
    }

    #[test]
    fn opacities_never_go_negative() {
        for step in 0..=100 {
            let progress = at(step as f64 / 100.0);
            assert!(progress.helmet_opacity() >= 0.0);
            assert!(progress.scroll_prompt_opacity() >= 0.0);
            assert!(progress.click_prompt_opacity() >= 0.0);
            assert!(progress.screen_opacity() <= 1.0);
        }
        assert_eq!(at(1.0).helmet_opacity(), 0.0);
        assert_eq!(at(0.5).screen_opacity(), 1.0);
    }

    #[test]
    fn click_prompt_fades_in_past_threshold() {
        assert_eq!(at(0.7).click_prompt_opacity(), 0.0);
        assert!((at(0.8).click_prompt_opacity() - 0.3).abs() < 1e-9);
        assert!((at(1.0).click_prompt_opacity() - 0.9).abs() < 1e-9);
    }

    #[test]
    fn caption_reveal_window() {
        assert_eq!(at(0.2).caption_reveal(), 0.0);
        assert!((at(0.5).caption_reveal() - 0.5).abs() < 1e-9);
        assert_eq!(at(0.9).caption_reveal(), 1.0);
        assert_eq!(at(0.9).caption_offset(), 0.0);
        assert_eq!(at(0.0).caption_offset(), 30.0);
    }

    #[test]
    fn nav_turns_solid_past_fifty_pixels() {
        let scroll = |offset_y| ViewportScroll {
            offset_y,
            viewport_height: 800.0,
        };
        assert!(!scroll(50.0).nav_solid());
        assert!(scroll(51.0).nav_solid());
    }
}
