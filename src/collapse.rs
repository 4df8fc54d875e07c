//! Collapsing title-bar visibility
//!
//! Turns a continuous scroll ratio into a two-state visibility with a single
//! threshold. The state is stored explicitly, so callbacks that land on the
//! side the state already agrees with never restart the fade.

use std::time::{Duration, Instant};

/// Ratio at which the title detail changes visibility
pub const COLLAPSE_THRESHOLD: f32 = 0.2;

/// Length of every visibility cross-fade, in milliseconds
pub const ALPHA_ANIMATION_DURATION_MS: u64 = 200;

/// Visibility of the title-detail surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseState {
    /// Title detail visible
    Expanded,
    /// Title detail hidden
    Collapsed,
}

impl CollapseState {
    pub fn is_title_visible(self) -> bool {
        self == Self::Expanded
    }
}

/// A linear alpha animation on the title-detail surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaFade {
    pub from: f32,
    pub to: f32,
    pub duration_ms: u64,
    /// Hold the final alpha once the animation ends
    pub fill_after: bool,
}

impl AlphaFade {
    /// Fade to fully opaque
    pub fn fade_in(duration_ms: u64) -> Self {
        Self {
            from: 0.0,
            to: 1.0,
            duration_ms,
            fill_after: true,
        }
    }

    /// Fade to fully transparent
    pub fn fade_out(duration_ms: u64) -> Self {
        Self {
            from: 1.0,
            to: 0.0,
            duration_ms,
            fill_after: true,
        }
    }

    /// Alpha after `elapsed` time
    pub fn alpha_after(&self, elapsed: Duration) -> f32 {
        let total = Duration::from_millis(self.duration_ms);
        if elapsed >= total {
            return if self.fill_after { self.to } else { 1.0 };
        }
        let progress = elapsed.as_secs_f32() / total.as_secs_f32();
        self.from + (self.to - self.from) * progress
    }
}

/// Scroll offset as a fraction of the scroll range.
///
/// A zero or negative range counts as no scroll at all.
pub fn offset_ratio(vertical_offset: i32, total_scroll_range: i32) -> f32 {
    if total_scroll_range <= 0 {
        return 0.0;
    }
    let ratio = vertical_offset.unsigned_abs() as f32 / total_scroll_range as f32;
    ratio.clamp(0.0, 1.0)
}

/// Drives the title-detail visibility from scroll ratios
#[derive(Debug, Clone)]
pub struct CollapseVisibilityController {
    state: CollapseState,
    fade: AlphaFade,
    fade_started_at: Instant,
    transitions: usize,
}

impl Default for CollapseVisibilityController {
    fn default() -> Self {
        Self::new()
    }
}

impl CollapseVisibilityController {
    /// Start collapsed with the fade-out already applied (no animation)
    pub fn new() -> Self {
        Self {
            state: CollapseState::Collapsed,
            fade: AlphaFade::fade_out(0),
            fade_started_at: Instant::now(),
            transitions: 0,
        }
    }

    /// Feed a new ratio; returns the fade to run if the state changed
    pub fn on_offset_ratio(&mut self, ratio: f32) -> Option<AlphaFade> {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio };

        let fade = match self.state {
            CollapseState::Expanded if ratio >= COLLAPSE_THRESHOLD => {
                self.state = CollapseState::Collapsed;
                AlphaFade::fade_out(ALPHA_ANIMATION_DURATION_MS)
            }
            CollapseState::Collapsed if ratio < COLLAPSE_THRESHOLD => {
                self.state = CollapseState::Expanded;
                AlphaFade::fade_in(ALPHA_ANIMATION_DURATION_MS)
            }
            _ => return None,
        };

        self.fade = fade;
        self.fade_started_at = Instant::now();
        self.transitions += 1;
        Some(fade)
    }

    /// Convenience for raw offsets
    pub fn on_offset_changed(&mut self, vertical_offset: i32, total_scroll_range: i32) -> Option<AlphaFade> {
        self.on_offset_ratio(offset_ratio(vertical_offset, total_scroll_range))
    }

    pub fn state(&self) -> CollapseState {
        self.state
    }

    /// The most recently issued fade
    pub fn current_fade(&self) -> AlphaFade {
        self.fade
    }

    /// Number of transitions since construction
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    /// Alpha of the title-detail surface at `now`
    pub fn title_alpha(&self, now: Instant) -> f32 {
        self.fade
            .alpha_after(now.saturating_duration_since(self.fade_started_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_hidden_without_animation() {
        let controller = CollapseVisibilityController::new();
        assert_eq!(controller.state(), CollapseState::Collapsed);
        assert_eq!(controller.current_fade().duration_ms, 0);
        assert_eq!(controller.title_alpha(Instant::now()), 0.0);
        assert_eq!(controller.transitions(), 0);
    }

    #[test]
    fn test_ratio_sequence_transitions() {
        let mut controller = CollapseVisibilityController::new();
        let ratios = [0.0, 0.1, 0.19, 0.2, 0.5, 0.15, 0.05];

        let fades: Vec<Option<AlphaFade>> =
            ratios.iter().map(|r| controller.on_offset_ratio(*r)).collect();

        assert_eq!(
            fades,
            vec![
                Some(AlphaFade::fade_in(200)),
                None,
                None,
                Some(AlphaFade::fade_out(200)),
                None,
                Some(AlphaFade::fade_in(200)),
                None,
            ]
        );
        assert_eq!(controller.transitions(), 3);
        assert_eq!(controller.state(), CollapseState::Expanded);
    }

    #[test]
    fn test_threshold_is_inclusive_for_collapsing() {
        let mut controller = CollapseVisibilityController::new();
        controller.on_offset_ratio(0.0);

        assert!(controller.on_offset_ratio(COLLAPSE_THRESHOLD).is_some());
        assert_eq!(controller.state(), CollapseState::Collapsed);
        assert!(controller.on_offset_ratio(COLLAPSE_THRESHOLD).is_none());
    }

    #[test]
    fn test_repeated_callbacks_do_not_restart() {
        let mut controller = CollapseVisibilityController::new();
        controller.on_offset_ratio(0.0);
        for _ in 0..10 {
            assert!(controller.on_offset_ratio(0.05).is_none());
        }
        assert_eq!(controller.transitions(), 1);
    }

    #[test]
    fn test_offset_ratio_guards_zero_range() {
        assert_eq!(offset_ratio(0, 0), 0.0);
        assert_eq!(offset_ratio(-50, 0), 0.0);
        assert_eq!(offset_ratio(10, -4), 0.0);
        assert_eq!(offset_ratio(-25, 100), 0.25);
        assert_eq!(offset_ratio(300, 100), 1.0);
    }

    #[test]
    fn test_zero_range_drives_controller_as_zero_ratio() {
        let mut controller = CollapseVisibilityController::new();
        let fade = controller.on_offset_changed(120, 0);
        assert_eq!(fade, Some(AlphaFade::fade_in(ALPHA_ANIMATION_DURATION_MS)));
        assert_eq!(controller.state(), CollapseState::Expanded);
    }

    #[test]
    fn test_nan_ratio_is_zero() {
        let mut controller = CollapseVisibilityController::new();
        assert!(controller.on_offset_ratio(f32::NAN).is_some());
        assert!(controller.state().is_title_visible());
    }

    #[test]
    fn test_fade_interpolation_and_fill_after() {
        let fade = AlphaFade::fade_in(200);
        assert_eq!(fade.alpha_after(Duration::ZERO), 0.0);
        assert!((fade.alpha_after(Duration::from_millis(100)) - 0.5).abs() < 1e-6);
        assert_eq!(fade.alpha_after(Duration::from_millis(500)), 1.0);

        let out = AlphaFade::fade_out(200);
        assert_eq!(out.alpha_after(Duration::from_millis(200)), 0.0);
    }

    #[test]
    fn test_title_alpha_settles_after_fade() {
        let mut controller = CollapseVisibilityController::new();
        controller.on_offset_ratio(0.0);
        let later = Instant::now() + Duration::from_millis(ALPHA_ANIMATION_DURATION_MS + 50);
        assert_eq!(controller.title_alpha(later), 1.0);
    }
}
