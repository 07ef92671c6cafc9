//! # Fold Kinematics Engine
//!
//! Maps a single assembly-progress scalar in [0, 1] to per-panel rotation
//! angles for the folding animation.
//!
//! Assembly is decomposed into five ordered fold events, each ramping over
//! its own sub-interval of the progress range so folds read as sequential
//! rather than simultaneous, approximating manual assembly order: side
//! panels first, then the glue tab, then the top/bottom flaps. The
//! choreography is a hand-tuned table, not a physical necessity.
//!
//! The mapping is pure and stateless: identical progress always yields
//! identical angles, so scrubbing, reversal, and replay are free of
//! hysteresis.
//!
//! ## Example
//!
//! ```rust
//! use carton_core::calculations::folding::compute_angles;
//!
//! let flat = compute_angles(0.0);
//! assert_eq!(flat.side_fold_a, 0.0);
//!
//! let closed = compute_angles(1.0);
//! assert_eq!(closed.top_bottom_flaps, std::f64::consts::FRAC_PI_2);
//! ```

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

/// One fold event in the assembly choreography.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldEvent {
    /// Panel name, for display and debugging
    pub name: &'static str,
    /// Progress value at which this fold begins
    pub start: f64,
    /// Ramp rate; the fold completes over a window of width 1/rate
    pub rate: f64,
}

/// The assembly choreography: five fold events with fixed start offsets
/// and rates. Side folds overlap by design; the flaps ramp last over a
/// slightly narrower window.
pub const FOLD_SCHEDULE: [FoldEvent; 5] = [
    FoldEvent {
        name: "side_fold_a",
        start: 0.0,
        rate: 4.2,
    },
    FoldEvent {
        name: "side_fold_b",
        start: 0.2,
        rate: 4.2,
    },
    FoldEvent {
        name: "side_fold_c",
        start: 0.4,
        rate: 4.2,
    },
    FoldEvent {
        name: "glue_tab",
        start: 0.6,
        rate: 4.2,
    },
    FoldEvent {
        name: "top_bottom_flaps",
        start: 0.8,
        rate: 5.0,
    },
];

/// Progress added per playback tick (the external timer fires the ticks)
pub const PLAYBACK_STEP: f64 = 0.005;

/// Progress added or removed per manual step
pub const MANUAL_STEP: f64 = 0.05;

/// Per-panel rotation angles in radians, each in [0, pi/2].
///
/// Derived from progress on every call, never cached or mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelAngles {
    /// First wraparound side panel
    pub side_fold_a: f64,
    /// Second wraparound side panel
    pub side_fold_b: f64,
    /// Third wraparound side panel
    pub side_fold_c: f64,
    /// Manufacturing seam tab
    pub glue_tab: f64,
    /// All top and bottom closing flaps (folded together)
    pub top_bottom_flaps: f64,
}

impl PanelAngles {
    /// Angles in schedule order, for uniform consumption by a panel
    /// hierarchy builder.
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.side_fold_a,
            self.side_fold_b,
            self.side_fold_c,
            self.glue_tab,
            self.top_bottom_flaps,
        ]
    }
}

/// Linear ramp for one fold event, clamped to [0, pi/2].
///
/// The window end is checked directly rather than relying on the clamp:
/// `(1.0 - 0.8) * 5.0` lands an ulp below 1.0 in f64, and the fully-closed
/// box must report exactly pi/2.
fn ramp(progress: f64, event: &FoldEvent) -> f64 {
    if progress >= event.start + 1.0 / event.rate {
        return FRAC_PI_2;
    }
    ((progress - event.start) * event.rate).clamp(0.0, 1.0) * FRAC_PI_2
}

/// Compute all panel angles for the given assembly progress.
///
/// Progress outside [0, 1] is clamped here; defensive clamping is part of
/// the contract since progress arrives from an external interaction layer.
/// Every angle is a monotonically non-decreasing function of progress:
/// all zero at 0 (flat), all pi/2 at 1 (fully closed).
pub fn compute_angles(progress: f64) -> PanelAngles {
    let p = progress.clamp(0.0, 1.0);
    let [side_fold_a, side_fold_b, side_fold_c, glue_tab, top_bottom_flaps] =
        [0, 1, 2, 3, 4].map(|i| ramp(p, &FOLD_SCHEDULE[i]));

    PanelAngles {
        side_fold_a,
        side_fold_b,
        side_fold_c,
        glue_tab,
        top_bottom_flaps,
    }
}

/// Playback transition rules for the assembly animation.
///
/// The core owns no timer; an external loop calls [`FoldPlayback::tick`] on
/// its own cadence while `playing` is set. All transitions are plain value
/// updates, so stopping playback is simply "stop calling tick" and
/// re-entry is idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FoldPlayback {
    /// Assembly progress in [0, 1]
    pub progress: f64,
    /// Whether an external timer should keep advancing progress
    pub playing: bool,
}

impl FoldPlayback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one playback tick. Clamps at 1.0 and stops playing exactly
    /// at completion. No-op while paused.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.playing = false;
            return;
        }
        self.progress = (self.progress + PLAYBACK_STEP).min(1.0);
    }

    /// Step forward by the manual increment; always cancels playback.
    pub fn step_forward(&mut self) {
        self.progress = (self.progress + MANUAL_STEP).min(1.0);
        self.playing = false;
    }

    /// Step backward by the manual increment; always cancels playback.
    pub fn step_back(&mut self) {
        self.progress = (self.progress - MANUAL_STEP).max(0.0);
        self.playing = false;
    }

    /// Jump to an arbitrary progress value (scrubbing); cancels playback.
    pub fn seek(&mut self, progress: f64) {
        self.progress = progress.clamp(0.0, 1.0);
        self.playing = false;
    }

    /// Return to flat and cancel playback.
    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.playing = false;
    }

    /// Toggle play/pause.
    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Angles for the current progress.
    pub fn angles(&self) -> PanelAngles {
        compute_angles(self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_at_zero() {
        let angles = compute_angles(0.0);
        assert_eq!(angles.as_array(), [0.0; 5]);
    }

    #[test]
    fn test_closed_at_one() {
        let angles = compute_angles(1.0);
        for angle in angles.as_array() {
            assert_eq!(angle, FRAC_PI_2);
        }
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(compute_angles(-0.5), compute_angles(0.0));
        assert_eq!(compute_angles(1.7), compute_angles(1.0));
        assert_eq!(compute_angles(f64::NEG_INFINITY), compute_angles(0.0));
    }

    #[test]
    fn test_monotonicity() {
        let samples = 400;
        let mut previous = compute_angles(0.0).as_array();
        for i in 1..=samples {
            let p = i as f64 / samples as f64;
            let current = compute_angles(p).as_array();
            for (slot, (prev, curr)) in previous.iter().zip(current.iter()).enumerate() {
                assert!(
                    curr >= prev,
                    "angle {} decreased between progress steps near p={}",
                    FOLD_SCHEDULE[slot].name,
                    p
                );
            }
            previous = current;
        }
    }

    #[test]
    fn test_idempotence_bit_identical() {
        for p in [0.0, 0.137, 0.25, 0.61, 0.83, 1.0] {
            let a = compute_angles(p);
            let b = compute_angles(p);
            for (x, y) in a.as_array().iter().zip(b.as_array().iter()) {
                assert_eq!(x.to_bits(), y.to_bits());
            }
        }
    }

    #[test]
    fn test_folds_are_sequential() {
        // Mid-assembly: the first side fold is done before the glue tab
        // starts, and the flaps have not moved yet.
        let angles = compute_angles(0.5);
        assert_eq!(angles.side_fold_a, FRAC_PI_2);
        assert!(angles.side_fold_c > 0.0 && angles.side_fold_c < FRAC_PI_2);
        assert_eq!(angles.glue_tab, 0.0);
        assert_eq!(angles.top_bottom_flaps, 0.0);
    }

    #[test]
    fn test_ramp_window_widths() {
        // Each side fold completes 1/4.2 after its start; the flaps 1/5
        // after theirs.
        let side_done = 0.2 + 1.0 / 4.2;
        assert!(compute_angles(side_done - 0.01).side_fold_b < FRAC_PI_2);
        assert_eq!(compute_angles(side_done + 0.001).side_fold_b, FRAC_PI_2);

        let flaps_done: f64 = 0.8 + 1.0 / 5.0;
        assert!((flaps_done - 1.0).abs() < 1e-12);
        assert!(compute_angles(0.99).top_bottom_flaps < FRAC_PI_2);
    }

    #[test]
    fn test_playback_tick_advances_and_stops_at_one() {
        let mut playback = FoldPlayback {
            progress: 0.0,
            playing: true,
        };
        playback.tick();
        assert_eq!(playback.progress, PLAYBACK_STEP);
        assert!(playback.playing);

        playback.progress = 1.0;
        playback.tick();
        assert_eq!(playback.progress, 1.0);
        assert!(!playback.playing);
    }

    #[test]
    fn test_playback_tick_noop_when_paused() {
        let mut playback = FoldPlayback::new();
        playback.tick();
        assert_eq!(playback.progress, 0.0);
    }

    #[test]
    fn test_playback_runs_to_completion() {
        let mut playback = FoldPlayback {
            progress: 0.0,
            playing: true,
        };
        for _ in 0..500 {
            playback.tick();
        }
        assert_eq!(playback.progress, 1.0);
        assert!(!playback.playing);
    }

    #[test]
    fn test_manual_step_cancels_playback() {
        let mut playback = FoldPlayback {
            progress: 0.5,
            playing: true,
        };
        playback.step_forward();
        assert_eq!(playback.progress, 0.55);
        assert!(!playback.playing);

        playback.playing = true;
        playback.step_back();
        assert_eq!(playback.progress, 0.5);
        assert!(!playback.playing);
    }

    #[test]
    fn test_manual_step_clamps() {
        let mut playback = FoldPlayback {
            progress: 0.98,
            playing: false,
        };
        playback.step_forward();
        assert_eq!(playback.progress, 1.0);

        playback.progress = 0.02;
        playback.step_back();
        assert_eq!(playback.progress, 0.0);
    }

    #[test]
    fn test_seek_and_reset() {
        let mut playback = FoldPlayback {
            progress: 0.4,
            playing: true,
        };
        playback.seek(2.0);
        assert_eq!(playback.progress, 1.0);
        assert!(!playback.playing);

        playback.playing = true;
        playback.reset();
        assert_eq!(playback.progress, 0.0);
        assert!(!playback.playing);
    }

    #[test]
    fn test_serialization() {
        let angles = compute_angles(0.42);
        let json = serde_json::to_string(&angles).unwrap();
        let roundtrip: PanelAngles = serde_json::from_str(&json).unwrap();
        assert_eq!(angles, roundtrip);
    }
}
