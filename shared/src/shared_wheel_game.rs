use std::f64::consts::{PI, TAU};

use log::{debug, info};
use rand::Rng;

use crate::preferences::{self, PreferenceStore};
use crate::theme::Theme;
use crate::validation::normalize_label;

// Constants for the spin animation
pub const SPIN_DURATION_MS: f64 = 3500.0;
pub const MIN_EXTRA_TURNS: u32 = 3;
pub const MAX_EXTRA_TURNS: u32 = 5;

/// Angle of the fixed pointer: straight up in canvas coordinates (y grows downward).
pub const POINTER_ANGLE: f64 = -PI / 2.0;

// Easing function for smooth deceleration
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Angular width of one slice on a wheel with `count` slices.
pub fn slice_width(count: usize) -> f64 {
    TAU / count as f64
}

/// Index of the slice sitting under the pointer when the wheel is rotated by `rotation`.
///
/// Slice `i` covers `[rotation + i * w, rotation + (i + 1) * w)`. This is the same
/// layout the renderer draws, so the answer always matches what is on screen.
pub fn index_under_pointer(rotation: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let relative = (POINTER_ANGLE - rotation).rem_euclid(TAU);
    let index = (relative / slice_width(count)).floor() as usize;
    // rem_euclid may round up to exactly TAU
    Some(index.min(count - 1))
}

/// Rotation in `[0, 2π)` that puts the centre of slice `index` under the pointer.
pub fn resting_offset(index: usize, count: usize) -> f64 {
    (POINTER_ANGLE - (index as f64 + 0.5) * slice_width(count)).rem_euclid(TAU)
}

/// One frame of a spin: where the wheel is and whether it has come to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinFrame {
    pub angle: f64,
    pub finished: bool,
}

/// An active spin, from the trigger until the wheel stops.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinSession {
    pub start_angle: f64,
    pub target_angle: f64,
    pub started_at: f64,
    pub duration_ms: f64,
    pub target_index: usize,
    pub extra_turns: u32,
}

impl SpinSession {
    pub fn new(
        start_angle: f64,
        started_at: f64,
        target_index: usize,
        count: usize,
        extra_turns: u32,
    ) -> Self {
        let final_rotation = TAU * extra_turns as f64 + resting_offset(target_index, count);
        // Measured from the start of the current turn so the wheel only moves forward
        let total_rotation = final_rotation - start_angle.rem_euclid(TAU);

        Self {
            start_angle,
            target_angle: start_angle + total_rotation,
            started_at,
            duration_ms: SPIN_DURATION_MS,
            target_index,
            extra_turns,
        }
    }

    /// Advances the animation to `elapsed_ms` after the spin started.
    pub fn step(&self, elapsed_ms: f64) -> SpinFrame {
        let progress = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        if progress >= 1.0 {
            return SpinFrame {
                angle: self.target_angle,
                finished: true,
            };
        }

        let eased = ease_out_cubic(progress);
        SpinFrame {
            angle: self.start_angle + (self.target_angle - self.start_angle) * eased,
            finished: false,
        }
    }
}

/// What the host scheduler should do after a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinStep {
    /// No spin is running.
    Idle,
    /// Request another frame.
    Continue,
    /// The wheel stopped on this label.
    Done(String),
}

/// Owns the labels, rotation and theme of one wheel, plus the spin in progress.
pub struct WheelController<S: PreferenceStore> {
    labels: Vec<String>,
    rotation: f64,
    theme: Theme,
    session: Option<SpinSession>,
    store: S,
}

impl<S: PreferenceStore> WheelController<S> {
    /// Restores labels and theme from `store`; missing or broken entries fall back to defaults.
    pub fn load(store: S) -> Self {
        let labels = preferences::load_labels(&store);
        let theme = preferences::load_theme(&store);
        debug!("Loaded {} labels, {} theme", labels.len(), theme);

        Self {
            labels,
            rotation: 0.0,
            theme,
            session: None,
            store,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_spinning(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&SpinSession> {
        self.session.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Label under the pointer at the current rotation.
    pub fn label_under_pointer(&self) -> Option<&str> {
        index_under_pointer(self.rotation, self.labels.len()).map(|i| self.labels[i].as_str())
    }

    /// Appends a label. Returns false if the text is blank or a spin is running.
    pub fn add_label(&mut self, text: &str) -> bool {
        if self.is_spinning() {
            return false;
        }
        let Some(label) = normalize_label(text) else {
            return false;
        };

        debug!("Adding label {:?}", label);
        self.labels.push(label);
        preferences::save_labels(&mut self.store, &self.labels);
        true
    }

    /// Removes the label at `index`. Returns false if out of range or a spin is running.
    pub fn remove_label(&mut self, index: usize) -> bool {
        if self.is_spinning() || index >= self.labels.len() {
            return false;
        }

        let removed = self.labels.remove(index);
        debug!("Removed label {:?}", removed);
        preferences::save_labels(&mut self.store, &self.labels);
        true
    }

    /// Flips the theme. Allowed mid-spin since it only changes colours.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        preferences::save_theme(&mut self.store, self.theme);
        debug!("Theme switched to {}", self.theme);
        self.theme
    }

    pub fn spin(&mut self, now: f64) -> bool {
        self.spin_with(&mut rand::thread_rng(), now)
    }

    /// Starts a spin with a uniformly chosen target and 3 to 5 extra turns.
    pub fn spin_with<R: Rng>(&mut self, rng: &mut R, now: f64) -> bool {
        if self.is_spinning() || self.labels.is_empty() {
            return false;
        }
        let target_index = rng.gen_range(0..self.labels.len());
        let extra_turns = rng.gen_range(MIN_EXTRA_TURNS..=MAX_EXTRA_TURNS);
        self.spin_to(target_index, extra_turns, now)
    }

    /// Starts a spin that will land on `target_index`.
    pub fn spin_to(&mut self, target_index: usize, extra_turns: u32, now: f64) -> bool {
        if self.is_spinning() || target_index >= self.labels.len() {
            return false;
        }

        info!(
            "Spinning to slice {} of {} with {} extra turns",
            target_index,
            self.labels.len(),
            extra_turns
        );
        self.session = Some(SpinSession::new(
            self.rotation,
            now,
            target_index,
            self.labels.len(),
            extra_turns,
        ));
        true
    }

    /// Advances the running spin to timestamp `now` (milliseconds, same clock as `spin`).
    pub fn step(&mut self, now: f64) -> SpinStep {
        let Some(session) = self.session.as_ref() else {
            return SpinStep::Idle;
        };

        let frame = session.step(now - session.started_at);
        self.rotation = frame.angle;
        if !frame.finished {
            return SpinStep::Continue;
        }

        self.session = None;
        match self.label_under_pointer() {
            Some(label) => {
                info!("Wheel stopped on {:?}", label);
                SpinStep::Done(label.to_string())
            }
            None => SpinStep::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LABELS_KEY;
    use crate::preferences::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn controller_with(labels: &[&str]) -> WheelController<MemoryStore> {
        let saved = serde_json::to_string(labels).unwrap();
        WheelController::load(MemoryStore::new().with_entry(LABELS_KEY, &saved))
    }

    fn run_to_completion(controller: &mut WheelController<MemoryStore>, start: f64) -> Vec<SpinStep> {
        let mut steps = Vec::new();
        let mut now = start;
        loop {
            now += 16.0;
            let step = controller.step(now);
            let done = step != SpinStep::Continue;
            steps.push(step);
            if done {
                return steps;
            }
        }
    }

    #[test]
    fn test_ease_out_cubic_bounds() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);

        let mut previous = ease_out_cubic(0.0);
        for i in 1..=1000 {
            let current = ease_out_cubic(i as f64 / 1000.0);
            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn test_resting_angle_matches_target_for_all_sizes() {
        for count in 1..=50 {
            let labels: Vec<String> = (0..count).map(|i| format!("label-{}", i)).collect();
            for target in 0..count {
                let session = SpinSession::new(0.0, 0.0, target, count, MIN_EXTRA_TURNS);
                let resting = session.step(SPIN_DURATION_MS).angle;
                let landed = index_under_pointer(resting, count).unwrap();
                assert_eq!(labels[landed], labels[target], "count {} target {}", count, target);
            }
        }
    }

    #[test]
    fn test_targeting_holds_from_any_start_angle() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in 1..=50 {
            for target in 0..count {
                let start = rng.gen_range(0.0..500.0);
                let turns = rng.gen_range(MIN_EXTRA_TURNS..=MAX_EXTRA_TURNS);
                let session = SpinSession::new(start, 0.0, target, count, turns);
                assert_eq!(index_under_pointer(session.target_angle, count), Some(target));
            }
        }
    }

    #[test]
    fn test_extra_turns_do_not_change_landing() {
        let a = SpinSession::new(1.25, 0.0, 2, 7, 3);
        let b = SpinSession::new(1.25, 0.0, 2, 7, 5);
        let delta = b.target_angle - a.target_angle;
        assert!((delta - 2.0 * TAU).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_monotonic_and_exact_at_end() {
        let session = SpinSession::new(4.2, 1000.0, 3, 8, 4);
        let mut previous = session.step(0.0).angle;
        assert_eq!(previous, session.start_angle);

        for ms in (0..=4000).step_by(10) {
            let frame = session.step(ms as f64);
            assert!(frame.angle >= previous);
            previous = frame.angle;
        }

        let end = session.step(SPIN_DURATION_MS);
        assert!(end.finished);
        assert_eq!(end.angle, session.target_angle);
        assert_eq!(session.step(SPIN_DURATION_MS * 2.0).angle, session.target_angle);
        assert!(!session.step(SPIN_DURATION_MS - 1.0).finished);
    }

    #[test]
    fn test_early_timestamp_clamps_to_start() {
        let session = SpinSession::new(2.0, 500.0, 0, 3, 3);
        let frame = session.step(-12.0);
        assert_eq!(frame.angle, 2.0);
        assert!(!frame.finished);
    }

    #[test]
    fn test_forced_spin_lands_on_no() {
        let mut controller = controller_with(&["Yes", "No", "Maybe"]);
        assert!(controller.spin_to(1, 4, 0.0));
        let steps = run_to_completion(&mut controller, 0.0);

        assert_eq!(steps.last(), Some(&SpinStep::Done("No".to_string())));
        assert!(!controller.is_spinning());

        let width = slice_width(3);
        let offset = (POINTER_ANGLE - controller.rotation()).rem_euclid(TAU);
        assert!((offset - 1.5 * width).abs() < 1e-9);
        assert_eq!(controller.label_under_pointer(), Some("No"));
    }

    #[test]
    fn test_spin_on_empty_wheel_is_noop() {
        let mut controller = controller_with(&[]);
        assert!(!controller.spin(0.0));
        assert!(!controller.is_spinning());
        assert_eq!(controller.rotation(), 0.0);
        assert_eq!(controller.step(100.0), SpinStep::Idle);
    }

    #[test]
    fn test_second_spin_ignored_while_running() {
        let mut controller = controller_with(&["A", "B", "C", "D"]);
        let mut rng = StdRng::seed_from_u64(42);
        assert!(controller.spin_with(&mut rng, 0.0));
        let session = controller.session().cloned();
        assert!(!controller.spin_with(&mut rng, 5.0));
        assert_eq!(controller.session().cloned(), session);

        let steps = run_to_completion(&mut controller, 0.0);
        let results = steps.iter().filter(|s| matches!(s, SpinStep::Done(_))).count();
        assert_eq!(results, 1);
        assert_eq!(controller.step(10_000.0), SpinStep::Idle);
    }

    #[test]
    fn test_consecutive_spins_keep_rotating_forward() {
        let mut controller = controller_with(&["A", "B", "C"]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut clock = 0.0;
        let mut previous = controller.rotation();

        for _ in 0..5 {
            assert!(controller.spin_with(&mut rng, clock));
            let target = controller.session().map(|s| s.target_index).unwrap();
            let steps = run_to_completion(&mut controller, clock);
            clock += SPIN_DURATION_MS + 100.0;

            assert!(controller.rotation() > previous);
            previous = controller.rotation();
            let expected = controller.labels()[target].clone();
            assert_eq!(steps.last(), Some(&SpinStep::Done(expected)));
        }
    }

    #[test]
    fn test_seeded_spins_cover_every_label() {
        let mut controller = controller_with(&["A", "B", "C"]);
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 3];
        let mut clock = 0.0;

        for _ in 0..60 {
            controller.spin_with(&mut rng, clock);
            let session = controller.session().cloned().unwrap();
            assert!((MIN_EXTRA_TURNS..=MAX_EXTRA_TURNS).contains(&session.extra_turns));
            seen[session.target_index] = true;
            clock += SPIN_DURATION_MS;
            controller.step(clock);
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_add_label_persists() {
        let mut controller = controller_with(&["Yes", "No", "Maybe"]);
        assert!(controller.add_label("Pizza"));
        assert_eq!(controller.labels().len(), 4);
        assert_eq!(controller.labels()[3], "Pizza");

        let reloaded = WheelController::load(controller.store().clone());
        assert_eq!(reloaded.labels(), controller.labels());
    }

    #[test]
    fn test_blank_label_rejected() {
        let mut controller = controller_with(&["Yes"]);
        assert!(!controller.add_label("   "));
        assert_eq!(controller.labels(), ["Yes".to_string()]);
        assert!(controller.store().get(LABELS_KEY).is_some());
    }

    #[test]
    fn test_loaded_wheel_has_no_blank_slices() {
        let store = MemoryStore::new().with_entry(LABELS_KEY, r#"["", "   ", "Tacos"]"#);
        let mut controller = WheelController::load(store);
        assert_eq!(controller.labels(), ["Tacos".to_string()]);

        assert!(controller.spin_to(0, 3, 0.0));
        let steps = run_to_completion(&mut controller, 0.0);
        assert_eq!(steps.last(), Some(&SpinStep::Done("Tacos".to_string())));
    }

    #[test]
    fn test_list_locked_during_spin() {
        let mut controller = controller_with(&["Yes", "No"]);
        assert!(controller.spin_to(0, 3, 0.0));
        assert!(!controller.add_label("Pizza"));
        assert!(!controller.remove_label(0));
        assert_eq!(controller.labels().len(), 2);

        // Theme still toggles mid-spin
        assert_eq!(controller.toggle_theme(), Theme::Dark);

        run_to_completion(&mut controller, 0.0);
        assert!(controller.remove_label(0));
        assert_eq!(controller.labels(), ["No".to_string()]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut controller = controller_with(&["Yes", "No"]);
        assert!(!controller.remove_label(2));
        assert_eq!(controller.labels().len(), 2);
    }

    #[test]
    fn test_theme_toggle_persists() {
        let mut controller = controller_with(&["Yes"]);
        assert_eq!(controller.theme(), Theme::Light);
        controller.toggle_theme();
        let reloaded = WheelController::load(controller.store().clone());
        assert_eq!(reloaded.theme(), Theme::Dark);
    }
}
