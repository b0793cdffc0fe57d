//! Controlled/uncontrolled state bridge and the headless controllers built on it.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::style::StateFlags;

enum Source<T: 'static> {
    Controlled(Signal<T>),
    Uncontrolled(RwSignal<T>),
}

impl<T: 'static> Clone for Source<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Source<T> {}

/// Single source of truth for one primitive instance's interactive value.
///
/// The mode is fixed when the bridge is built: a supplied external value makes the bridge a
/// pass-through that only reports changes, otherwise the bridge owns a private cell seeded with
/// the fallback. The bridge is `Copy` so it can be captured by every handler and view closure of
/// its primitive.
pub struct ControlledState<T: 'static> {
    source: Source<T>,
    on_change: Option<Callback<T>>,
    mounted: StoredValue<bool>,
}

impl<T: 'static> Clone for ControlledState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ControlledState<T> {}

impl<T: Clone + 'static> ControlledState<T> {
    /// Picks controlled mode when `external` is present, uncontrolled mode otherwise.
    pub fn new(external: Option<MaybeSignal<T>>, on_change: Option<Callback<T>>, fallback: T) -> Self {
        match external {
            Some(value) => Self::controlled(value, on_change),
            None => Self::uncontrolled(fallback, on_change),
        }
    }

    /// Caller-owned state. `set` only forwards to `on_change`.
    pub fn controlled(value: impl Into<MaybeSignal<T>>, on_change: Option<Callback<T>>) -> Self {
        let signal = match value.into() {
            MaybeSignal::Static(value) => Signal::derive(move || value.clone()),
            MaybeSignal::Dynamic(signal) => signal,
        };
        Self {
            source: Source::Controlled(signal),
            on_change,
            mounted: store_value(true),
        }
    }

    /// Primitive-owned state seeded with `initial`. `on_change` observes without controlling.
    pub fn uncontrolled(initial: T, on_change: Option<Callback<T>>) -> Self {
        Self {
            source: Source::Uncontrolled(create_rw_signal(initial)),
            on_change,
            mounted: store_value(true),
        }
    }

    /// Whether the caller owns the value.
    pub fn is_controlled(&self) -> bool {
        matches!(self.source, Source::Controlled(_))
    }

    /// Current value, tracked by the enclosing reactive scope.
    pub fn get(&self) -> T {
        match self.source {
            Source::Controlled(signal) => signal.get(),
            Source::Uncontrolled(cell) => cell.get(),
        }
    }

    /// Current value without subscribing.
    pub fn get_untracked(&self) -> T {
        match self.source {
            Source::Controlled(signal) => signal.get_untracked(),
            Source::Uncontrolled(cell) => cell.get_untracked(),
        }
    }

    /// Read-only view of the current value.
    pub fn signal(&self) -> Signal<T> {
        match self.source {
            Source::Controlled(signal) => signal,
            Source::Uncontrolled(cell) => cell.into(),
        }
    }

    /// Requests a new value.
    ///
    /// Uncontrolled bridges write their cell first and then notify; controlled bridges only
    /// notify. Calls after [`ControlledState::unmount`] are ignored.
    pub fn set(&self, next: T) {
        if !self.is_mounted() {
            logging::warn!("ignoring state update on an unmounted primitive");
            return;
        }
        if let Source::Uncontrolled(cell) = self.source {
            if cell.try_set(next.clone()).is_some() {
                logging::warn!("ignoring state update on a disposed primitive cell");
                return;
            }
        }
        if let Some(on_change) = self.on_change {
            on_change.call(next);
        }
    }

    /// Marks the owning primitive as destroyed.
    pub fn unmount(&self) {
        let _ = self.mounted.try_set_value(false);
    }

    fn is_mounted(&self) -> bool {
        self.mounted.try_get_value().unwrap_or(false)
    }
}

/// Controller for the binary-state family (toggle, switch, checkbox, open/closed overlays).
#[derive(Clone, Copy)]
pub struct BinaryToggle {
    state: ControlledState<bool>,
    disabled: MaybeSignal<bool>,
}

impl BinaryToggle {
    /// Wraps a bridge; `disabled` gates interactive changes.
    pub fn new(state: ControlledState<bool>, disabled: MaybeSignal<bool>) -> Self {
        Self { state, disabled }
    }

    /// Underlying bridge.
    pub fn state(&self) -> ControlledState<bool> {
        self.state
    }

    /// Tracked on/off value.
    pub fn is_on(&self) -> bool {
        self.state.get()
    }

    /// Tracked disabled value.
    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    /// Flips the value. Does nothing while disabled.
    pub fn toggle(&self) {
        if self.disabled.get_untracked() {
            return;
        }
        self.state.set(!self.state.get_untracked());
    }

    /// Requests an explicit value. Does nothing while disabled.
    pub fn set(&self, on: bool) {
        if self.disabled.get_untracked() {
            return;
        }
        self.state.set(on);
    }

    /// Style flags for the current state, using `on_flag` for the "on" half.
    pub fn flags(&self, on_flag: StateFlags) -> StateFlags {
        let mut flags = StateFlags::empty();
        flags.set(on_flag, self.is_on());
        flags.set(StateFlags::DISABLED, self.is_disabled());
        flags
    }
}

/// `data-state` token for on/off primitives.
pub fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

/// `data-state` token for open/closed primitives.
pub fn open_closed(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

/// `data-state` token for checked/unchecked primitives.
pub fn checked_unchecked(checked: bool) -> &'static str {
    if checked {
        "checked"
    } else {
        "unchecked"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// How many members of a group may be selected at once.
pub enum SelectionMode {
    /// At most one member.
    #[default]
    Single,
    /// Any number of members.
    Multiple,
}

impl SelectionMode {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
        }
    }
}

/// Returns the selection that results from activating `item`.
///
/// Single mode replaces the selection with `item`; activating the selected item clears the
/// selection only when `allow_empty` is set. Multiple mode adds or removes `item` and keeps the
/// order of the remaining members.
pub fn toggle_membership(
    current: &[String],
    item: &str,
    mode: SelectionMode,
    allow_empty: bool,
) -> Vec<String> {
    let selected = current.iter().any(|value| value == item);
    match (mode, selected) {
        (SelectionMode::Single, true) if allow_empty => Vec::new(),
        (SelectionMode::Single, true) => current.to_vec(),
        (SelectionMode::Single, false) => vec![item.to_string()],
        (SelectionMode::Multiple, true) => current
            .iter()
            .filter(|value| value.as_str() != item)
            .cloned()
            .collect(),
        (SelectionMode::Multiple, false) => current
            .iter()
            .cloned()
            .chain(std::iter::once(item.to_string()))
            .collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Numeric bounds for range primitives.
pub struct RangeBounds {
    /// Lowest allowed value.
    pub min: f64,
    /// Highest allowed value.
    pub max: f64,
    /// Snap increment. Non-positive steps disable snapping.
    pub step: f64,
}

impl Default for RangeBounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

impl RangeBounds {
    /// Snaps `value` to the step grid anchored at `min` and clamps it into bounds.
    pub fn snap(&self, value: f64) -> f64 {
        let (low, high) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        let snapped = if self.step > 0.0 {
            let raw = low + ((value - low) / self.step).round() * self.step;
            round_to(raw, decimals(self.step).max(decimals(low)))
        } else {
            value
        };
        snapped.clamp(low, high)
    }

    /// Position of `value` within the bounds as a 0-100 percentage.
    pub fn percent(&self, value: f64) -> f64 {
        let span = (self.max - self.min).abs();
        if span == 0.0 {
            return 0.0;
        }
        (((value - self.min.min(self.max)) / span) * 100.0).clamp(0.0, 100.0)
    }
}

/// Fractional digits in the shortest decimal rendering of `value`.
fn decimals(value: f64) -> i32 {
    let text = value.to_string();
    let digits = text.split_once('.').map_or(0, |(_, fraction)| fraction.len());
    digits.min(15) as i32
}

// Snapped values keep only the precision the grid is declared with.
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Controller for the range family: a fixed-length sequence of coordinates.
#[derive(Clone, Copy)]
pub struct RangeModel {
    state: ControlledState<Vec<f64>>,
    bounds: RangeBounds,
}

impl RangeModel {
    /// Wraps a bridge with its bounds.
    pub fn new(state: ControlledState<Vec<f64>>, bounds: RangeBounds) -> Self {
        Self { state, bounds }
    }

    /// Underlying bridge.
    pub fn state(&self) -> ControlledState<Vec<f64>> {
        self.state
    }

    /// Bounds the coordinates are snapped into.
    pub fn bounds(&self) -> RangeBounds {
        self.bounds
    }

    /// Tracked coordinate at `index`, if any.
    pub fn coordinate(&self, index: usize) -> Option<f64> {
        self.state.get().get(index).copied()
    }

    /// Applies raw input for one coordinate and reports the whole rebuilt sequence.
    pub fn set_coordinate(&self, index: usize, raw: &str) {
        let parsed = match raw.trim().parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => parsed,
            _ => {
                logging::warn!("ignoring non-numeric range input `{raw}`");
                return;
            }
        };
        let current = self.state.get_untracked();
        if index >= current.len() {
            logging::warn!(
                "ignoring range input for thumb {index}; slider has {} thumbs",
                current.len()
            );
            return;
        }
        let snapped = self.bounds.snap(parsed);
        let next = current
            .iter()
            .enumerate()
            .map(|(position, value)| if position == index { snapped } else { *value })
            .collect();
        self.state.set(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder<T: Clone + 'static>() -> (Callback<T>, Rc<RefCell<Vec<T>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (
            Callback::new(move |value: T| sink.borrow_mut().push(value)),
            calls,
        )
    }

    #[test]
    fn controlled_bridge_only_reports() {
        let _ = create_runtime();
        let (on_change, calls) = recorder::<i32>();
        let state = ControlledState::new(Some(MaybeSignal::Static(7)), Some(on_change), 0);

        assert!(state.is_controlled());
        state.set(8);
        state.set(9);

        assert_eq!(state.get_untracked(), 7);
        assert_eq!(*calls.borrow(), vec![8, 9]);
    }

    #[test]
    fn controlled_bridge_follows_the_caller_signal() {
        let _ = create_runtime();
        let owner = create_rw_signal(String::from("a"));
        let state = ControlledState::controlled(owner, None);

        state.set("b".to_string());
        assert_eq!(state.get_untracked(), "a");

        owner.set("c".to_string());
        assert_eq!(state.get_untracked(), "c");
    }

    #[test]
    fn uncontrolled_bridge_updates_then_notifies() {
        let _ = create_runtime();
        let (on_change, calls) = recorder::<bool>();
        let state = ControlledState::new(None, Some(on_change), false);

        assert!(!state.is_controlled());
        state.set(true);

        assert!(state.get_untracked());
        assert!(state.signal().get_untracked());
        assert_eq!(*calls.borrow(), vec![true]);
    }

    #[test]
    fn uncontrolled_bridge_without_callback_still_updates() {
        let _ = create_runtime();
        let state = ControlledState::uncontrolled(vec![1.0], None);
        state.set(vec![2.0, 3.0]);
        assert_eq!(state.get_untracked(), vec![2.0, 3.0]);
    }

    #[test]
    fn set_after_unmount_is_ignored() {
        let _ = create_runtime();
        let (on_change, calls) = recorder::<bool>();
        let state = ControlledState::uncontrolled(false, Some(on_change));

        state.unmount();
        state.set(true);

        assert!(!state.get_untracked());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn uncontrolled_toggle_turns_on_once() {
        let _ = create_runtime();
        let (on_change, calls) = recorder::<bool>();
        let toggle = BinaryToggle::new(
            ControlledState::new(None, Some(on_change), false),
            MaybeSignal::Static(false),
        );

        toggle.toggle();

        assert!(toggle.is_on());
        assert_eq!(toggle.flags(StateFlags::PRESSED), StateFlags::PRESSED);
        assert_eq!(*calls.borrow(), vec![true]);
    }

    #[test]
    fn controlled_switch_keeps_caller_value() {
        let _ = create_runtime();
        let (on_change, calls) = recorder::<bool>();
        let switch = BinaryToggle::new(
            ControlledState::new(Some(MaybeSignal::Static(true)), Some(on_change), false),
            MaybeSignal::Static(false),
        );

        switch.toggle();

        assert!(switch.is_on());
        assert_eq!(*calls.borrow(), vec![false]);
    }

    #[test]
    fn disabled_toggle_ignores_activation() {
        let _ = create_runtime();
        let (on_change, calls) = recorder::<bool>();
        let toggle = BinaryToggle::new(
            ControlledState::uncontrolled(false, Some(on_change)),
            MaybeSignal::Static(true),
        );

        toggle.toggle();
        toggle.set(true);

        assert!(!toggle.is_on());
        assert_eq!(toggle.flags(StateFlags::CHECKED), StateFlags::DISABLED);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn slider_reports_whole_numeric_sequence() {
        let _ = create_runtime();
        let (on_change, calls) = recorder::<Vec<f64>>();
        let slider = RangeModel::new(
            ControlledState::new(Some(MaybeSignal::Static(vec![10.0])), Some(on_change), vec![]),
            RangeBounds {
                min: 0.0,
                max: 100.0,
                step: 1.0,
            },
        );

        slider.set_coordinate(0, "55");

        assert_eq!(*calls.borrow(), vec![vec![55.0]]);
        assert_eq!(slider.coordinate(0), Some(10.0));
    }

    #[test]
    fn slider_rebuilds_only_the_moved_thumb() {
        let _ = create_runtime();
        let slider = RangeModel::new(
            ControlledState::uncontrolled(vec![20.0, 80.0], None),
            RangeBounds {
                min: 0.0,
                max: 100.0,
                step: 5.0,
            },
        );

        slider.set_coordinate(1, "63");
        assert_eq!(slider.state().get_untracked(), vec![20.0, 65.0]);

        slider.set_coordinate(0, "-40");
        assert_eq!(slider.state().get_untracked(), vec![0.0, 65.0]);
    }

    #[test]
    fn decimal_steps_snap_onto_the_declared_grid() {
        let bounds = RangeBounds {
            min: 0.0,
            max: 1.0,
            step: 0.1,
        };
        assert_eq!(bounds.snap(0.3), 0.3);
        assert_eq!(bounds.snap(0.7), 0.7);
        assert_eq!(bounds.snap(0.26), 0.3);

        let offset = RangeBounds {
            min: 0.25,
            max: 2.0,
            step: 0.5,
        };
        assert_eq!(offset.snap(1.3), 1.25);
    }

    #[test]
    fn decimal_slider_reports_the_value_the_browser_sent() {
        let _ = create_runtime();
        let (on_change, calls) = recorder::<Vec<f64>>();
        let slider = RangeModel::new(
            ControlledState::new(Some(MaybeSignal::Static(vec![0.0])), Some(on_change), vec![]),
            RangeBounds {
                min: 0.0,
                max: 1.0,
                step: 0.1,
            },
        );

        slider.set_coordinate(0, "0.3");

        assert_eq!(*calls.borrow(), vec![vec![0.3]]);
    }

    #[test]
    fn slider_ignores_bad_input() {
        let _ = create_runtime();
        let (on_change, calls) = recorder::<Vec<f64>>();
        let slider = RangeModel::new(
            ControlledState::uncontrolled(vec![10.0], Some(on_change)),
            RangeBounds::default(),
        );

        slider.set_coordinate(0, "abc");
        slider.set_coordinate(3, "20");

        assert_eq!(slider.state().get_untracked(), vec![10.0]);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn range_percent_is_clamped() {
        let bounds = RangeBounds {
            min: 10.0,
            max: 20.0,
            step: 1.0,
        };
        assert_eq!(bounds.percent(15.0), 50.0);
        assert_eq!(bounds.percent(30.0), 100.0);
        assert_eq!(
            RangeBounds {
                min: 5.0,
                max: 5.0,
                step: 1.0
            }
            .percent(5.0),
            0.0
        );
    }

    #[test]
    fn single_selection_replaces_or_clears() {
        let current = vec!["a".to_string()];
        assert_eq!(
            toggle_membership(&current, "b", SelectionMode::Single, false),
            vec!["b".to_string()]
        );
        assert_eq!(
            toggle_membership(&current, "a", SelectionMode::Single, false),
            vec!["a".to_string()]
        );
        assert!(toggle_membership(&current, "a", SelectionMode::Single, true).is_empty());
    }

    #[test]
    fn multiple_selection_adds_and_removes_in_order() {
        let current = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(
            toggle_membership(&current, "b", SelectionMode::Multiple, true),
            vec!["a".to_string(), "c".to_string()]
        );
        assert_eq!(
            toggle_membership(&current, "d", SelectionMode::Multiple, false),
            vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string()
            ]
        );
        assert_eq!(current.len(), 3);
    }
}
