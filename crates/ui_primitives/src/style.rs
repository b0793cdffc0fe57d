//! Variant/size key families and the class resolver shared by every primitive.
//!
//! Each primitive declares its style axes as closed enums implementing [`StyleKey`]. The class
//! for a key is an exhaustive `match`, so adding a key without a class is a compile error rather
//! than an empty class at runtime. String keys coming from host configuration go through
//! [`StyleKey::from_token`] (or serde) and fail with [`StyleError::UnknownKey`].

use std::fmt;
use std::marker::PhantomData;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Style configuration errors.
pub enum StyleError {
    /// A string key does not name any member of the key family.
    #[error("unknown {family} key `{key}`")]
    UnknownKey {
        /// Key family name, for example `badge-variant`.
        family: &'static str,
        /// The rejected key.
        key: String,
    },
}

bitflags::bitflags! {
    /// Interactive state flags a primitive feeds into [`StyleSheet::resolve`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StateFlags: u8 {
        /// Toggle-style pressed state.
        const PRESSED = 1 << 0;
        /// Checkbox/switch checked state.
        const CHECKED = 1 << 1;
        /// Disclosure/overlay open state.
        const OPEN = 1 << 2;
        /// Selected item within a group.
        const SELECTED = 1 << 3;
        /// Interaction disabled.
        const DISABLED = 1 << 4;
    }
}

/// A closed family of style keys (variant, size, side, ...).
pub trait StyleKey: Copy + Eq + fmt::Debug + 'static {
    /// Human-readable family name used in errors.
    const FAMILY: &'static str;
    /// Every member of the family, in declaration order.
    const ALL: &'static [Self];

    /// Stable string token, also used for `data-ui-*` attributes and serde.
    fn token(self) -> &'static str;

    /// Class contributed by this key. May be empty only for [`Plain`].
    fn class(self) -> &'static str;

    /// Resolves a string token to a key.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownKey`] when `raw` is not the token of any member.
    fn from_token(raw: &str) -> Result<Self, StyleError> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.token() == raw)
            .ok_or_else(|| StyleError::UnknownKey {
                family: Self::FAMILY,
                key: raw.to_string(),
            })
    }
}

/// Static style table for one primitive.
#[derive(Debug)]
pub struct StyleSheet<V, S> {
    base: &'static str,
    states: &'static [(StateFlags, &'static str)],
    _keys: PhantomData<fn(V, S)>,
}

impl<V: StyleKey, S: StyleKey> StyleSheet<V, S> {
    /// Declares a sheet. An empty base class fails const evaluation.
    pub const fn new(base: &'static str, states: &'static [(StateFlags, &'static str)]) -> Self {
        assert!(!base.is_empty(), "style sheet base class must not be empty");
        Self {
            base,
            states,
            _keys: PhantomData,
        }
    }

    /// Base class of the sheet.
    pub fn base(&self) -> &'static str {
        self.base
    }

    /// Builds `base variant size state...` for the given inputs.
    ///
    /// State classes are appended in table order, so the output is stable for equal inputs.
    pub fn resolve(&self, variant: V, size: S, state: StateFlags) -> String {
        let states = self
            .states
            .iter()
            .filter(|(flag, _)| state.contains(*flag))
            .map(|(_, class)| *class);
        class_list(
            [self.base, variant.class(), size.class()]
                .into_iter()
                .chain(states),
        )
    }
}

/// Joins non-empty class parts with single spaces.
pub fn class_list<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for part in parts.into_iter().map(str::trim).filter(|part| !part.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{
        AlertVariant, BadgeVariant, ButtonSize, ButtonVariant, Orientation, Plain, Side,
        ToggleSize, ToggleVariant, BADGE_STYLE, BUTTON_STYLE, TOGGLE_STYLE,
    };
    use pretty_assertions::assert_eq;

    fn assert_sheet_total<V: StyleKey, S: StyleKey>(sheet: &StyleSheet<V, S>, state: StateFlags) {
        for variant in V::ALL {
            for size in S::ALL {
                let first = sheet.resolve(*variant, *size, state);
                let second = sheet.resolve(*variant, *size, state);
                assert!(!first.is_empty(), "{variant:?}/{size:?} resolved empty");
                assert!(first.starts_with(sheet.base()));
                assert_eq!(first, second);
            }
        }
    }

    fn assert_family_round_trips<K: StyleKey>() {
        for key in K::ALL {
            assert_eq!(K::from_token(key.token()), Ok(*key));
        }
    }

    #[test]
    fn every_declared_pair_resolves_deterministically() {
        assert_sheet_total(&BUTTON_STYLE, StateFlags::empty());
        assert_sheet_total(&BUTTON_STYLE, StateFlags::DISABLED);
        assert_sheet_total(&BADGE_STYLE, StateFlags::empty());
        assert_sheet_total(&TOGGLE_STYLE, StateFlags::PRESSED | StateFlags::DISABLED);
    }

    #[test]
    fn resolve_orders_base_variant_size_then_states() {
        let class = TOGGLE_STYLE.resolve(
            ToggleVariant::Outline,
            ToggleSize::Sm,
            StateFlags::DISABLED | StateFlags::PRESSED,
        );
        assert_eq!(
            class,
            "ui-toggle ui-toggle--outline ui-toggle--sm ui-toggle--on ui-toggle--disabled"
        );
    }

    #[test]
    fn plain_axes_are_skipped() {
        let sheet: StyleSheet<Plain, Plain> =
            StyleSheet::new("ui-skeleton", &[(StateFlags::OPEN, "is-open")]);
        assert_eq!(sheet.resolve(Plain::Default, Plain::Default, StateFlags::empty()), "ui-skeleton");
        assert_eq!(
            sheet.resolve(Plain::Default, Plain::Default, StateFlags::OPEN),
            "ui-skeleton is-open"
        );
    }

    #[test]
    fn every_family_round_trips_its_tokens() {
        assert_family_round_trips::<ButtonVariant>();
        assert_family_round_trips::<ButtonSize>();
        assert_family_round_trips::<BadgeVariant>();
        assert_family_round_trips::<ToggleVariant>();
        assert_family_round_trips::<ToggleSize>();
        assert_family_round_trips::<AlertVariant>();
        assert_family_round_trips::<Orientation>();
        assert_family_round_trips::<Side>();
        assert_family_round_trips::<Plain>();
    }

    #[test]
    fn undeclared_token_is_a_configuration_error() {
        let err = BadgeVariant::from_token("purple").unwrap_err();
        assert_eq!(
            err,
            StyleError::UnknownKey {
                family: "badge-variant",
                key: "purple".to_string(),
            }
        );
        assert_eq!(err.to_string(), "unknown badge-variant key `purple`");
    }

    #[test]
    fn serde_tokens_match_style_tokens() {
        for variant in ButtonVariant::ALL {
            let encoded = serde_json::to_string(variant).expect("serialize");
            assert_eq!(encoded, format!("\"{}\"", variant.token()));
        }
        assert!(serde_json::from_str::<ButtonSize>("\"xl\"").is_err());
        assert_eq!(
            serde_json::from_str::<Side>("\"bottom\"").expect("deserialize"),
            Side::Bottom
        );
    }

    #[test]
    fn class_list_drops_blank_parts() {
        assert_eq!(class_list(["a", "", "  ", " b ", "c"]), "a b c");
        assert_eq!(class_list(Vec::<&str>::new()), "");
    }
}
