//! Primitive components, their style key families, and their style sheets.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::attrs::{bool_token, compose, merge, AttributeBag};
use crate::state::{
    checked_unchecked, on_off, open_closed, toggle_membership, BinaryToggle, ControlledState,
    RangeBounds, RangeModel, SelectionMode,
};
use crate::style::{StateFlags, StyleKey, StyleSheet};

mod controls;
mod data_display;
mod navigation;
mod overlays;

pub use controls::{
    Button, Checkbox, Input, Label, RadioGroup, RadioGroupItem, Select, SelectOption, Slider,
    Switch, Textarea, Toggle, ToggleGroup, ToggleGroupItem,
};
pub use data_display::{
    Alert, AlertDescription, AlertTitle, Badge, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, Progress, Separator, Skeleton,
};
pub use navigation::{
    Accordion, AccordionContent, AccordionItem, AccordionTrigger, Tabs, TabsContent, TabsList,
    TabsTrigger,
};
pub use overlays::{Dialog, DialogClose, DialogContent, DialogTrigger, Tooltip};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Key family for primitives without a variant or size axis.
pub enum Plain {
    /// The only member; contributes no class.
    Default,
}

impl Default for Plain {
    fn default() -> Self {
        Self::Default
    }
}

impl StyleKey for Plain {
    const FAMILY: &'static str = "plain";
    const ALL: &'static [Self] = &[Self::Default];

    fn token(self) -> &'static str {
        "default"
    }

    fn class(self) -> &'static str {
        ""
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Button emphasis variants.
pub enum ButtonVariant {
    /// Filled primary action.
    Default,
    /// Destructive action.
    Destructive,
    /// Bordered action.
    Outline,
    /// Muted filled action.
    Secondary,
    /// Background-free action.
    Ghost,
    /// Inline link-styled action.
    Link,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl StyleKey for ButtonVariant {
    const FAMILY: &'static str = "button-variant";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Destructive,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Link,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Default => "ui-button--default",
            Self::Destructive => "ui-button--destructive",
            Self::Outline => "ui-button--outline",
            Self::Secondary => "ui-button--secondary",
            Self::Ghost => "ui-button--ghost",
            Self::Link => "ui-button--link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Default height and padding.
    Default,
    /// Dense button.
    Sm,
    /// Large button.
    Lg,
    /// Square icon-only button.
    Icon,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Default
    }
}

impl StyleKey for ButtonSize {
    const FAMILY: &'static str = "button-size";
    const ALL: &'static [Self] = &[Self::Default, Self::Sm, Self::Lg, Self::Icon];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Default => "ui-button--size-default",
            Self::Sm => "ui-button--sm",
            Self::Lg => "ui-button--lg",
            Self::Icon => "ui-button--icon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Badge tone variants.
pub enum BadgeVariant {
    /// Filled primary badge.
    Default,
    /// Muted badge.
    Secondary,
    /// Error/destructive badge.
    Destructive,
    /// Bordered badge.
    Outline,
}

impl Default for BadgeVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl StyleKey for BadgeVariant {
    const FAMILY: &'static str = "badge-variant";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Secondary,
        Self::Destructive,
        Self::Outline,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Default => "ui-badge--default",
            Self::Secondary => "ui-badge--secondary",
            Self::Destructive => "ui-badge--destructive",
            Self::Outline => "ui-badge--outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Toggle and toggle-group item variants.
pub enum ToggleVariant {
    /// Transparent until pressed.
    Default,
    /// Bordered.
    Outline,
}

impl Default for ToggleVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl StyleKey for ToggleVariant {
    const FAMILY: &'static str = "toggle-variant";
    const ALL: &'static [Self] = &[Self::Default, Self::Outline];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outline => "outline",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Default => "ui-toggle--default",
            Self::Outline => "ui-toggle--outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Toggle sizing tokens.
pub enum ToggleSize {
    /// Default toggle.
    Default,
    /// Dense toggle.
    Sm,
    /// Large toggle.
    Lg,
}

impl Default for ToggleSize {
    fn default() -> Self {
        Self::Default
    }
}

impl StyleKey for ToggleSize {
    const FAMILY: &'static str = "toggle-size";
    const ALL: &'static [Self] = &[Self::Default, Self::Sm, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Default => "ui-toggle--size-default",
            Self::Sm => "ui-toggle--sm",
            Self::Lg => "ui-toggle--lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Alert tone variants.
pub enum AlertVariant {
    /// Neutral callout.
    Default,
    /// Error callout.
    Destructive,
}

impl Default for AlertVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl StyleKey for AlertVariant {
    const FAMILY: &'static str = "alert-variant";
    const ALL: &'static [Self] = &[Self::Default, Self::Destructive];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Default => "ui-alert--default",
            Self::Destructive => "ui-alert--destructive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Layout axis for separators, sliders, tabs, and radio groups.
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Horizontal
    }
}

impl StyleKey for Orientation {
    const FAMILY: &'static str = "orientation";
    const ALL: &'static [Self] = &[Self::Horizontal, Self::Vertical];

    fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Horizontal => "is-horizontal",
            Self::Vertical => "is-vertical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Placement of floating content relative to its trigger.
pub enum Side {
    /// Above the trigger.
    Top,
    /// Right of the trigger.
    Right,
    /// Below the trigger.
    Bottom,
    /// Left of the trigger.
    Left,
}

impl Default for Side {
    fn default() -> Self {
        Self::Top
    }
}

impl StyleKey for Side {
    const FAMILY: &'static str = "side";
    const ALL: &'static [Self] = &[Self::Top, Self::Right, Self::Bottom, Self::Left];

    fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Top => "ui-tooltip--top",
            Self::Right => "ui-tooltip--right",
            Self::Bottom => "ui-tooltip--bottom",
            Self::Left => "ui-tooltip--left",
        }
    }
}

/// Button classes.
pub const BUTTON_STYLE: StyleSheet<ButtonVariant, ButtonSize> =
    StyleSheet::new("ui-button", &[(StateFlags::DISABLED, "ui-button--disabled")]);

/// Toggle and toggle-group item classes.
pub const TOGGLE_STYLE: StyleSheet<ToggleVariant, ToggleSize> = StyleSheet::new(
    "ui-toggle",
    &[
        (StateFlags::PRESSED, "ui-toggle--on"),
        (StateFlags::DISABLED, "ui-toggle--disabled"),
    ],
);

/// Switch classes.
pub const SWITCH_STYLE: StyleSheet<Plain, Plain> = StyleSheet::new(
    "ui-switch",
    &[
        (StateFlags::CHECKED, "ui-switch--checked"),
        (StateFlags::DISABLED, "ui-switch--disabled"),
    ],
);

/// Checkbox classes.
pub const CHECKBOX_STYLE: StyleSheet<Plain, Plain> = StyleSheet::new(
    "ui-checkbox",
    &[
        (StateFlags::CHECKED, "ui-checkbox--checked"),
        (StateFlags::DISABLED, "ui-checkbox--disabled"),
    ],
);

/// Text input and textarea classes.
pub const FIELD_STYLE: StyleSheet<Plain, Plain> =
    StyleSheet::new("ui-field", &[(StateFlags::DISABLED, "ui-field--disabled")]);

/// Select classes.
pub const SELECT_STYLE: StyleSheet<Plain, Plain> =
    StyleSheet::new("ui-select", &[(StateFlags::DISABLED, "ui-select--disabled")]);

/// Radio group classes.
pub const RADIO_GROUP_STYLE: StyleSheet<Orientation, Plain> = StyleSheet::new(
    "ui-radio-group",
    &[(StateFlags::DISABLED, "ui-radio-group--disabled")],
);

/// Radio item classes.
pub const RADIO_ITEM_STYLE: StyleSheet<Plain, Plain> = StyleSheet::new(
    "ui-radio",
    &[
        (StateFlags::CHECKED, "ui-radio--checked"),
        (StateFlags::DISABLED, "ui-radio--disabled"),
    ],
);

/// Toggle group container classes.
pub const TOGGLE_GROUP_STYLE: StyleSheet<Orientation, Plain> = StyleSheet::new(
    "ui-toggle-group",
    &[(StateFlags::DISABLED, "ui-toggle-group--disabled")],
);

/// Slider classes.
pub const SLIDER_STYLE: StyleSheet<Orientation, Plain> =
    StyleSheet::new("ui-slider", &[(StateFlags::DISABLED, "ui-slider--disabled")]);

/// Accordion item classes.
pub const ACCORDION_ITEM_STYLE: StyleSheet<Plain, Plain> = StyleSheet::new(
    "ui-accordion-item",
    &[
        (StateFlags::OPEN, "ui-accordion-item--open"),
        (StateFlags::DISABLED, "ui-accordion-item--disabled"),
    ],
);

/// Tabs root classes.
pub const TABS_STYLE: StyleSheet<Orientation, Plain> = StyleSheet::new("ui-tabs", &[]);

/// Tab trigger classes.
pub const TABS_TRIGGER_STYLE: StyleSheet<Plain, Plain> = StyleSheet::new(
    "ui-tabs-trigger",
    &[
        (StateFlags::SELECTED, "ui-tabs-trigger--active"),
        (StateFlags::DISABLED, "ui-tabs-trigger--disabled"),
    ],
);

/// Dialog content classes.
pub const DIALOG_STYLE: StyleSheet<Plain, Plain> =
    StyleSheet::new("ui-dialog", &[(StateFlags::OPEN, "ui-dialog--open")]);

/// Tooltip content classes.
pub const TOOLTIP_STYLE: StyleSheet<Side, Plain> =
    StyleSheet::new("ui-tooltip", &[(StateFlags::OPEN, "ui-tooltip--open")]);

/// Badge classes.
pub const BADGE_STYLE: StyleSheet<BadgeVariant, Plain> = StyleSheet::new("ui-badge", &[]);

/// Alert classes.
pub const ALERT_STYLE: StyleSheet<AlertVariant, Plain> = StyleSheet::new("ui-alert", &[]);

/// Separator classes.
pub const SEPARATOR_STYLE: StyleSheet<Orientation, Plain> = StyleSheet::new("ui-separator", &[]);

/// Base attributes every primitive root carries.
pub(crate) fn primitive_bag(kind: &'static str) -> AttributeBag {
    AttributeBag::new()
        .with("data-ui-primitive", "true")
        .with("data-ui-kind", kind)
}

/// Merges `own` with the caller's `class` prop and passthrough attributes for spreading.
pub(crate) fn spread(
    own: AttributeBag,
    class: Option<String>,
    attrs: Vec<(&'static str, Attribute)>,
) -> Vec<(&'static str, Attribute)> {
    merge(own, AttributeBag::from_caller(class, attrs)).into_attrs()
}

/// Attributes for purely structural parts (card sections, alert copy, ...).
pub(crate) fn static_part(
    kind: &'static str,
    base_class: &'static str,
    class: Option<String>,
    attrs: Vec<(&'static str, Attribute)>,
) -> Vec<(&'static str, Attribute)> {
    spread(primitive_bag(kind).class(base_class), class, attrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn static_part_carries_dom_contract_and_caller_class() {
        let attrs = static_part(
            "card-header",
            "ui-card-header",
            Some("px-2".to_string()),
            vec![("id", "header".into_attribute())],
        );
        let names: Vec<_> = attrs.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["class", "data-ui-primitive", "data-ui-kind", "id"]
        );
    }

    #[test]
    fn toggle_on_state_class_follows_pressed_flag() {
        let off = TOGGLE_STYLE.resolve(ToggleVariant::Default, ToggleSize::Default, StateFlags::empty());
        let on = TOGGLE_STYLE.resolve(ToggleVariant::Default, ToggleSize::Default, StateFlags::PRESSED);
        assert!(!off.contains("ui-toggle--on"));
        assert!(on.contains("ui-toggle--on"));
    }

    #[test]
    fn badge_variants_resolve_to_distinct_classes() {
        let classes: Vec<String> = BadgeVariant::ALL
            .iter()
            .map(|variant| BADGE_STYLE.resolve(*variant, Plain::Default, StateFlags::empty()))
            .collect();
        let mut deduped = classes.clone();
        deduped.dedup();
        assert_eq!(classes.len(), 4);
        assert_eq!(deduped, classes);
        assert_eq!(classes[2], "ui-badge ui-badge--destructive");
    }
}
