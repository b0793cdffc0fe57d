//! Leptos UI primitives with typed variant styling and controlled/uncontrolled state.
//!
//! Every interactive primitive accepts either a caller-owned value (`value`/`checked`/`open`
//! plus the matching `on_*_change` callback) or an initial `default_*` value it owns itself.
//! Style axes are closed enums resolved through [`StyleSheet`], and every root element carries
//! the `data-ui-primitive`/`data-ui-kind` DOM contract with caller classes and `attr:*`
//! passthrough merged in last.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod attrs;
mod primitives;
mod state;
mod style;

pub use attrs::{bool_token, compose, merge, AttributeBag};
pub use primitives::{
    Accordion, AccordionContent, AccordionItem, AccordionTrigger, Alert, AlertDescription,
    AlertTitle, AlertVariant, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card,
    CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Checkbox, Dialog,
    DialogClose, DialogContent, DialogTrigger, Input, Label, Orientation, Plain, Progress,
    RadioGroup, RadioGroupItem, Select, SelectOption, Separator, Side, Skeleton, Slider, Switch,
    Tabs, TabsContent, TabsList, TabsTrigger, Textarea, Toggle, ToggleGroup, ToggleGroupItem,
    ToggleSize, ToggleVariant, Tooltip, ACCORDION_ITEM_STYLE, ALERT_STYLE, BADGE_STYLE,
    BUTTON_STYLE, CHECKBOX_STYLE, DIALOG_STYLE, FIELD_STYLE, RADIO_GROUP_STYLE,
    RADIO_ITEM_STYLE, SELECT_STYLE, SEPARATOR_STYLE, SLIDER_STYLE, SWITCH_STYLE, TABS_STYLE,
    TABS_TRIGGER_STYLE, TOGGLE_GROUP_STYLE, TOGGLE_STYLE, TOOLTIP_STYLE,
};
pub use state::{
    checked_unchecked, on_off, open_closed, toggle_membership, BinaryToggle, ControlledState,
    RangeBounds, RangeModel, SelectionMode,
};
pub use style::{class_list, StateFlags, StyleError, StyleKey, StyleSheet};

/// Convenience imports for crates composing the primitive set.
pub mod prelude {
    pub use crate::{
        Accordion, AccordionContent, AccordionItem, AccordionTrigger, Alert, AlertDescription,
        AlertTitle, AlertVariant, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card,
        CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Checkbox,
        ControlledState, Dialog, DialogClose, DialogContent, DialogTrigger, Input, Label,
        Orientation, Progress, RadioGroup, RadioGroupItem, Select, SelectOption, SelectionMode,
        Separator, Side, Skeleton, Slider, StyleKey, Switch, Tabs, TabsContent, TabsList,
        TabsTrigger, Textarea, Toggle, ToggleGroup, ToggleGroupItem, ToggleSize, ToggleVariant,
        Tooltip,
    };
}
