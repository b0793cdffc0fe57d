//! Attribute merging, handler composition, and the class helpers primitives share.
//!
//! Every primitive builds an [`AttributeBag`] for its own computed attributes, turns the caller's
//! `class` prop and `attr:*` passthrough into a second bag with [`AttributeBag::from_caller`],
//! and spreads [`merge`]d output onto its root element. Classes concatenate with the caller's
//! parts last; every other attribute is last-write-wins with the caller writing last.

use leptos::*;

/// Ordered attribute list plus a separately tracked class list.
#[derive(Clone, Default)]
pub struct AttributeBag {
    classes: Vec<Attribute>,
    attrs: Vec<(&'static str, Attribute)>,
}

impl AttributeBag {
    /// Empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits caller input into class parts and named attributes.
    ///
    /// The `class` prop comes first, then any `attr:class` passthrough entries in order.
    pub fn from_caller(class: Option<String>, attrs: Vec<(&'static str, Attribute)>) -> Self {
        let mut bag = Self::new();
        if let Some(class) = class {
            bag.classes.push(class.into_attribute());
        }
        for (name, value) in attrs {
            if name == "class" {
                bag.classes.push(value);
            } else {
                bag.set(name, value);
            }
        }
        bag
    }

    /// Sets `name`, replacing an earlier value in place.
    pub fn set(&mut self, name: &'static str, value: impl IntoAttribute) -> &mut Self {
        let value = value.into_attribute();
        match self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Builder form of [`AttributeBag::set`].
    pub fn with(mut self, name: &'static str, value: impl IntoAttribute) -> Self {
        self.set(name, value);
        self
    }

    /// Appends a class part. Reactive parts are re-evaluated on every read.
    pub fn class(mut self, part: impl IntoAttribute) -> Self {
        self.classes.push(part.into_attribute());
        self
    }

    /// Raw value of `name`.
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attrs
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value)
    }

    /// Current text of `name`, evaluating reactive values. `None` when absent or unset.
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).and_then(attribute_text)
    }

    /// Current class string, evaluating reactive parts.
    pub fn class_string(&self) -> String {
        join_classes(&self.classes)
    }

    /// Named attributes in insertion order, without the class list.
    pub fn names(&self) -> Vec<&'static str> {
        self.attrs.iter().map(|(name, _)| *name).collect()
    }

    /// Flattens the bag for element spreading. The class list becomes one reactive `class`.
    pub fn into_attrs(self) -> Vec<(&'static str, Attribute)> {
        let Self { classes, mut attrs } = self;
        if !classes.is_empty() {
            attrs.insert(
                0,
                ("class", Attribute::Fn(std::rc::Rc::new(move || {
                    Attribute::String(join_classes(&classes).into())
                }))),
            );
        }
        attrs
    }
}

/// Combines a primitive's own attributes with the caller's.
///
/// Class parts are `own` followed by `caller`. Named attributes keep `own`'s order, caller
/// entries overwrite on name collisions, and caller-only entries are appended.
pub fn merge(own: AttributeBag, caller: AttributeBag) -> AttributeBag {
    let AttributeBag { mut classes, attrs } = own;
    let mut merged = AttributeBag {
        classes: Vec::new(),
        attrs,
    };
    classes.extend(caller.classes);
    merged.classes = classes;
    for (name, value) in caller.attrs {
        merged.set(name, value);
    }
    merged
}

/// Runs the primitive's handler, then the caller's, for every event.
///
/// Neither handler can skip the other.
pub fn compose<E: Clone + 'static>(own: Callback<E>, caller: Option<Callback<E>>) -> Callback<E> {
    Callback::new(move |event: E| {
        own.call(event.clone());
        if let Some(caller) = caller {
            caller.call(event);
        }
    })
}

/// `"true"`/`"false"` token for `data-*` and `aria-*` attributes.
pub fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn attribute_text(value: &Attribute) -> Option<String> {
    match value {
        Attribute::String(text) => Some(text.to_string()),
        Attribute::Fn(f) => attribute_text(&f()),
        Attribute::Option(text) => text.as_ref().map(|text| text.to_string()),
        Attribute::Bool(true) => Some(String::new()),
        Attribute::Bool(false) => None,
    }
}

fn join_classes(parts: &[Attribute]) -> String {
    let texts: Vec<String> = parts.iter().filter_map(attribute_text).collect();
    crate::style::class_list(texts.iter().map(String::as_str))
}
