use super::*;

fn disabled_flags(disabled: bool) -> StateFlags {
    if disabled {
        StateFlags::DISABLED
    } else {
        StateFlags::empty()
    }
}

// Controlled primitives put the DOM back in line with the caller's value after the browser has
// already applied the user's edit.
fn resync_input(ev: &web_sys::Event, value: &str) {
    event_target::<web_sys::HtmlInputElement>(ev).set_value(value);
}

fn resync_textarea(ev: &web_sys::Event, value: &str) {
    event_target::<web_sys::HtmlTextAreaElement>(ev).set_value(value);
}

fn resync_select(ev: &web_sys::Event, value: &str) {
    event_target::<web_sys::HtmlSelectElement>(ev).set_value(value);
}

fn resync_checked(ev: &web_sys::Event, checked: bool) {
    event_target::<web_sys::HtmlInputElement>(ev).set_checked(checked);
}

/// Click handler shared by the two-state buttons: flip first, then the caller's handler.
fn toggle_activation<E: Clone + 'static>(
    control: BinaryToggle,
    on_click: Option<Callback<E>>,
) -> Callback<E> {
    compose(Callback::new(move |_: E| control.toggle()), on_click)
}

fn format_coordinate(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[component]
/// Native button with variant and size styling.
pub fn Button(
    #[prop(default = ButtonVariant::Default)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Default)] size: ButtonSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let own = primitive_bag("button")
        .class(move || BUTTON_STYLE.resolve(variant, size, disabled_flags(disabled.get())))
        .with("data-ui-variant", variant.token())
        .with("data-ui-size", size.token())
        .with("data-disabled", move || bool_token(disabled.get()));
    let attrs = spread(own, class, attrs);

    view! {
        <button
            type=button_type.unwrap_or("button")
            node_ref={node_ref}
            disabled=move || disabled.get()
            {..attrs}
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Two-state button exposing its state through `aria-pressed`.
pub fn Toggle(
    #[prop(default = ToggleVariant::Default)] variant: ToggleVariant,
    #[prop(default = ToggleSize::Default)] size: ToggleSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] pressed: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_pressed: bool,
    #[prop(optional)] on_pressed_change: Option<Callback<bool>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let control = BinaryToggle::new(
        ControlledState::new(pressed, on_pressed_change, default_pressed),
        disabled,
    );
    on_cleanup(move || control.state().unmount());

    let own = primitive_bag("toggle")
        .class(move || TOGGLE_STYLE.resolve(variant, size, control.flags(StateFlags::PRESSED)))
        .with("data-ui-variant", variant.token())
        .with("data-ui-size", size.token())
        .with("data-state", move || on_off(control.is_on()))
        .with("aria-pressed", move || bool_token(control.is_on()))
        .with("data-disabled", move || bool_token(control.is_disabled()));
    let attrs = spread(own, class, attrs);
    let on_click = toggle_activation(control, on_click);

    view! {
        <button
            type="button"
            node_ref={node_ref}
            disabled=move || disabled.get()
            {..attrs}
            on:click=move |ev| on_click.call(ev)
        >
            {children()}
        </button>
    }
}

#[component]
/// On/off switch rendered as a `role="switch"` button with a track and thumb.
///
/// Space and Enter go through the native button activation, so keyboard and pointer share the
/// composed click handler.
pub fn Switch(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] checked: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_checked: bool,
    #[prop(optional)] on_checked_change: Option<Callback<bool>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let control = BinaryToggle::new(
        ControlledState::new(checked, on_checked_change, default_checked),
        disabled,
    );
    on_cleanup(move || control.state().unmount());

    let own = primitive_bag("switch")
        .class(move || {
            SWITCH_STYLE.resolve(Plain::Default, Plain::Default, control.flags(StateFlags::CHECKED))
        })
        .with("role", "switch")
        .with("data-state", move || checked_unchecked(control.is_on()))
        .with("aria-checked", move || bool_token(control.is_on()))
        .with("data-disabled", move || bool_token(control.is_disabled()));
    let attrs = spread(own, class, attrs);
    let on_click = toggle_activation(control, on_click);

    view! {
        <button
            type="button"
            node_ref={node_ref}
            disabled=move || disabled.get()
            {..attrs}
            on:click=move |ev| on_click.call(ev)
        >
            <span data-ui-slot="track">
                <span data-ui-slot="thumb"></span>
            </span>
        </button>
    }
}

#[component]
/// Native checkbox bound to the controlled/uncontrolled checked state.
pub fn Checkbox(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] checked: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_checked: bool,
    #[prop(optional)] on_checked_change: Option<Callback<bool>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let control = BinaryToggle::new(
        ControlledState::new(checked, on_checked_change, default_checked),
        disabled,
    );
    on_cleanup(move || control.state().unmount());

    let own = primitive_bag("checkbox")
        .class(move || {
            CHECKBOX_STYLE.resolve(Plain::Default, Plain::Default, control.flags(StateFlags::CHECKED))
        })
        .with("data-state", move || checked_unchecked(control.is_on()))
        .with("data-disabled", move || bool_token(control.is_disabled()));
    let attrs = spread(own, class, attrs);
    let on_change = compose(
        Callback::new(move |ev: web_sys::Event| {
            control.set(event_target_checked(&ev));
            if control.state().is_controlled() {
                resync_checked(&ev, control.state().get_untracked());
            }
        }),
        on_change,
    );

    view! {
        <input
            type="checkbox"
            node_ref={node_ref}
            prop:checked=move || control.is_on()
            disabled=move || disabled.get()
            {..attrs}
            on:change=move |ev| on_change.call(ev)
        />
    }
}

#[component]
/// Single-line text input.
pub fn Input(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let state = ControlledState::new(value, on_value_change, default_value);
    on_cleanup(move || state.unmount());

    let own = primitive_bag("input")
        .class(move || FIELD_STYLE.resolve(Plain::Default, Plain::Default, disabled_flags(disabled.get())))
        .with("data-disabled", move || bool_token(disabled.get()));
    let attrs = spread(own, class, attrs);
    let on_input = compose(
        Callback::new(move |ev: web_sys::Event| {
            state.set(event_target_value(&ev));
            if state.is_controlled() {
                resync_input(&ev, &state.get_untracked());
            }
        }),
        on_input,
    );

    view! {
        <input
            type=input_type.unwrap_or("text")
            node_ref={node_ref}
            prop:value=move || state.get()
            disabled=move || disabled.get()
            {..attrs}
            on:input=move |ev| on_input.call(ev)
        />
    }
}

#[component]
/// Multiline text input.
pub fn Textarea(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] node_ref: NodeRef<html::Textarea>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let state = ControlledState::new(value, on_value_change, default_value);
    on_cleanup(move || state.unmount());

    let own = primitive_bag("textarea")
        .class(move || {
            FIELD_STYLE.resolve(Plain::Default, Plain::Default, disabled_flags(disabled.get()))
        })
        .with("data-disabled", move || bool_token(disabled.get()));
    let attrs = spread(own, class, attrs);
    let on_input = compose(
        Callback::new(move |ev: web_sys::Event| {
            state.set(event_target_value(&ev));
            if state.is_controlled() {
                resync_textarea(&ev, &state.get_untracked());
            }
        }),
        on_input,
    );

    view! {
        <textarea
            node_ref={node_ref}
            prop:value=move || state.get()
            disabled=move || disabled.get()
            {..attrs}
            on:input=move |ev| on_input.call(ev)
        ></textarea>
    }
}

#[component]
/// Form label.
pub fn Label(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] html_for: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let attrs = static_part("label", "ui-label", class, attrs);
    view! {
        <label for={html_for} {..attrs}>
            {children()}
        </label>
    }
}

#[derive(Clone, Copy)]
struct SelectContext {
    state: ControlledState<String>,
}

#[component]
/// Native select whose value is bridged through [`ControlledState`].
pub fn Select(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
    #[prop(optional)] node_ref: NodeRef<html::Select>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let state = ControlledState::new(value, on_value_change, default_value);
    on_cleanup(move || state.unmount());
    provide_context(SelectContext { state });

    let own = primitive_bag("select")
        .class(move || {
            SELECT_STYLE.resolve(Plain::Default, Plain::Default, disabled_flags(disabled.get()))
        })
        .with("data-placeholder", move || bool_token(state.get().is_empty()))
        .with("data-disabled", move || bool_token(disabled.get()));
    let attrs = spread(own, class, attrs);
    let on_change = compose(
        Callback::new(move |ev: web_sys::Event| {
            state.set(event_target_value(&ev));
            if state.is_controlled() {
                resync_select(&ev, &state.get_untracked());
            }
        }),
        on_change,
    );

    view! {
        <select
            node_ref={node_ref}
            prop:value=move || state.get()
            disabled=move || disabled.get()
            {..attrs}
            on:change=move |ev| on_change.call(ev)
        >
            {placeholder.map(move |placeholder| {
                view! {
                    <option value="" disabled=true prop:selected=move || state.get().is_empty()>
                        {placeholder}
                    </option>
                }
            })}
            {children()}
        </select>
    }
}

#[component]
/// Option inside a [`Select`]. Selection follows the parent's state.
pub fn SelectOption(
    #[prop(into)] value: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let SelectContext { state } = expect_context::<SelectContext>();
    let selected_value = value.clone();
    let attrs = spread(primitive_bag("select-option"), None, attrs);

    view! {
        <option
            value={value}
            disabled=move || disabled.get()
            prop:selected=move || state.signal().with(|current| *current == selected_value)
            {..attrs}
        >
            {children()}
        </option>
    }
}

#[derive(Clone, Copy)]
struct RadioGroupContext {
    state: ControlledState<String>,
    name: StoredValue<String>,
    disabled: MaybeSignal<bool>,
}

#[component]
/// Group of native radio inputs sharing one value.
pub fn RadioGroup(
    #[prop(into)] name: String,
    #[prop(default = Orientation::Vertical)] orientation: Orientation,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let state = ControlledState::new(value, on_value_change, default_value);
    on_cleanup(move || state.unmount());
    provide_context(RadioGroupContext {
        state,
        name: store_value(name),
        disabled,
    });

    let own = primitive_bag("radio-group")
        .class(move || {
            RADIO_GROUP_STYLE.resolve(orientation, Plain::Default, disabled_flags(disabled.get()))
        })
        .with("role", "radiogroup")
        .with("aria-orientation", orientation.token())
        .with("data-orientation", orientation.token())
        .with("data-disabled", move || bool_token(disabled.get()));
    let attrs = spread(own, class, attrs);

    view! {
        <div node_ref={node_ref} {..attrs}>
            {children()}
        </div>
    }
}

#[component]
/// Radio input inside a [`RadioGroup`].
pub fn RadioGroupItem(
    #[prop(into)] value: String,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let group = expect_context::<RadioGroupContext>();
    let item = store_value(value.clone());
    let is_checked = move || item.with_value(|item| group.state.signal().with(|current| current == item));
    let is_disabled = move || disabled.get() || group.disabled.get();

    let own = primitive_bag("radio")
        .class(move || {
            let mut flags = disabled_flags(is_disabled());
            flags.set(StateFlags::CHECKED, is_checked());
            RADIO_ITEM_STYLE.resolve(Plain::Default, Plain::Default, flags)
        })
        .with("data-state", move || checked_unchecked(is_checked()))
        .with("data-disabled", move || bool_token(is_disabled()));
    let attrs = spread(own, class, attrs);
    let on_change = compose(
        Callback::new(move |ev: web_sys::Event| {
            if is_disabled_untracked(disabled, group.disabled) {
                return;
            }
            if event_target_checked(&ev) {
                group.state.set(item.get_value());
            }
            if group.state.is_controlled() {
                let checked = item.with_value(|item| group.state.get_untracked() == *item);
                resync_checked(&ev, checked);
            }
        }),
        on_change,
    );

    view! {
        <input
            type="radio"
            node_ref={node_ref}
            name=move || group.name.get_value()
            value={value}
            prop:checked={is_checked}
            disabled={is_disabled}
            {..attrs}
            on:change=move |ev| on_change.call(ev)
        />
    }
}

fn is_disabled_untracked(own: MaybeSignal<bool>, group: MaybeSignal<bool>) -> bool {
    own.get_untracked() || group.get_untracked()
}

#[derive(Clone, Copy)]
struct ToggleGroupContext {
    state: ControlledState<Vec<String>>,
    mode: SelectionMode,
    variant: ToggleVariant,
    size: ToggleSize,
    disabled: MaybeSignal<bool>,
}

#[component]
/// Set of toggles with single or multiple selection.
pub fn ToggleGroup(
    #[prop(default = SelectionMode::Single)] mode: SelectionMode,
    #[prop(default = ToggleVariant::Default)] variant: ToggleVariant,
    #[prop(default = ToggleSize::Default)] size: ToggleSize,
    #[prop(default = Orientation::Horizontal)] orientation: Orientation,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] value: Option<MaybeSignal<Vec<String>>>,
    #[prop(optional)] default_value: Vec<String>,
    #[prop(optional)] on_value_change: Option<Callback<Vec<String>>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let state = ControlledState::new(value, on_value_change, default_value);
    on_cleanup(move || state.unmount());
    provide_context(ToggleGroupContext {
        state,
        mode,
        variant,
        size,
        disabled,
    });

    let own = primitive_bag("toggle-group")
        .class(move || {
            TOGGLE_GROUP_STYLE.resolve(orientation, Plain::Default, disabled_flags(disabled.get()))
        })
        .with("role", "group")
        .with("data-ui-mode", mode.token())
        .with("data-orientation", orientation.token())
        .with("data-disabled", move || bool_token(disabled.get()));
    let attrs = spread(own, class, attrs);

    view! {
        <div node_ref={node_ref} {..attrs}>
            {children()}
        </div>
    }
}

#[component]
/// Toggle inside a [`ToggleGroup`].
pub fn ToggleGroupItem(
    #[prop(into)] value: String,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let group = expect_context::<ToggleGroupContext>();
    let item = store_value(value);
    let is_pressed = move || item.with_value(|item| group.state.signal().with(|current| current.contains(item)));
    let is_disabled = move || disabled.get() || group.disabled.get();

    let own = primitive_bag("toggle-group-item")
        .class(move || {
            let mut flags = disabled_flags(is_disabled());
            flags.set(StateFlags::PRESSED, is_pressed());
            TOGGLE_STYLE.resolve(group.variant, group.size, flags)
        })
        .with("data-ui-variant", group.variant.token())
        .with("data-ui-size", group.size.token())
        .with("data-state", move || on_off(is_pressed()))
        .with("aria-pressed", move || bool_token(is_pressed()))
        .with("data-disabled", move || bool_token(is_disabled()));
    let attrs = spread(own, class, attrs);
    let on_click = compose(
        Callback::new(move |_: MouseEvent| {
            if is_disabled_untracked(disabled, group.disabled) {
                return;
            }
            let next = item.with_value(|item| {
                toggle_membership(&group.state.get_untracked(), item, group.mode, true)
            });
            group.state.set(next);
        }),
        on_click,
    );

    view! {
        <button
            type="button"
            node_ref={node_ref}
            disabled={is_disabled}
            {..attrs}
            on:click=move |ev| on_click.call(ev)
        >
            {children()}
        </button>
    }
}

#[component]
/// Range input with one native thumb per coordinate.
///
/// The number of thumbs is fixed by the value present at creation.
pub fn Slider(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] value: Option<MaybeSignal<Vec<f64>>>,
    #[prop(default = vec![0.0])] default_value: Vec<f64>,
    #[prop(optional)] on_value_change: Option<Callback<Vec<f64>>>,
    #[prop(default = 0.0)] min: f64,
    #[prop(default = 100.0)] max: f64,
    #[prop(default = 1.0)] step: f64,
    #[prop(default = Orientation::Horizontal)] orientation: Orientation,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let model = RangeModel::new(
        ControlledState::new(value, on_value_change, default_value),
        RangeBounds { min, max, step },
    );
    on_cleanup(move || model.state().unmount());

    let own = primitive_bag("slider")
        .class(move || SLIDER_STYLE.resolve(orientation, Plain::Default, disabled_flags(disabled.get())))
        .with("data-orientation", orientation.token())
        .with("data-disabled", move || bool_token(disabled.get()));
    let attrs = spread(own, class, attrs);

    let thumbs = model.state().get_untracked().len();
    let inputs = (0..thumbs)
        .map(move |index| {
            let coordinate = move || model.coordinate(index).unwrap_or(min);
            let on_input = compose(
                Callback::new(move |ev: web_sys::Event| {
                    model.set_coordinate(index, &event_target_value(&ev));
                    if model.state().is_controlled() {
                        if let Some(current) = model.state().get_untracked().get(index) {
                            resync_input(&ev, &format_coordinate(*current));
                        }
                    }
                }),
                on_input,
            );
            view! {
                <input
                    type="range"
                    data-ui-slot="thumb"
                    data-ui-index=index.to_string()
                    min=format_coordinate(min)
                    max=format_coordinate(max)
                    step=format_coordinate(step)
                    aria-orientation=orientation.token()
                    prop:value=move || format_coordinate(coordinate())
                    data-ui-percent=move || format!("{:.2}", model.bounds().percent(coordinate()))
                    disabled=move || disabled.get()
                    on:input=move |ev| on_input.call(ev)
                />
            }
        })
        .collect_view();

    view! {
        <div node_ref={node_ref} {..attrs}>
            {inputs}
        </div>
    }
}
