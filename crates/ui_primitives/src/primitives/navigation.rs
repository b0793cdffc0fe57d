use super::*;

/// Whether activating an open accordion item may leave nothing open.
fn accordion_allows_empty(mode: SelectionMode, collapsible: bool) -> bool {
    matches!(mode, SelectionMode::Multiple) || collapsible
}

fn active_inactive(active: bool) -> &'static str {
    if active {
        "active"
    } else {
        "inactive"
    }
}

#[derive(Clone, Copy)]
struct AccordionContext {
    state: ControlledState<Vec<String>>,
    mode: SelectionMode,
    collapsible: bool,
    disabled: MaybeSignal<bool>,
}

#[derive(Clone, Copy)]
struct AccordionItemContext {
    value: StoredValue<String>,
    open: Signal<bool>,
    disabled: Signal<bool>,
}

#[component]
/// Stack of disclosure sections with single or multiple expansion.
///
/// The value is always the list of open item values, in either mode.
pub fn Accordion(
    #[prop(default = SelectionMode::Single)] mode: SelectionMode,
    #[prop(optional)] collapsible: bool,
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
    provide_context(AccordionContext {
        state,
        mode,
        collapsible,
        disabled,
    });

    let own = primitive_bag("accordion")
        .class("ui-accordion")
        .with("data-ui-mode", mode.token())
        .with("data-disabled", move || bool_token(disabled.get()));
    let attrs = spread(own, class, attrs);

    view! { <div node_ref={node_ref} {..attrs}>{children()}</div> }
}

#[component]
/// One section of an [`Accordion`].
pub fn AccordionItem(
    #[prop(into)] value: String,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let accordion = expect_context::<AccordionContext>();
    let value = store_value(value);
    let open = Signal::derive(move || {
        value.with_value(|value| accordion.state.signal().with(|open| open.contains(value)))
    });
    let item_disabled = Signal::derive(move || disabled.get() || accordion.disabled.get());
    provide_context(AccordionItemContext {
        value,
        open,
        disabled: item_disabled,
    });

    let own = primitive_bag("accordion-item")
        .class(move || {
            let mut flags = StateFlags::empty();
            flags.set(StateFlags::OPEN, open.get());
            flags.set(StateFlags::DISABLED, item_disabled.get());
            ACCORDION_ITEM_STYLE.resolve(Plain::Default, Plain::Default, flags)
        })
        .with("data-state", move || open_closed(open.get()))
        .with("data-disabled", move || bool_token(item_disabled.get()));
    let attrs = spread(own, class, attrs);

    view! { <div {..attrs}>{children()}</div> }
}

#[component]
/// Heading button that expands or collapses its [`AccordionItem`].
pub fn AccordionTrigger(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let accordion = expect_context::<AccordionContext>();
    let item = expect_context::<AccordionItemContext>();

    let own = primitive_bag("accordion-trigger")
        .class("ui-accordion-trigger")
        .with("aria-expanded", move || bool_token(item.open.get()))
        .with("data-state", move || open_closed(item.open.get()))
        .with("data-disabled", move || bool_token(item.disabled.get()));
    let attrs = spread(own, class, attrs);
    let on_click = compose(
        Callback::new(move |_: MouseEvent| {
            if item.disabled.get_untracked() {
                return;
            }
            let allow_empty = accordion_allows_empty(accordion.mode, accordion.collapsible);
            let next = item.value.with_value(|value| {
                toggle_membership(
                    &accordion.state.get_untracked(),
                    value,
                    accordion.mode,
                    allow_empty,
                )
            });
            accordion.state.set(next);
        }),
        on_click,
    );

    view! {
        <h3 class="ui-accordion-header" data-state=move || open_closed(item.open.get())>
            <button
                type="button"
                node_ref={node_ref}
                disabled=move || item.disabled.get()
                {..attrs}
                on:click=move |ev| on_click.call(ev)
            >
                {children()}
            </button>
        </h3>
    }
}

#[component]
/// Body of an [`AccordionItem`], mounted only while the item is open.
pub fn AccordionContent(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let item = expect_context::<AccordionItemContext>();
    let own = primitive_bag("accordion-content")
        .class("ui-accordion-content")
        .with("role", "region")
        .with("data-state", move || open_closed(item.open.get()));
    let attrs = spread(own, class, attrs);
    let render = move || {
        let attrs = attrs.clone();
        view! { <div {..attrs}>{children()}</div> }
    };

    view! {
        <Show when=move || item.open.get() fallback=|| ()>
            {render.clone()}
        </Show>
    }
}

#[derive(Clone, Copy)]
struct TabsContext {
    state: ControlledState<String>,
    orientation: Orientation,
}

#[component]
/// Tab set with one active panel.
pub fn Tabs(
    #[prop(default = Orientation::Horizontal)] orientation: Orientation,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let state = ControlledState::new(value, on_value_change, default_value);
    on_cleanup(move || state.unmount());
    provide_context(TabsContext { state, orientation });

    let own = primitive_bag("tabs")
        .class(TABS_STYLE.resolve(orientation, Plain::Default, StateFlags::empty()))
        .with("data-orientation", orientation.token());
    let attrs = spread(own, class, attrs);

    view! { <div node_ref={node_ref} {..attrs}>{children()}</div> }
}

#[component]
/// Row of [`TabsTrigger`]s.
pub fn TabsList(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let tabs = expect_context::<TabsContext>();
    let own = primitive_bag("tabs-list")
        .class("ui-tabs-list")
        .with("role", "tablist")
        .with("aria-orientation", tabs.orientation.token())
        .with("data-orientation", tabs.orientation.token());
    let attrs = spread(own, class, attrs);

    view! { <div {..attrs}>{children()}</div> }
}

#[component]
/// Button that activates the panel with the same value.
pub fn TabsTrigger(
    #[prop(into)] value: String,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let tabs = expect_context::<TabsContext>();
    let value = store_value(value);
    let selected = move || value.with_value(|value| tabs.state.signal().with(|active| active == value));

    let own = primitive_bag("tabs-trigger")
        .class(move || {
            let mut flags = StateFlags::empty();
            flags.set(StateFlags::SELECTED, selected());
            flags.set(StateFlags::DISABLED, disabled.get());
            TABS_TRIGGER_STYLE.resolve(Plain::Default, Plain::Default, flags)
        })
        .with("role", "tab")
        .with("aria-selected", move || bool_token(selected()))
        .with("data-state", move || active_inactive(selected()))
        .with("data-disabled", move || bool_token(disabled.get()));
    let attrs = spread(own, class, attrs);
    let on_click = compose(
        Callback::new(move |_: MouseEvent| {
            if disabled.get_untracked() {
                return;
            }
            let next = value.get_value();
            if tabs.state.get_untracked() != next {
                tabs.state.set(next);
            }
        }),
        on_click,
    );

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
/// Panel shown while its value is the active tab.
pub fn TabsContent(
    #[prop(into)] value: String,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let tabs = expect_context::<TabsContext>();
    let value = store_value(value);
    let selected = move || value.with_value(|value| tabs.state.signal().with(|active| active == value));

    let own = primitive_bag("tabs-content")
        .class("ui-tabs-content")
        .with("role", "tabpanel")
        .with("data-state", move || active_inactive(selected()));
    let attrs = spread(own, class, attrs);
    let render = move || {
        let attrs = attrs.clone();
        view! { <div {..attrs}>{children()}</div> }
    };

    view! {
        <Show when=selected fallback=|| ()>
            {render.clone()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn values(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn compound_parts_find_their_roots() {
        let _ = create_runtime();
        let tab = create_rw_signal("account".to_string());
        let reported = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&reported);
        let on_value_change = Callback::new(move |open: Vec<String>| sink.borrow_mut().push(open));

        let _view = view! {
            <div>
                <Accordion collapsible=true default_value=values(&["faq"]) on_value_change=on_value_change>
                    <AccordionItem value="faq">
                        <AccordionTrigger>"FAQ"</AccordionTrigger>
                        <AccordionContent>"Answers"</AccordionContent>
                    </AccordionItem>
                    <AccordionItem value="billing" disabled=true>
                        <AccordionTrigger>"Billing"</AccordionTrigger>
                        <AccordionContent>"Invoices"</AccordionContent>
                    </AccordionItem>
                </Accordion>
                <Tabs value=tab orientation=Orientation::Vertical>
                    <TabsList>
                        <TabsTrigger value="account">"Account"</TabsTrigger>
                        <TabsTrigger value="password">"Password"</TabsTrigger>
                    </TabsList>
                    <TabsContent value="account">"Account panel"</TabsContent>
                    <TabsContent value="password">"Password panel"</TabsContent>
                </Tabs>
            </div>
        }
        .into_view();

        assert_eq!(tab.get_untracked(), "account");
        assert!(reported.borrow().is_empty());
    }

    #[test]
    fn single_accordion_keeps_an_item_open_unless_collapsible() {
        let open = values(&["faq"]);
        let allow_empty = accordion_allows_empty(SelectionMode::Single, false);
        assert_eq!(
            toggle_membership(&open, "faq", SelectionMode::Single, allow_empty),
            values(&["faq"])
        );

        let allow_empty = accordion_allows_empty(SelectionMode::Single, true);
        assert!(toggle_membership(&open, "faq", SelectionMode::Single, allow_empty).is_empty());
    }

    #[test]
    fn multiple_accordion_collapses_freely() {
        assert!(accordion_allows_empty(SelectionMode::Multiple, false));
        let open = values(&["a", "b"]);
        assert_eq!(
            toggle_membership(&open, "a", SelectionMode::Multiple, true),
            values(&["b"])
        );
    }

    #[test]
    fn tab_state_tokens() {
        assert_eq!(active_inactive(true), "active");
        assert_eq!(active_inactive(false), "inactive");
    }
}
