use super::*;

fn closes_overlay(key: &str) -> bool {
    key == "Escape"
}

#[derive(Clone, Copy)]
struct DialogContext {
    control: BinaryToggle,
}

#[component]
/// Modal dialog root. Owns the open state shared by its trigger, content, and close parts.
pub fn Dialog(
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_open: bool,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let control = BinaryToggle::new(
        ControlledState::new(open, on_open_change, default_open),
        MaybeSignal::Static(false),
    );
    on_cleanup(move || control.state().unmount());
    provide_context(DialogContext { control });

    let own = primitive_bag("dialog-root")
        .class("ui-dialog-root")
        .with("data-state", move || open_closed(control.is_on()));
    let attrs = spread(own, class, attrs);

    view! { <div {..attrs}>{children()}</div> }
}

#[component]
/// Button that opens the enclosing [`Dialog`].
pub fn DialogTrigger(
    #[prop(default = ButtonVariant::Default)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Default)] size: ButtonSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let DialogContext { control } = expect_context::<DialogContext>();
    let own = primitive_bag("dialog-trigger")
        .class(BUTTON_STYLE.resolve(variant, size, StateFlags::empty()))
        .with("aria-haspopup", "dialog")
        .with("aria-expanded", move || bool_token(control.is_on()))
        .with("data-state", move || open_closed(control.is_on()));
    let attrs = spread(own, class, attrs);
    let on_click = compose(Callback::new(move |_: MouseEvent| control.set(true)), on_click);

    view! {
        <button type="button" node_ref={node_ref} {..attrs} on:click=move |ev| on_click.call(ev)>
            {children()}
        </button>
    }
}

#[component]
/// Dialog panel and its overlay, mounted only while open.
///
/// Escape and overlay clicks request close.
pub fn DialogContent(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_escape_key_down: Option<Callback<KeyboardEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let DialogContext { control } = expect_context::<DialogContext>();

    let escape = window_event_listener(ev::keydown, move |ev| {
        if closes_overlay(&ev.key()) && control.state().get_untracked() {
            if let Some(on_escape_key_down) = on_escape_key_down.as_ref() {
                on_escape_key_down.call(ev);
            }
            control.set(false);
        }
    });
    on_cleanup(move || escape.remove());

    let own = primitive_bag("dialog")
        .class(move || DIALOG_STYLE.resolve(Plain::Default, Plain::Default, control.flags(StateFlags::OPEN)))
        .with("role", "dialog")
        .with("aria-modal", "true")
        .with("tabindex", "-1")
        .with("data-state", move || open_closed(control.is_on()));
    let attrs = spread(own, class, attrs);
    let render = move || {
        let attrs = attrs.clone();
        view! {
            <div
                class="ui-dialog-overlay"
                data-ui-slot="overlay"
                data-state=move || open_closed(control.is_on())
                on:click=move |_| control.set(false)
            ></div>
            <div {..attrs}>{children()}</div>
        }
    };

    view! {
        <Show when=move || control.is_on() fallback=|| ()>
            {render.clone()}
        </Show>
    }
}

#[component]
/// Button that closes the enclosing [`Dialog`].
pub fn DialogClose(
    #[prop(default = ButtonVariant::Outline)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Default)] size: ButtonSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let DialogContext { control } = expect_context::<DialogContext>();
    let own = primitive_bag("dialog-close").class(BUTTON_STYLE.resolve(variant, size, StateFlags::empty()));
    let attrs = spread(own, class, attrs);
    let on_click = compose(Callback::new(move |_: MouseEvent| control.set(false)), on_click);

    view! {
        <button type="button" {..attrs} on:click=move |ev| on_click.call(ev)>
            {children()}
        </button>
    }
}

#[component]
/// Hover/focus hint attached to its children.
pub fn Tooltip(
    #[prop(into)] content: MaybeSignal<String>,
    #[prop(default = Side::Top)] side: Side,
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_open: bool,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let control = BinaryToggle::new(
        ControlledState::new(open, on_open_change, default_open),
        MaybeSignal::Static(false),
    );
    on_cleanup(move || control.state().unmount());
    let content = Signal::derive(move || content.get());

    let own = primitive_bag("tooltip")
        .class(move || TOOLTIP_STYLE.resolve(side, Plain::Default, control.flags(StateFlags::OPEN)))
        .with("role", "tooltip")
        .with("data-side", side.token())
        .with("data-state", move || open_closed(control.is_on()));
    let attrs = spread(own, class, attrs);
    let show = move || {
        if !control.state().get_untracked() {
            control.set(true);
        }
    };
    let hide = move || {
        if control.state().get_untracked() {
            control.set(false);
        }
    };
    let render = move || {
        let attrs = attrs.clone();
        view! { <span {..attrs}>{move || content.get()}</span> }
    };

    view! {
        <span
            class="ui-tooltip-anchor"
            data-ui-slot="tooltip-anchor"
            data-state=move || open_closed(control.is_on())
            on:mouseenter=move |_| show()
            on:mouseleave=move |_| hide()
            on:focusin=move |_| show()
            on:focusout=move |_| hide()
            on:keydown=move |ev: KeyboardEvent| {
                if closes_overlay(&ev.key()) {
                    hide();
                }
            }
        >
            {children()}
            <Show when=move || control.is_on() fallback=|| ()>
                {render.clone()}
            </Show>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn closed_dialog_and_tooltip_render_their_anchors() {
        let _ = create_runtime();
        let open = create_rw_signal(false);

        let _view = view! {
            <div>
                <Dialog open=open on_open_change=Callback::new(move |next: bool| open.set(next))>
                    <DialogTrigger>"Open"</DialogTrigger>
                    <DialogContent>
                        <p>"Body"</p>
                        <DialogClose>"Close"</DialogClose>
                    </DialogContent>
                </Dialog>
                <Tooltip content="Copied" side=Side::Right>
                    <button>"Copy"</button>
                </Tooltip>
            </div>
        }
        .into_view();

        assert!(!open.get_untracked());
    }

    #[test]
    fn only_escape_closes_overlays() {
        assert!(closes_overlay("Escape"));
        assert!(!closes_overlay("Enter"));
        assert!(!closes_overlay("Esc "));
    }

    #[test]
    fn dialog_open_class_follows_state() {
        let closed = DIALOG_STYLE.resolve(Plain::Default, Plain::Default, StateFlags::empty());
        let open = DIALOG_STYLE.resolve(Plain::Default, Plain::Default, StateFlags::OPEN);
        assert_eq!(closed, "ui-dialog");
        assert_eq!(open, "ui-dialog ui-dialog--open");
    }

    #[test]
    fn tooltip_side_contributes_its_class() {
        let class = TOOLTIP_STYLE.resolve(Side::Bottom, Plain::Default, StateFlags::OPEN);
        assert_eq!(class, "ui-tooltip ui-tooltip--bottom ui-tooltip--open");
    }
}
