use super::*;

/// Clamped 0-100 fill for a progress value. `None` stays indeterminate.
fn progress_percent(value: Option<f64>, max: f64) -> Option<f64> {
    let value = value.filter(|value| value.is_finite())?;
    if max <= 0.0 {
        return Some(0.0);
    }
    Some((value / max * 100.0).clamp(0.0, 100.0))
}

fn progress_state(percent: Option<f64>) -> &'static str {
    match percent {
        None => "indeterminate",
        Some(percent) if percent >= 100.0 => "complete",
        Some(_) => "loading",
    }
}

#[component]
/// Compact status badge.
pub fn Badge(
    #[prop(default = BadgeVariant::Default)] variant: BadgeVariant,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let own = primitive_bag("badge")
        .class(BADGE_STYLE.resolve(variant, Plain::Default, StateFlags::empty()))
        .with("data-ui-variant", variant.token());
    let attrs = spread(own, class, attrs);

    view! { <span {..attrs}>{children()}</span> }
}

#[component]
/// Bordered card surface.
pub fn Card(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let attrs = static_part("card", "ui-card", class, attrs);
    view! { <div node_ref={node_ref} {..attrs}>{children()}</div> }
}

#[component]
/// Card header region.
pub fn CardHeader(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let attrs = static_part("card-header", "ui-card-header", class, attrs);
    view! { <div {..attrs}>{children()}</div> }
}

#[component]
/// Card heading.
pub fn CardTitle(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let attrs = static_part("card-title", "ui-card-title", class, attrs);
    view! { <h3 {..attrs}>{children()}</h3> }
}

#[component]
/// Muted card copy below the title.
pub fn CardDescription(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let attrs = static_part("card-description", "ui-card-description", class, attrs);
    view! { <p {..attrs}>{children()}</p> }
}

#[component]
/// Card body.
pub fn CardContent(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let attrs = static_part("card-content", "ui-card-content", class, attrs);
    view! { <div {..attrs}>{children()}</div> }
}

#[component]
/// Card action row.
pub fn CardFooter(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let attrs = static_part("card-footer", "ui-card-footer", class, attrs);
    view! { <div {..attrs}>{children()}</div> }
}

#[component]
/// Callout announced to assistive technology through `role="alert"`.
pub fn Alert(
    #[prop(default = AlertVariant::Default)] variant: AlertVariant,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let own = primitive_bag("alert")
        .class(ALERT_STYLE.resolve(variant, Plain::Default, StateFlags::empty()))
        .with("role", "alert")
        .with("data-ui-variant", variant.token());
    let attrs = spread(own, class, attrs);

    view! { <div {..attrs}>{children()}</div> }
}

#[component]
/// Alert heading.
pub fn AlertTitle(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let attrs = static_part("alert-title", "ui-alert-title", class, attrs);
    view! { <h5 {..attrs}>{children()}</h5> }
}

#[component]
/// Alert body copy.
pub fn AlertDescription(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let attrs = static_part("alert-description", "ui-alert-description", class, attrs);
    view! { <div {..attrs}>{children()}</div> }
}

#[component]
/// Horizontal or vertical rule.
///
/// Decorative separators are hidden from assistive technology.
pub fn Separator(
    #[prop(default = Orientation::Horizontal)] orientation: Orientation,
    #[prop(default = true)] decorative: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let own = primitive_bag("separator")
        .class(SEPARATOR_STYLE.resolve(orientation, Plain::Default, StateFlags::empty()))
        .with("data-orientation", orientation.token());
    let own = if decorative {
        own.with("role", "none")
    } else {
        own.with("role", "separator")
            .with("aria-orientation", orientation.token())
    };
    let attrs = spread(own, class, attrs);

    view! { <div {..attrs}></div> }
}

#[component]
/// Loading placeholder block.
pub fn Skeleton(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let attrs = static_part("skeleton", "ui-skeleton", class, attrs);
    view! { <div aria-hidden="true" {..attrs}></div> }
}

#[component]
/// Linear progress indicator. A missing value renders the indeterminate state.
pub fn Progress(
    #[prop(optional, into)] value: MaybeSignal<Option<f64>>,
    #[prop(default = 100.0)] max: f64,
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let percent = Signal::derive(move || progress_percent(value.get(), max));
    let own = primitive_bag("progress")
        .class("ui-progress")
        .with("role", "progressbar")
        .with("aria-valuemin", "0")
        .with("aria-valuemax", max.to_string())
        .with("aria-valuenow", move || value.get().map(|value| value.to_string()))
        .with("data-state", move || progress_state(percent.get()))
        .with("data-ui-percent", move || {
            percent.get().map(|percent| format!("{percent:.2}"))
        });
    let attrs = spread(own, class, attrs);

    view! {
        <div {..attrs}>
            <div
                data-ui-slot="indicator"
                style=move || {
                    format!(
                        "transform: translateX(-{:.2}%)",
                        100.0 - percent.get().unwrap_or(0.0),
                    )
                }
            ></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn static_parts_render() {
        let _ = create_runtime();
        let loaded = create_rw_signal(Some(40.0));

        let _view = view! {
            <Card class="wide">
                <CardHeader>
                    <CardTitle>"Usage"</CardTitle>
                    <CardDescription>"This month"</CardDescription>
                </CardHeader>
                <CardContent>
                    <Badge variant=BadgeVariant::Secondary>"beta"</Badge>
                    <Alert variant=AlertVariant::Destructive>
                        <AlertTitle>"Quota"</AlertTitle>
                        <AlertDescription>"Almost full"</AlertDescription>
                    </Alert>
                    <Separator decorative=false />
                    <Skeleton />
                    <Progress value=loaded />
                    <Progress />
                </CardContent>
                <CardFooter>"Footer"</CardFooter>
            </Card>
        }
        .into_view();

        assert_eq!(loaded.get_untracked(), Some(40.0));
    }

    #[test]
    fn progress_percent_clamps_into_range() {
        assert_eq!(progress_percent(Some(40.0), 80.0), Some(50.0));
        assert_eq!(progress_percent(Some(120.0), 100.0), Some(100.0));
        assert_eq!(progress_percent(Some(-5.0), 100.0), Some(0.0));
        assert_eq!(progress_percent(Some(5.0), 0.0), Some(0.0));
    }

    #[test]
    fn missing_or_non_finite_progress_is_indeterminate() {
        assert_eq!(progress_percent(None, 100.0), None);
        assert_eq!(progress_percent(Some(f64::NAN), 100.0), None);
        assert_eq!(progress_state(None), "indeterminate");
        assert_eq!(progress_state(Some(100.0)), "complete");
        assert_eq!(progress_state(Some(12.5)), "loading");
    }
}
