//! Gallery app for the primitive catalog.
//!
//! Every interactive primitive appears twice: once owning its own state (`default_*` props) and
//! once driven by the gallery's [`ShowcaseState`]. Interactions are reported through the toast
//! contract so the callback order is visible while reviewing.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod toasts;

use leptos::*;
use notifications::{ToastOptions, Toaster};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ui_primitives::prelude::*;

pub use toasts::{SignalToastSink, ToastViewport};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Values the gallery owns for its controlled demos.
pub struct ShowcaseState {
    /// Controlled switch.
    pub notifications_enabled: bool,
    /// Controlled slider coordinates.
    pub volume: Vec<f64>,
    /// Controlled select value.
    pub plan: String,
    /// Controlled text input.
    pub display_name: String,
    /// Controlled dialog.
    pub dialog_open: bool,
    /// Controlled tab.
    pub tab: String,
    /// Badge variant picked by name.
    pub badge_variant: BadgeVariant,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            volume: vec![40.0],
            plan: "team".to_string(),
            display_name: "Ada".to_string(),
            dialog_open: false,
            tab: "account".to_string(),
            badge_variant: BadgeVariant::Default,
        }
    }
}

impl ShowcaseState {
    /// Reads a state snapshot. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the serde error for malformed snapshots or undeclared variant names.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

#[component]
/// Primitive gallery contents.
pub fn ShowcaseApp(
    /// Optional snapshot used instead of [`ShowcaseState::default`].
    #[prop(optional)]
    initial_state: Option<Value>,
) -> impl IntoView {
    let initial = match initial_state.map(ShowcaseState::from_value) {
        Some(Ok(restored)) => restored,
        Some(Err(err)) => {
            logging::warn!("showcase state ignored: {err}");
            ShowcaseState::default()
        }
        None => ShowcaseState::default(),
    };
    let state = create_rw_signal(initial);
    let sink = SignalToastSink::new();
    let toaster = store_value(Toaster::new(sink));
    let notify = move |title: String, description: String| {
        toaster.with_value(|toaster| {
            toaster.info(title, ToastOptions::described(description));
        });
    };

    let switch_on = Signal::derive(move || state.with(|state| state.notifications_enabled));
    let volume = Signal::derive(move || state.with(|state| state.volume.clone()));
    let plan = Signal::derive(move || state.with(|state| state.plan.clone()));
    let display_name = Signal::derive(move || state.with(|state| state.display_name.clone()));
    let dialog_open = Signal::derive(move || state.with(|state| state.dialog_open));
    let tab = Signal::derive(move || state.with(|state| state.tab.clone()));
    let badge_variant = state.with_untracked(|state| state.badge_variant);

    view! {
        <main class="showcase" data-ui-slot="showcase">
            <header class="showcase-header">
                <h1>"Primitive Showcase"</h1>
                <Badge variant=badge_variant>{badge_variant.token()}</Badge>
            </header>

            <Card>
                <CardHeader>
                    <CardTitle>"Buttons"</CardTitle>
                    <CardDescription>"Every variant and size"</CardDescription>
                </CardHeader>
                <CardContent class="showcase-row">
                    {ButtonVariant::ALL
                        .iter()
                        .map(|variant| {
                            let variant = *variant;
                            view! {
                                <Button
                                    variant=variant
                                    on_click=Callback::new(move |_| {
                                        notify("Button".to_string(), variant.token().to_string());
                                    })
                                >
                                    {variant.token()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </CardContent>
                <CardFooter class="showcase-row">
                    <Button size=ButtonSize::Sm>"Small"</Button>
                    <Button size=ButtonSize::Lg>"Large"</Button>
                    <Button size=ButtonSize::Icon attr:aria-label="Add">"+"</Button>
                    <Button disabled=true>"Disabled"</Button>
                </CardFooter>
            </Card>

            <Card>
                <CardHeader>
                    <CardTitle>"Binary controls"</CardTitle>
                </CardHeader>
                <CardContent class="showcase-grid">
                    <Toggle
                        variant=ToggleVariant::Outline
                        on_pressed_change=Callback::new(move |pressed: bool| {
                            notify("Toggle".to_string(), format!("pressed = {pressed}"));
                        })
                    >
                        "Uncontrolled toggle"
                    </Toggle>
                    <Toggle size=ToggleSize::Sm default_pressed=true disabled=true>
                        "Disabled toggle"
                    </Toggle>
                    <Label html_for="notify-switch">"Notifications"</Label>
                    <Switch
                        attr:id="notify-switch"
                        checked=switch_on
                        on_checked_change=Callback::new(move |next: bool| {
                            state.update(|state| state.notifications_enabled = next);
                            notify("Switch".to_string(), format!("checked = {next}"));
                        })
                    />
                    <Switch default_checked=true />
                    <Label html_for="terms">"Accept terms"</Label>
                    <Checkbox
                        attr:id="terms"
                        on_checked_change=Callback::new(move |checked: bool| {
                            notify("Checkbox".to_string(), format!("checked = {checked}"));
                        })
                    />
                </CardContent>
            </Card>

            <Card>
                <CardHeader>
                    <CardTitle>"Text and choice"</CardTitle>
                </CardHeader>
                <CardContent class="showcase-grid">
                    <Label html_for="display-name">"Display name"</Label>
                    <Input
                        attr:id="display-name"
                        value=display_name
                        on_value_change=Callback::new(move |next: String| {
                            state.update(|state| state.display_name = next);
                        })
                    />
                    <p class="showcase-note">{move || format!("Hello, {}", display_name.get())}</p>
                    <Textarea default_value="Uncontrolled notes" attr:rows="3" />
                    <Select
                        value=plan
                        placeholder="Pick a plan"
                        on_value_change=Callback::new(move |next: String| {
                            notify("Plan".to_string(), next.clone());
                            state.update(|state| state.plan = next);
                        })
                    >
                        <SelectOption value="hobby">"Hobby"</SelectOption>
                        <SelectOption value="team">"Team"</SelectOption>
                        <SelectOption value="enterprise" disabled=true>"Enterprise"</SelectOption>
                    </Select>
                    <RadioGroup
                        name="density"
                        default_value="comfortable"
                        on_value_change=Callback::new(move |next: String| {
                            notify("Density".to_string(), next);
                        })
                    >
                        <label>
                            <RadioGroupItem value="compact" />
                            "Compact"
                        </label>
                        <label>
                            <RadioGroupItem value="comfortable" />
                            "Comfortable"
                        </label>
                    </RadioGroup>
                    <ToggleGroup
                        mode=SelectionMode::Multiple
                        variant=ToggleVariant::Outline
                        default_value=vec!["bold".to_string()]
                        attr:aria-label="Text formatting"
                        on_value_change=Callback::new(move |next: Vec<String>| {
                            notify("Formatting".to_string(), next.join(", "));
                        })
                    >
                        <ToggleGroupItem value="bold">"B"</ToggleGroupItem>
                        <ToggleGroupItem value="italic">"I"</ToggleGroupItem>
                        <ToggleGroupItem value="underline">"U"</ToggleGroupItem>
                    </ToggleGroup>
                </CardContent>
            </Card>

            <Card>
                <CardHeader>
                    <CardTitle>"Ranges"</CardTitle>
                </CardHeader>
                <CardContent class="showcase-grid">
                    <Slider
                        value=volume
                        attr:aria-label="Volume"
                        on_value_change=Callback::new(move |next: Vec<f64>| {
                            state.update(|state| state.volume = next);
                        })
                    />
                    <Progress value=Signal::derive(move || volume.get().first().copied()) />
                    <Slider default_value=vec![20.0, 80.0] step=5.0 attr:aria-label="Price range" />
                    <Progress />
                    <Separator />
                    <Skeleton class="showcase-skeleton" />
                </CardContent>
            </Card>

            <Accordion collapsible=true default_value=vec!["what".to_string()]>
                <AccordionItem value="what">
                    <AccordionTrigger>"What is this?"</AccordionTrigger>
                    <AccordionContent>"A gallery of every primitive."</AccordionContent>
                </AccordionItem>
                <AccordionItem value="how">
                    <AccordionTrigger>"How is state owned?"</AccordionTrigger>
                    <AccordionContent>
                        "Pass a value to control a primitive, or a default to let it own the value."
                    </AccordionContent>
                </AccordionItem>
                <AccordionItem value="locked" disabled=true>
                    <AccordionTrigger>"Disabled section"</AccordionTrigger>
                    <AccordionContent>"Never shown."</AccordionContent>
                </AccordionItem>
            </Accordion>

            <Tabs
                value=tab
                on_value_change=Callback::new(move |next: String| {
                    state.update(|state| state.tab = next);
                })
            >
                <TabsList>
                    <TabsTrigger value="account">"Account"</TabsTrigger>
                    <TabsTrigger value="password">"Password"</TabsTrigger>
                    <TabsTrigger value="billing" disabled=true>"Billing"</TabsTrigger>
                </TabsList>
                <TabsContent value="account">"Account settings"</TabsContent>
                <TabsContent value="password">"Password settings"</TabsContent>
            </Tabs>

            <div class="showcase-row">
                <Dialog
                    open=dialog_open
                    on_open_change=Callback::new(move |open: bool| {
                        state.update(|state| state.dialog_open = open);
                    })
                >
                    <DialogTrigger>"Open dialog"</DialogTrigger>
                    <DialogContent>
                        <h2>"Delete project?"</h2>
                        <p>"This cannot be undone."</p>
                        <DialogClose>"Cancel"</DialogClose>
                        <Button
                            variant=ButtonVariant::Destructive
                            on_click=Callback::new(move |_| {
                                toaster.with_value(|toaster| {
                                    toaster.error("Project deleted", ToastOptions::default());
                                });
                                state.update(|state| state.dialog_open = false);
                            })
                        >
                            "Delete"
                        </Button>
                    </DialogContent>
                </Dialog>
                <Tooltip content="Saved to your library" side=Side::Bottom>
                    <Button variant=ButtonVariant::Outline>"Hover me"</Button>
                </Tooltip>
            </div>

            <Alert>
                <AlertTitle>"Heads up"</AlertTitle>
                <AlertDescription>"Badges below resolve every declared variant."</AlertDescription>
            </Alert>
            <Alert variant=AlertVariant::Destructive>
                <AlertTitle>"Error"</AlertTitle>
                <AlertDescription>"Destructive alerts use the error tone."</AlertDescription>
            </Alert>
            <div class="showcase-row">
                {BadgeVariant::ALL
                    .iter()
                    .map(|variant| view! { <Badge variant=*variant>{variant.token()}</Badge> })
                    .collect_view()}
                <Separator orientation=Orientation::Vertical decorative=false />
                <Badge class="showcase-plain" attr:title="Caller class and title">"custom"</Badge>
            </div>

            <ToastViewport sink=sink />
        </main>
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
/// Mounts the gallery on the document body.
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <ShowcaseApp /> })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_keep_defaults() {
        let state = ShowcaseState::from_value(serde_json::json!({
            "plan": "hobby",
            "badgeVariant": "outline"
        }))
        .expect("state");

        assert_eq!(state.plan, "hobby");
        assert_eq!(state.badge_variant, BadgeVariant::Outline);
        assert_eq!(state.volume, ShowcaseState::default().volume);
    }

    #[test]
    fn undeclared_variant_names_are_rejected() {
        let err = ShowcaseState::from_value(serde_json::json!({ "badgeVariant": "purple" }))
            .unwrap_err();
        assert!(err.to_string().contains("purple"));
    }

    #[test]
    fn state_snapshot_round_trips() {
        let state = ShowcaseState {
            dialog_open: true,
            volume: vec![10.0, 90.0],
            ..ShowcaseState::default()
        };
        let value = serde_json::to_value(&state).expect("serialize");
        assert_eq!(value["dialogOpen"], serde_json::json!(true));
        assert_eq!(ShowcaseState::from_value(value).expect("deserialize"), state);
    }
}
