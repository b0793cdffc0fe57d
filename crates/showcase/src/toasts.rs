//! Reactive toast sink and the viewport that renders it.

use std::time::Duration;

use leptos::*;
use notifications::{Toast, ToastKind, ToastSink};
use ui_primitives::{Alert, AlertDescription, AlertTitle, AlertVariant};

/// [`ToastSink`] backed by a signal, so pushed toasts render immediately.
#[derive(Clone, Copy)]
pub struct SignalToastSink {
    toasts: RwSignal<Vec<Toast>>,
}

impl SignalToastSink {
    /// Empty sink owned by the current reactive scope.
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
        }
    }

    /// Tracked view of the visible toasts.
    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    /// Removes the toast with `id`, if it is still visible.
    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

impl Default for SignalToastSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastSink for SignalToastSink {
    fn push(&self, toast: Toast) {
        let id = toast.id;
        let duration = Duration::from_millis(u64::from(toast.duration));
        self.toasts.update(|toasts| toasts.push(toast));

        #[cfg(target_arch = "wasm32")]
        {
            let sink = *self;
            set_timeout(move || sink.dismiss(id), duration);
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (id, duration);
    }
}

fn alert_variant(kind: ToastKind) -> AlertVariant {
    match kind {
        ToastKind::Error => AlertVariant::Destructive,
        ToastKind::Success | ToastKind::Info | ToastKind::Warning => AlertVariant::Default,
    }
}

fn kind_token(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "success",
        ToastKind::Error => "error",
        ToastKind::Info => "info",
        ToastKind::Warning => "warning",
    }
}

#[component]
/// Stack of live toasts, newest last.
pub fn ToastViewport(sink: SignalToastSink) -> impl IntoView {
    view! {
        <ol class="showcase-toasts" aria-live="polite" data-ui-slot="toast-viewport">
            <For
                each=move || sink.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <li data-toast-kind=kind_token(toast.kind)>
                            <Alert variant=alert_variant(toast.kind)>
                                <AlertTitle>{toast.title}</AlertTitle>
                                {toast
                                    .description
                                    .map(|description| {
                                        view! { <AlertDescription>{description}</AlertDescription> }
                                    })}
                            </Alert>
                            <button
                                type="button"
                                class="showcase-toast-dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| sink.dismiss(id)
                            >
                                "×"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notifications::{ToastOptions, Toaster, DEFAULT_TOAST_DURATION};
    use pretty_assertions::assert_eq;

    #[test]
    fn toaster_verbs_land_in_the_signal() {
        let _ = create_runtime();
        let sink = SignalToastSink::new();
        let toaster = Toaster::new(sink);

        toaster.success("Saved", ToastOptions::default());
        let warning = toaster.warning(
            "Unsaved changes",
            ToastOptions {
                description: Some("Leave anyway?".to_string()),
                duration: Some(8000),
            },
        );

        let toasts = sink.toasts().get_untracked();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].duration, DEFAULT_TOAST_DURATION);
        assert_eq!(toasts[1].duration, 8000);

        sink.dismiss(warning);
        let titles: Vec<_> = sink
            .toasts()
            .get_untracked()
            .into_iter()
            .map(|toast| toast.title)
            .collect();
        assert_eq!(titles, vec!["Saved".to_string()]);
    }

    #[test]
    fn only_errors_render_destructive() {
        assert_eq!(alert_variant(ToastKind::Error), AlertVariant::Destructive);
        assert_eq!(alert_variant(ToastKind::Warning), AlertVariant::Default);
        assert_eq!(kind_token(ToastKind::Info), "info");
    }
}
