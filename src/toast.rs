//! Toast Notifications
//!
//! Transient success/error messages stacked top-right; each toast removes
//! itself after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOAST_DURATION_MS: u32 = 3_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id.wrapping_add(1));
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                message: message.into(),
            })
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.update(|t| t.retain(|toast| toast.id != id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}

/// Renders the active toast stack; mounted once in `App`.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_toast();

    view! {
        <div class="fixed top-20 right-4 z-[100] space-y-2">
            {move || {
                ctx.toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let classes = match toast.kind {
                            ToastKind::Success => "bg-green-600 text-white",
                            ToastKind::Error => "bg-red-600 text-white",
                        };
                        view! {
                            <div class=format!(
                                "{} px-4 py-3 rounded-md shadow-lg text-sm max-w-sm animate-fade-in",
                                classes,
                            )>{toast.message}</div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
