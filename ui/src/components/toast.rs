use dioxus::prelude::*;

use super::browser;

/// How long a toast stays on screen.
const TOAST_DURATION_MS: u32 = 3_000;

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

/// App-wide notification queue, shared via context.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u32,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn success(&mut self, message: impl Into<String>) -> u32 {
        self.push(ToastKind::Success, message.into())
    }

    pub fn error(&mut self, message: impl Into<String>) -> u32 {
        self.push(ToastKind::Error, message.into())
    }

    fn push(&mut self, kind: ToastKind, message: String) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Toast { id, kind, message });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|toast| toast.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();
    let items = toasts.read().items().to_vec();

    rsx! {
        div { class: "toast-host",
            {items.into_iter().map(|toast| {
                let id = toast.id;
                rsx! {
                    ToastEntry { key: "{id}", toast }
                }
            })}
        }
    }
}

/// One rendered toast. Expires itself after a short delay.
#[component]
fn ToastEntry(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;

    use_effect(move || {
        spawn(async move {
            browser::sleep_ms(TOAST_DURATION_MS).await;
            toasts.write().dismiss(id);
        });
    });

    let class = match toast.kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };

    rsx! {
        div { class: "{class}",
            span { class: "toast-message", "{toast.message}" }
            button {
                class: "toast-dismiss",
                onclick: move |_| toasts.write().dismiss(id),
                "\u{00d7}"
            }
        }
    }
}
