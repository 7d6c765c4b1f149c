//! Toast Banner Component
//!
//! Transient notification for remote errors and success messages.

use leptos::prelude::*;

use crate::context::{AppContext, ToastKind};

#[component]
pub fn ToastBanner() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    move || {
        ctx.toast.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast toast-success",
                ToastKind::Error => "toast toast-error",
            };
            view! {
                <div class=class role="status">
                    <span class="toast-message">{toast.message}</span>
                    <button class="toast-close" on:click=move |_| ctx.toast.set(None)>"×"</button>
                </div>
            }
        })
    }
}
