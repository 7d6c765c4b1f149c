//! Delete Confirm Button Component
//!
//! Inline delete button that asks for confirmation before firing.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a "Delete" button initially. When clicked, shows "Delete?" with
/// confirm/cancel buttons; only confirming runs `on_confirm`.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button
                    class="btn btn-delete"
                    on:click=move |ev| {
                        ev.prevent_default();
                        set_confirming.set(true);
                    }
                >
                    "Delete"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.prevent_default();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.prevent_default();
                        set_confirming.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
