//! Field Error Component

use leptos::prelude::*;
use taskboard_client::FieldErrors;

/// Validation message under a form field, if that field has one
#[component]
pub fn FieldError(errors: ReadSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|errors| {
            errors
                .get(field)
                .map(|message| view! { <div class="field-error">{message.to_string()}</div> })
        })
    }
}
