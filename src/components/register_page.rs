//! Register Page
//!
//! Sign-up form; all rule violations are shown at once.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_client::{FieldErrors, FormError, RegisterForm};

use crate::components::FieldError;
use crate::context::{AppContext, Route, REDIRECT_DELAY_MS};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let form = RwSignal::new(RegisterForm::default());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let values = form.get_untracked();
        let Some(client) = ctx.client() else { return };
        set_loading.set(true);

        spawn_local(async move {
            match client.register(&values).await {
                Ok(_) => {
                    set_errors.set(FieldErrors::new());
                    ctx.success("Registered Successfully!");
                    ctx.navigate_after(Route::Home, REDIRECT_DELAY_MS);
                }
                Err(FormError::Invalid(invalid)) => set_errors.set(invalid),
                Err(FormError::Remote(err)) => {
                    tracing::error!("registration failed: {err}");
                    let joined = err.server_body().map(|body| body.joined_errors()).unwrap_or_default();
                    if let Some(body) = err.server_body() {
                        set_errors.set(body.field_errors());
                    }
                    if joined.is_empty() {
                        ctx.error(err.toast_message("Registration failed. Please try again."));
                    } else {
                        ctx.error(joined);
                    }
                }
            }
            set_loading.set(false);
        });
    };

    // One input bound to one field of the form
    let field = move |name: &'static str, label: &'static str, kind: &'static str| {
        let read = move || {
            form.with(|f| match name {
                "name" => f.name.clone(),
                "email" => f.email.clone(),
                "password" => f.password.clone(),
                _ => f.password_confirmation.clone(),
            })
        };
        let write = move |value: String| {
            form.update(|f| match name {
                "name" => f.name = value,
                "email" => f.email = value,
                "password" => f.password = value,
                _ => f.password_confirmation = value,
            });
            set_errors.update(|e| e.remove(name));
        };
        let id = format!("register-{}", name);
        view! {
            <label for=id.clone()>{label}</label>
            <input id=id type=kind name=name prop:value=read on:input=move |ev| write(event_target_value(&ev)) />
            <FieldError errors=errors field=name />
        }
    };

    view! {
        <div class="auth-card">
            <h2>"Sign Up"</h2>
            <form class="auth-form" on:submit=submit novalidate>
                {field("name", "Name", "text")}
                {field("email", "Email", "email")}
                {field("password", "Password", "password")}
                {field("password_confirmation", "Confirm Password", "password")}
                <button class="btn btn-primary" type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing up..." } else { "Sign Up" }}
                </button>
            </form>
            <p class="auth-switch">
                "Already have an account? "
                <a href="#/login" on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Route::Login);
                }>"Login"</a>
            </p>
        </div>
    }
}
