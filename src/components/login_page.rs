//! Login Page
//!
//! Email/password form. Local validation errors show under the fields;
//! server errors show as a toast.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_client::{FieldErrors, FormError, LoginForm};

use crate::components::FieldError;
use crate::context::{AppContext, Route, REDIRECT_DELAY_MS};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let Some(client) = ctx.client() else { return };
        set_loading.set(true);

        spawn_local(async move {
            match client.login(&form).await {
                Ok(_) => {
                    set_errors.set(FieldErrors::new());
                    ctx.success("Login successful!");
                    ctx.navigate_after(Route::Home, REDIRECT_DELAY_MS);
                }
                Err(FormError::Invalid(invalid)) => set_errors.set(invalid),
                Err(FormError::Remote(err)) => {
                    tracing::error!("login failed: {err}");
                    if let Some(body) = err.server_body() {
                        set_errors.set(body.field_errors());
                    }
                    ctx.error(err.toast_message("Something went wrong!"));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-card">
            <h2>"Login"</h2>
            <p class="auth-hint">"Please enter your email and password!"</p>
            <form class="auth-form" on:submit=submit novalidate>
                <label for="login-email">"Email address"</label>
                <input
                    id="login-email"
                    type="email"
                    name="email"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        set_email.set(event_target_value(&ev));
                        set_errors.update(|e| e.remove("email"));
                    }
                />
                <FieldError errors=errors field="email" />

                <label for="login-password">"Password"</label>
                <input
                    id="login-password"
                    type="password"
                    name="password"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        set_password.set(event_target_value(&ev));
                        set_errors.update(|e| e.remove("password"));
                    }
                />
                <FieldError errors=errors field="password" />

                <button class="btn btn-primary" type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
            <p class="auth-switch">
                "Don't have an account? "
                <a href="#/register" on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Route::Register);
                }>"Sign Up"</a>
            </p>
        </div>
    }
}
