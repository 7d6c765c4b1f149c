//! Navbar Component
//!
//! Links between the task views plus logout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, Route};

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let logout = move |_: web_sys::MouseEvent| {
        let Some(client) = ctx.client() else { return };
        spawn_local(async move {
            // The local session is gone either way
            if let Err(err) = client.logout().await {
                tracing::error!("logout failed: {err}");
            }
            ctx.navigate(Route::Login);
        });
    };

    view! {
        <nav class="navbar">
            <span class="navbar-brand">"Task Manager"</span>
            <div class="navbar-links">
                <button class="nav-link" on:click=move |_| ctx.navigate(Route::Home)>"Home"</button>
                <button class="nav-link" on:click=move |_| ctx.navigate(Route::AddTask)>"Add Task"</button>
                <button class="nav-link" on:click=logout>"Logout"</button>
            </div>
        </nav>
    }
}
