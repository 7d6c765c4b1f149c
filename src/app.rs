//! Task Manager App
//!
//! Root component: provides the app context and renders the current view.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{LoginPage, Navbar, NotFound, RegisterPage, TaskFormPage, TaskListPage, ToastBanner};
use crate::context::{AppContext, Route};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(AppContext::initial_route());
    provide_context(ctx);

    // Back/forward buttons and typed URLs
    let _hash_listener = window_event_listener(ev::hashchange, move |_| {
        let route = AppContext::initial_route();
        if ctx.route.get_untracked() != route {
            tracing::debug!("hash changed to {}", route.path());
            ctx.route.set(route);
        }
    });

    let page = move || {
        let route = ctx.route.get();
        tracing::debug!("rendering {}", route.path());
        match route {
            Route::Login => view! { <LoginPage /> }.into_any(),
            Route::Register => view! { <RegisterPage /> }.into_any(),
            Route::NotFound => view! { <NotFound /> }.into_any(),
            Route::Home => view! {
                <Navbar />
                <TaskListPage />
            }
            .into_any(),
            Route::AddTask => view! {
                <Navbar />
                <TaskFormPage />
            }
            .into_any(),
            Route::EditTask(id) => view! {
                <Navbar />
                <TaskFormPage task_id=id />
            }
            .into_any(),
        }
    };

    view! {
        <div class="app-layout">
            <ToastBanner />
            <main class="main-content">{page}</main>
        </div>
    }
}
