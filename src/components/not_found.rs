//! Not Found Page

use leptos::prelude::*;

use crate::context::{AppContext, Route};

#[component]
pub fn NotFound() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <button class="btn" on:click=move |_| ctx.navigate(Route::Home)>"Back to tasks"</button>
        </div>
    }
}
