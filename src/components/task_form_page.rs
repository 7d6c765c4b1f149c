//! Task Form Page
//!
//! Shared add/edit form. With a `task_id` the task is fetched first and the
//! form prefilled; submitting then updates instead of creating.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_client::{FieldErrors, FormError, TaskForm, TaskStatus};

use crate::components::FieldError;
use crate::context::{AppContext, Route};

#[component]
pub fn TaskFormPage(
    /// Task being edited; `None` adds a new task
    #[prop(optional, into)]
    task_id: Option<String>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let task_id = StoredValue::new(task_id);
    let editing = task_id.with_value(|id| id.is_some());

    let form = RwSignal::new(TaskForm::default());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (saving, set_saving) = signal(false);

    // Prefill from the server when editing
    Effect::new(move |_| {
        let Some(id) = task_id.get_value() else { return };
        let Some(client) = ctx.client() else { return };
        spawn_local(async move {
            match client.get_task(&id).await {
                Ok(task) => form.set(TaskForm::from_task(&task)),
                Err(err) => ctx.report(&err, "Failed to load task."),
            }
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let values = form.get_untracked();
        let id = task_id.get_value();
        let Some(client) = ctx.client() else { return };
        set_saving.set(true);

        spawn_local(async move {
            let result = match &id {
                Some(id) => client.update_task(id, &values).await,
                None => client.create_task(&values).await,
            };
            match result {
                Ok(()) => {
                    set_errors.set(FieldErrors::new());
                    if id.is_some() {
                        ctx.success("Task updated successfully!");
                        ctx.navigate(Route::Home);
                    } else {
                        ctx.success("Task added successfully!");
                        form.set(TaskForm::default());
                    }
                }
                Err(FormError::Invalid(invalid)) => set_errors.set(invalid),
                Err(FormError::Remote(err)) => {
                    if let Some(body) = err.server_body() {
                        set_errors.set(body.field_errors());
                    }
                    let fallback = if id.is_some() {
                        "Failed to update task."
                    } else {
                        "Failed to add task. Please try again."
                    };
                    ctx.report(&err, fallback);
                }
            }
            set_saving.set(false);
        });
    };

    let edit = move |value: String, apply: fn(&mut TaskForm, String), field: &'static str| {
        form.update(|f| apply(f, value));
        set_errors.update(|e| e.remove(field));
    };

    view! {
        <div class="task-form-card">
            <h2>{if editing { "Edit Task" } else { "Add Task" }}</h2>
            <form class="task-form" on:submit=submit novalidate>
                <label for="task-title">"Title"</label>
                <input
                    id="task-title"
                    type="text"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| edit(event_target_value(&ev), |f, v| f.title = v, "title")
                />
                <FieldError errors=errors field="title" />

                <label for="task-description">"Description"</label>
                <textarea
                    id="task-description"
                    rows="4"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| edit(event_target_value(&ev), |f, v| f.description = v, "description")
                ></textarea>
                <FieldError errors=errors field="description" />

                <label for="task-status">"Status"</label>
                <select
                    id="task-status"
                    prop:value=move || form.with(|f| f.status.clone())
                    on:change=move |ev| edit(event_target_value(&ev), |f, v| f.status = v, "status")
                >
                    <option value="">"Select status"</option>
                    {TaskStatus::ALL
                        .iter()
                        .map(|status| view! { <option value=status.as_str()>{status.to_string()}</option> })
                        .collect_view()}
                </select>
                <FieldError errors=errors field="status" />

                <label for="task-due-date">"Due Date"</label>
                <input
                    id="task-due-date"
                    type="date"
                    prop:value=move || form.with(|f| f.due_date.clone())
                    on:input=move |ev| edit(event_target_value(&ev), |f, v| f.due_date = v, "due_date")
                />
                <FieldError errors=errors field="due_date" />

                <div class="task-form-actions">
                    <button class="btn btn-primary" type="submit" disabled=move || saving.get()>
                        {move || match (editing, saving.get()) {
                            (_, true) => "Saving...",
                            (true, false) => "Update Task",
                            (false, false) => "Add Task",
                        }}
                    </button>
                    <button
                        class="btn btn-secondary"
                        type="button"
                        on:click=move |_| ctx.navigate(Route::Home)
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
