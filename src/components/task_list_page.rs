//! Task List Page
//!
//! Fetches the user's tasks once on mount and renders them through the
//! current search/filter/sort settings.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_client::{remove_task, SortOrder, Task, TaskQuery, TaskStatus};

use crate::components::DeleteConfirmButton;
use crate::context::{AppContext, Route};

#[component]
pub fn TaskListPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let tasks = RwSignal::new(Vec::<Task>::new());
    let query = RwSignal::new(TaskQuery::default());
    let (loading, set_loading) = signal(true);

    let visible = Memo::new(move |_| tasks.with(|all| query.with(|q| q.apply(all))));

    // Load once on mount
    Effect::new(move |_| {
        let Some(client) = ctx.client() else {
            set_loading.set(false);
            return;
        };
        if client.require_session().is_err() {
            ctx.error("Authorization token is missing. Redirecting to login...");
            ctx.navigate(Route::Login);
            return;
        }
        spawn_local(async move {
            match client.list_tasks().await {
                Ok(list) => {
                    tracing::debug!("loaded {} tasks", list.len());
                    tasks.set(list);
                }
                Err(err) => ctx.report(&err, "Failed to fetch tasks. Please try again."),
            }
            set_loading.set(false);
        });
    });

    let delete = move |id: String| {
        let Some(client) = ctx.client() else { return };
        spawn_local(async move {
            match client.delete_task(&id).await {
                Ok(()) => {
                    tasks.update(|list| {
                        remove_task(list, &id);
                    });
                    ctx.success("Task deleted successfully");
                }
                Err(err) => ctx.report(&err, "Failed to delete task"),
            }
        });
    };

    let rows = move || {
        visible
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, task)| {
                let status_class = format!("status status-{}", task.status.as_str().replace(' ', "-"));
                let edit_id = task.id.clone();
                let delete_id = task.id.clone();
                view! {
                    <tr>
                        <td>{index + 1}</td>
                        <td>{task.title.clone()}</td>
                        <td>{task.description.clone()}</td>
                        <td><span class=status_class>{task.status.to_string()}</span></td>
                        <td>{task.due_label()}</td>
                        <td class="task-actions">
                            <button
                                class="btn btn-edit"
                                on:click=move |_| ctx.navigate(Route::EditTask(edit_id.clone()))
                            >
                                "Edit"
                            </button>
                            <DeleteConfirmButton on_confirm=Callback::new(move |_| delete(delete_id.clone())) />
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="task-list">
            <div class="task-toolbar">
                <input
                    type="search"
                    class="task-search"
                    placeholder="Search tasks..."
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.search = value);
                    }
                />
                <select
                    class="task-filter"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.set_status_filter(&value));
                    }
                >
                    <option value="">"All"</option>
                    {TaskStatus::ALL
                        .iter()
                        .map(|status| view! { <option value=status.as_str()>{status.to_string()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="task-sort"
                    on:change=move |ev| {
                        let order = event_target_value(&ev).parse().unwrap_or_default();
                        query.update(|q| q.order = order);
                    }
                >
                    <option value=SortOrder::Asc.as_str()>"Due date: earliest first"</option>
                    <option value=SortOrder::Desc.as_str()>"Due date: latest first"</option>
                </select>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading tasks..."</p> }
            >
                <Show
                    when=move || !visible.with(|v| v.is_empty())
                    fallback=|| view! { <p class="empty-state">"No tasks found"</p> }
                >
                    <table class="task-table">
                        <thead>
                            <tr>
                                <th>"#"</th>
                                <th>"Title"</th>
                                <th>"Description"</th>
                                <th>"Status"</th>
                                <th>"Due Date"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
