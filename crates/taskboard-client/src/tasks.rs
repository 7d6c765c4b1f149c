//! Task Endpoints
//!
//! CRUD calls for tasks plus the add/edit form and its validation.

use chrono::NaiveDate;
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::{ApiResult, FieldErrors, FormError};
use crate::models::{decode_rows, Listing, Single, Task, TaskStatus};
use crate::session::SessionStore;
use crate::validate::{parse_date, Validator};

/// Longest accepted task title, in characters
pub const MAX_TITLE_LEN: usize = 255;

/// Body of a create or update call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Raw add/edit form state, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    /// Selected status value; empty until chosen
    pub status: String,
    /// `YYYY-MM-DD` from a date input
    pub due_date: String,
}

impl TaskForm {
    /// Prefill from an existing task for editing
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.as_str().to_string(),
            due_date: task
                .due()
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    /// Check every field and build the request body
    pub fn validate(&self) -> Result<TaskPayload, FieldErrors> {
        let mut v = Validator::new();
        v.required("title", &self.title, "Title is required").max_chars(
            "title",
            &self.title,
            MAX_TITLE_LEN,
            "Title must be 255 characters or less",
        );

        let status = if self.status.is_empty() {
            v.fail("status", "Status is required");
            None
        } else {
            match self.status.parse::<TaskStatus>() {
                Ok(status) => Some(status),
                Err(_) => {
                    v.fail("status", "Invalid status");
                    None
                }
            }
        };

        let due_date = if self.due_date.trim().is_empty() {
            v.fail("due_date", "Due date is required");
            None
        } else {
            let parsed = parse_date(&self.due_date);
            if parsed.is_none() {
                v.fail("due_date", "Due date must be a valid date");
            }
            parsed
        };

        let errors = v.finish();
        match (status, due_date) {
            (Some(status), Some(due_date)) if errors.is_empty() => Ok(TaskPayload {
                title: self.title.trim().to_string(),
                description: self.description.clone(),
                status,
                due_date,
                user_id: None,
            }),
            _ => Err(errors),
        }
    }
}

impl<S: SessionStore> ApiClient<S> {
    // A 401 from any task call ends the session

    /// `GET /tasks`
    pub async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        let listing: Listing<serde_json::Value> = self.expire_on_unauthorized(self.get("/tasks").await)?;
        Ok(decode_rows(listing.into_vec()))
    }

    /// `GET /tasks/:id`
    pub async fn get_task(&self, id: &str) -> ApiResult<Task> {
        let task: Single<Task> = self.expire_on_unauthorized(self.get(&task_path(id)).await)?;
        Ok(task.into_inner())
    }

    /// Validate and `POST /tasks`, tagging the body with the session's user id
    pub async fn create_task(&self, form: &TaskForm) -> Result<(), FormError> {
        let payload = self.payload_for(form)?;
        self.expire_on_unauthorized(self.post::<_, serde_json::Value>("/tasks", &payload).await)?;
        Ok(())
    }

    /// Validate and `PUT /tasks/:id`
    pub async fn update_task(&self, id: &str, form: &TaskForm) -> Result<(), FormError> {
        let payload = self.payload_for(form)?;
        let response = self.put::<_, serde_json::Value>(&task_path(id), &payload).await;
        self.expire_on_unauthorized(response)?;
        Ok(())
    }

    /// `DELETE /tasks/:id`
    pub async fn delete_task(&self, id: &str) -> ApiResult<()> {
        let response = self.delete(&task_path(id)).await;
        self.expire_on_unauthorized(response)
    }

    fn payload_for(&self, form: &TaskForm) -> Result<TaskPayload, FieldErrors> {
        let mut payload = form.validate()?;
        payload.user_id = self.session().get().and_then(|session| session.user_id);
        Ok(payload)
    }
}

fn task_path(id: &str) -> String {
    format!("/tasks/{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> TaskForm {
        TaskForm {
            title: "Ship release".to_string(),
            description: "Tag and publish".to_string(),
            status: "in progress".to_string(),
            due_date: "2024-06-30".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_payload() {
        let payload = valid_form().validate().unwrap();
        assert_eq!(payload.status, TaskStatus::InProgress);
        assert_eq!(payload.due_date, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["status"], "in progress");
        assert_eq!(json["due_date"], "2024-06-30");
        assert!(json.get("userId").is_none());
    }

    #[test]
    fn test_empty_form_reports_required_fields() {
        let errors = TaskForm::default().validate().unwrap_err();
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("status"), Some("Status is required"));
        assert_eq!(errors.get("due_date"), Some("Due date is required"));
        assert!(!errors.contains("description"));
    }

    #[test]
    fn test_title_length_limit() {
        let mut form = valid_form();
        form.title = "x".repeat(MAX_TITLE_LEN);
        assert!(form.validate().is_ok());

        form.title.push('x');
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("title"), Some("Title must be 255 characters or less"));
    }

    #[test]
    fn test_unknown_status_and_bad_date() {
        let mut form = valid_form();
        form.status = "done".to_string();
        form.due_date = "tomorrow".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("status"), Some("Invalid status"));
        assert_eq!(errors.get("due_date"), Some("Due date must be a valid date"));
    }

    #[test]
    fn test_from_task_prefills_form() {
        let task = Task {
            id: "9".to_string(),
            title: "Ship release".to_string(),
            description: "Tag and publish".to_string(),
            status: TaskStatus::InProgress,
            due_date: Some("2024-06-30T00:00:00.000000Z".to_string()),
        };
        assert_eq!(TaskForm::from_task(&task), valid_form());
    }
}
