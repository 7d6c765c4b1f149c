//! Task CRUD calls against a mock API.

mod common;

use common::*;
use taskboard_client::{remove_task, ApiError, FormError, SessionStore, TaskForm, TaskQuery, TaskStatus};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn task_form() -> TaskForm {
    TaskForm {
        title: "Ship release".to_string(),
        description: "Tag and publish".to_string(),
        status: "pending".to_string(),
        due_date: "2024-06-30".to_string(),
    }
}

#[tokio::test]
async fn test_list_tasks_bare_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            task_json(1, "Write report", "pending", "2024-03-10"),
            task_json(2, "Review PR", "in progress", "2024-01-05"),
        ])))
        .mount(&server)
        .await;

    let client = logged_in_client(&server, "t");
    let tasks = client.list_tasks().await.unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[1].status, TaskStatus::InProgress);
    assert_eq!(tasks[0].id, "1");
}

#[tokio::test]
async fn test_list_tasks_keeps_good_rows_around_a_bad_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            task_json(1, "Write report", "pending", "2024-03-10"),
            task_json(2, "Odd casing", "Pending", "2024-03-11"),
            {"id": 3, "title": "Broken", "status": null},
            task_json(4, "Deploy", "completed", "2024-02-20"),
        ])))
        .mount(&server)
        .await;

    let client = logged_in_client(&server, "t");
    let tasks = client.list_tasks().await.unwrap();

    let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "4"]);
    assert_eq!(tasks[1].status, TaskStatus::Pending);
}

#[tokio::test]
async fn test_list_tasks_wrapped_in_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [task_json(5, "Deploy", "completed", "2024-02-20")]
        })))
        .mount(&server)
        .await;

    let client = logged_in_client(&server, "t");
    let tasks = client.list_tasks().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Deploy");
}

#[tokio::test]
async fn test_get_task_unwraps_task_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "task": task_json(9, "Plan sprint", "pending", "2024-04-01")
        })))
        .mount(&server)
        .await;

    let client = logged_in_client(&server, "t");
    let task = client.get_task("9").await.unwrap();
    assert_eq!(task.title, "Plan sprint");
    assert_eq!(TaskForm::from_task(&task).due_date, "2024-04-01");
}

#[tokio::test]
async fn test_create_task_sends_user_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .and(header("Authorization", "Bearer t"))
        .and(body_json(serde_json::json!({
            "title": "Ship release",
            "description": "Tag and publish",
            "status": "pending",
            "due_date": "2024-06-30",
            "userId": "12"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(task_json(3, "Ship release", "pending", "2024-06-30")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.session().set("t", Some("12"));
    client.create_task(&task_form()).await.unwrap();
}

#[tokio::test]
async fn test_create_invalid_task_makes_no_request() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server, "t");

    let mut form = task_form();
    form.title = "x".repeat(256);
    let err = client.create_task(&form).await.unwrap_err();

    assert!(matches!(err, FormError::Invalid(ref errors) if errors.contains("title")));
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_update_task_uses_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/tasks/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server, "t");
    let mut form = task_form();
    form.status = "completed".to_string();
    client.update_task("4", &form).await.unwrap();
}

#[tokio::test]
async fn test_delete_then_remove_only_that_task() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            task_json(1, "Write report", "pending", "2024-03-10"),
            task_json(2, "Review PR", "in progress", "2024-01-05"),
            task_json(3, "Deploy", "completed", "2024-02-20"),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/tasks/2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server, "t");
    let mut tasks = client.list_tasks().await.unwrap();
    client.delete_task("2").await.unwrap();
    assert!(remove_task(&mut tasks, "2"));

    let visible = TaskQuery::default().apply(&tasks);
    let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1"]);
}

#[tokio::test]
async fn test_delete_missing_task_propagates_404() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/tasks/77"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "Not found"})))
        .mount(&server)
        .await;

    let client = logged_in_client(&server, "t");
    let err = client.delete_task("77").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_unauthorized_list_clears_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({"message": "Unauthenticated."})))
        .mount(&server)
        .await;

    let client = logged_in_client(&server, "expired");
    let err = client.list_tasks().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.toast_message("fallback"), "Unauthenticated.");
    assert!(!client.session().is_logged_in());
    assert!(matches!(client.require_session(), Err(ApiError::MissingToken)));
}

#[tokio::test]
async fn test_unauthorized_update_clears_session() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/tasks/4"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = logged_in_client(&server, "expired");
    let err = client.update_task("4", &task_form()).await.unwrap_err();

    assert!(matches!(err, FormError::Remote(ref e) if e.is_unauthorized()));
    assert!(!client.session().is_logged_in());
}

#[tokio::test]
async fn test_other_errors_keep_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = logged_in_client(&server, "t");
    assert_eq!(client.list_tasks().await.unwrap_err().status(), Some(500));
    assert_eq!(client.require_session().unwrap().token, "t");
}

#[tokio::test]
async fn test_require_session_without_login() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    assert!(matches!(client.require_session(), Err(ApiError::MissingToken)));
    assert_eq!(request_count(&server).await, 0);
}
