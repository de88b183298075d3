//! Dispatch table mapping the application paths onto task operations.

use super::{CREATE_TEMPLATE, EDIT_TEMPLATE, INDEX_TEMPLATE, Views, WebError};
use crate::task::{
    domain::TaskId,
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskLifecycleService, TaskView, UpdateTaskRequest},
};
use axum::{
    Form, Json, Router,
    extract::{Query, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state handed to every handler.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    service: TaskLifecycleService<R, C>,
    views: Arc<Views>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Bundles the task service with the views it feeds.
    #[must_use]
    pub fn new(service: TaskLifecycleService<R, C>, views: Views) -> Self {
        Self {
            service,
            views: Arc::new(views),
        }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            views: Arc::clone(&self.views),
        }
    }
}

/// Form fields posted by the create and edit pages.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TaskForm {
    id: String,
    task: String,
    assign: String,
    deadline: String,
}

/// Task identifier carried in a query string or form body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IdParams {
    id: String,
}

#[derive(Serialize)]
struct ListContext {
    tasks: Vec<TaskView>,
}

#[derive(Serialize)]
struct EditContext {
    task: TaskView,
}

type Page = Result<Html<Vec<u8>>, WebError>;
type Action = Result<Redirect, WebError>;

/// Builds the application router.
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_tasks::<R, C>))
        .route("/createTaskForm", get(create_task_form::<R, C>))
        .route("/createTask", post(create_task::<R, C>))
        .route("/editTask", get(edit_task::<R, C>))
        .route("/updateTask", post(update_task::<R, C>))
        .route(
            "/updateStatusTask",
            get(mark_done_by_query::<R, C>).post(mark_done_by_form::<R, C>),
        )
        .route(
            "/deleteTask",
            get(delete_by_query::<R, C>).post(delete_by_form::<R, C>),
        )
        .route("/api/tasks", get(list_tasks_json::<R, C>))
        .with_state(state)
}

fn back_to_list() -> Redirect {
    Redirect::to("/")
}

async fn list_tasks<R, C>(State(state): State<AppState<R, C>>) -> Page
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = state.service.list().await?;
    let html = state.views.render(INDEX_TEMPLATE, &ListContext { tasks })?;
    Ok(Html(html))
}

async fn list_tasks_json<R, C>(
    State(state): State<AppState<R, C>>,
) -> Result<Json<Vec<TaskView>>, WebError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    Ok(Json(state.service.list().await?))
}

async fn create_task_form<R, C>(State(state): State<AppState<R, C>>) -> Page
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let html = state
        .views
        .render(CREATE_TEMPLATE, &minijinja::context! {})?;
    Ok(Html(html))
}

async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    Form(form): Form<TaskForm>,
) -> Action
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    state
        .service
        .create(CreateTaskRequest::new(form.task, form.assign, form.deadline))
        .await?;
    Ok(back_to_list())
}

async fn edit_task<R, C>(
    State(state): State<AppState<R, C>>,
    Query(params): Query<IdParams>,
) -> Page
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id: TaskId = params.id.parse()?;
    let task = state.service.get(id).await?;
    let html = state.views.render(EDIT_TEMPLATE, &EditContext { task })?;
    Ok(Html(html))
}

async fn update_task<R, C>(
    State(state): State<AppState<R, C>>,
    Form(form): Form<TaskForm>,
) -> Action
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id: TaskId = form.id.parse()?;
    state
        .service
        .update(UpdateTaskRequest::new(
            id,
            form.task,
            form.assign,
            form.deadline,
        ))
        .await?;
    Ok(back_to_list())
}

async fn mark_done<R, C>(state: &AppState<R, C>, params: &IdParams) -> Action
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id: TaskId = params.id.parse()?;
    state.service.mark_done(id).await?;
    Ok(back_to_list())
}

async fn mark_done_by_query<R, C>(
    State(state): State<AppState<R, C>>,
    Query(params): Query<IdParams>,
) -> Action
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    mark_done(&state, &params).await
}

async fn mark_done_by_form<R, C>(
    State(state): State<AppState<R, C>>,
    Form(params): Form<IdParams>,
) -> Action
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    mark_done(&state, &params).await
}

async fn delete<R, C>(state: &AppState<R, C>, params: &IdParams) -> Action
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id: TaskId = params.id.parse()?;
    state.service.delete(id).await?;
    Ok(back_to_list())
}

async fn delete_by_query<R, C>(
    State(state): State<AppState<R, C>>,
    Query(params): Query<IdParams>,
) -> Action
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    delete(&state, &params).await
}

async fn delete_by_form<R, C>(
    State(state): State<AppState<R, C>>,
    Form(params): Form<IdParams>,
) -> Action
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    delete(&state, &params).await
}
