//! `PostgreSQL` integration tests for the task repository contract.

use chrono::NaiveDate;
use diesel::connection::SimpleConnection;
use std::time::Duration;
use taskboard::task::{
    domain::{Deadline, TaskDetails, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};

use crate::postgres::helpers::{BoxError, setup_context};

fn deadline(year: i32, month: u32, day: u32) -> Result<Deadline, BoxError> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or("invalid calendar date")?;
    Ok(Deadline::from_date(date))
}

fn details(description: &str, assignee: &str, due: Deadline) -> Result<TaskDetails, BoxError> {
    Ok(TaskDetails::new(description, assignee, due)?)
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_assigns_sequential_ids_and_lists_in_order() -> Result<(), BoxError> {
    let Some(ctx) = setup_context().await? else {
        return Ok(());
    };
    let due = deadline(2099, 1, 1)?;

    let first = ctx.repository.insert(&details("First", "Alice", due)?).await?;
    let second = ctx.repository.insert(&details("Second", "Bob", due)?).await?;
    assert!(first < second);

    let tasks = ctx.repository.list().await?;
    let descriptions: Vec<_> = tasks.iter().map(|task| task.description()).collect();
    assert_eq!(descriptions, ["First", "Second"]);
    assert!(tasks.iter().all(|task| !task.is_done()));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn deadline_date_survives_storage() -> Result<(), BoxError> {
    let Some(ctx) = setup_context().await? else {
        return Ok(());
    };
    let due = deadline(2099, 12, 31)?;

    let id = ctx.repository.insert(&details("Plan", "Carol", due)?).await?;
    let stored = ctx
        .repository
        .find_by_id(id)
        .await?
        .ok_or("inserted task should be found")?;

    assert_eq!(stored.deadline(), due);
    assert_eq!(stored.deadline().display_format(), "31-12-2099");
    assert_eq!(stored.assignee(), "Carol");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn find_missing_task_returns_none() -> Result<(), BoxError> {
    let Some(ctx) = setup_context().await? else {
        return Ok(());
    };

    let found = ctx.repository.find_by_id(TaskId::from_persisted(404)).await?;
    assert!(found.is_none());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn update_overwrites_fields_but_keeps_completion() -> Result<(), BoxError> {
    let Some(ctx) = setup_context().await? else {
        return Ok(());
    };
    let id = ctx
        .repository
        .insert(&details("Draft", "Alice", deadline(2099, 1, 1)?)?)
        .await?;
    ctx.repository.mark_done(id).await?;

    let replacement = details("Final", "Dave", deadline(2099, 2, 2)?)?;
    ctx.repository.update(id, &replacement).await?;

    let stored = ctx
        .repository
        .find_by_id(id)
        .await?
        .ok_or("updated task should be found")?;
    assert_eq!(stored.details(), &replacement);
    assert!(stored.is_done());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn mark_done_is_idempotent() -> Result<(), BoxError> {
    let Some(ctx) = setup_context().await? else {
        return Ok(());
    };
    let id = ctx
        .repository
        .insert(&details("Ship", "Erin", deadline(2099, 1, 1)?)?)
        .await?;

    ctx.repository.mark_done(id).await?;
    ctx.repository.mark_done(id).await?;

    let stored = ctx
        .repository
        .find_by_id(id)
        .await?
        .ok_or("task should be found")?;
    assert!(stored.is_done());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_task_permanently() -> Result<(), BoxError> {
    let Some(ctx) = setup_context().await? else {
        return Ok(());
    };
    let id = ctx
        .repository
        .insert(&details("Scrap", "Frank", deadline(2099, 1, 1)?)?)
        .await?;

    ctx.repository.delete(id).await?;

    assert!(ctx.repository.find_by_id(id).await?.is_none());
    assert!(ctx.repository.list().await?.is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn writes_to_missing_task_report_not_found() -> Result<(), BoxError> {
    let Some(ctx) = setup_context().await? else {
        return Ok(());
    };
    let missing = TaskId::from_persisted(99);
    let replacement = details("Ghost", "Nobody", deadline(2099, 1, 1)?)?;

    let update = ctx.repository.update(missing, &replacement).await;
    let done = ctx.repository.mark_done(missing).await;
    let delete = ctx.repository.delete(missing).await;

    for result in [update, done, delete] {
        assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == missing));
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn legacy_row_without_assignee_reads_as_empty() -> Result<(), BoxError> {
    let Some(ctx) = setup_context().await? else {
        return Ok(());
    };
    ctx.execute_sql(
        "INSERT INTO task (task, deadline) VALUES ('Legacy', '2099-03-04T00:00:00Z')",
    )?;

    let tasks = ctx.repository.list().await?;
    let legacy = tasks.first().ok_or("legacy row should be listed")?;
    assert_eq!(legacy.description(), "Legacy");
    assert_eq!(legacy.assignee(), "");
    assert_eq!(legacy.deadline(), deadline(2099, 3, 4)?);
    assert!(!legacy.is_done());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn timed_out_insert_is_rolled_back() -> Result<(), BoxError> {
    let Some(ctx) = setup_context().await? else {
        return Ok(());
    };
    let limit = Duration::from_millis(200);
    let impatient = ctx.repository_with_timeout(limit)?;
    let blocked = details("Blocked", "Alice", deadline(2099, 1, 1)?)?;

    let mut lock_holder = ctx.connect()?;
    lock_holder.batch_execute("BEGIN; LOCK TABLE task IN ACCESS EXCLUSIVE MODE;")?;
    let result = impatient.insert(&blocked).await;
    lock_holder.batch_execute("COMMIT")?;

    assert!(
        matches!(&result, Err(TaskRepositoryError::Timeout(reported)) if *reported == limit),
        "expected a timeout, got {result:?}"
    );
    assert!(ctx.repository.list().await?.is_empty());

    impatient.insert(&blocked).await?;
    assert_eq!(ctx.repository.list().await?.len(), 1);
    Ok(())
}
