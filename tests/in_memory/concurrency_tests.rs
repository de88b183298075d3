//! Parallel requests against one shared in-memory store.

use std::collections::BTreeSet;
use std::sync::Arc;

use mockable::DefaultClock;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    services::{CreateTaskRequest, TaskLifecycleService},
};
use tokio::task::JoinSet;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creations_get_distinct_ids() -> Result<(), eyre::Report> {
    let service = TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    );

    let mut creations = JoinSet::new();
    for index in 0..32 {
        let worker = service.clone();
        creations.spawn(async move {
            worker
                .create(CreateTaskRequest::new(
                    format!("task {index}"),
                    "Alice",
                    "2099-01-01",
                ))
                .await
        });
    }

    let mut ids = BTreeSet::new();
    while let Some(joined) = creations.join_next().await {
        ids.insert(joined??.value());
    }

    assert_eq!(ids.len(), 32);
    assert_eq!(ids.first().copied(), Some(1));
    assert_eq!(ids.last().copied(), Some(32));
    assert_eq!(service.list().await?.len(), 32);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_mark_done_on_same_task_all_succeed() -> Result<(), eyre::Report> {
    let service = TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    );
    let id = service
        .create(CreateTaskRequest::new("Shared", "Bob", "2099-01-01"))
        .await?;

    let mut completions = JoinSet::new();
    for _ in 0..8 {
        let worker = service.clone();
        completions.spawn(async move { worker.mark_done(id).await });
    }
    while let Some(joined) = completions.join_next().await {
        joined??;
    }

    assert!(service.get(id).await?.is_done);
    Ok(())
}
