//! Task Commands
//!
//! CRUD calls against `/tasks`.

use crate::models::{Task, TaskDraft, TaskPatch};

use super::{check, client, read_json, url, ClientError};

pub async fn list_tasks() -> Result<Vec<Task>, ClientError> {
    let response = client().get(url("/tasks")).send().await?;
    read_json(response).await
}

pub async fn create_task(draft: &TaskDraft) -> Result<Task, ClientError> {
    let response = client().post(url("/tasks")).json(draft).send().await?;
    read_json(response).await
}

pub async fn update_task(id: &str, patch: &TaskPatch) -> Result<Task, ClientError> {
    let response = client()
        .put(url(&format!("/tasks/{id}")))
        .json(patch)
        .send()
        .await?;
    read_json(response).await
}

pub async fn delete_task(id: &str) -> Result<(), ClientError> {
    let response = client().delete(url(&format!("/tasks/{id}"))).send().await?;
    check(response).await.map(|_| ())
}
