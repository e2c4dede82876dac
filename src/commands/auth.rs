//! Auth Commands

use crate::models::{Credentials, Session};

use super::{check, client, read_json, url, ClientError};

pub async fn login(email: &str, password: &str) -> Result<Session, ClientError> {
    let response = client()
        .post(url("/auth/login"))
        .json(&Credentials { email, password })
        .send()
        .await?;
    read_json(response).await
}

pub async fn logout() -> Result<(), ClientError> {
    let response = client().post(url("/auth/logout")).send().await?;
    check(response).await.map(|_| ())
}
