//! Login Stub
//!
//! A single demo account checked against configured credentials.
//! There is no password hashing or token verification here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone)]
pub struct DemoAccount {
    password: String,
    user: User,
}

impl DemoAccount {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            user: User {
                id: "u1".to_string(),
                email: email.into(),
                name: "Test User".to_string(),
            },
        }
    }

    pub fn authenticate(&self, credentials: &Credentials) -> DomainResult<Session> {
        if credentials.email.trim() != self.user.email || credentials.password != self.password {
            return Err(DomainError::Unauthorized);
        }
        Ok(Session {
            token: format!("session-{}", Uuid::new_v4().simple()),
            user: self.user.clone(),
        })
    }
}
