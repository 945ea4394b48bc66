use std::collections::HashMap;

use crate::error::Result;
use crate::models::user::User;

pub const SESSION_USER_KEY: &str = "nordmatch_user";

/// String key/value storage with browser `localStorage` semantics.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    entries: HashMap<String, String>,
}

impl LocalStorage {
    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove_item(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login { registered: bool },
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login { registered: false } => "/login",
            Route::Login { registered: true } => "/login?registered=true",
            Route::Dashboard => "/dashboard",
        }
    }
}

/// Remembers the signed-in user across reloads. Only presence matters for
/// routing; nothing here is an authorization check.
#[derive(Debug, Clone, Default)]
pub struct SessionService {
    storage: LocalStorage,
}

impl SessionService {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    pub fn remember(&mut self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user)?;
        self.storage.set_item(SESSION_USER_KEY, raw);
        tracing::info!(user_id = %user.id, "session stored");
        Ok(())
    }

    pub fn current_user(&self) -> Result<Option<User>> {
        self.storage
            .get_item(SESSION_USER_KEY)
            .map(serde_json::from_str)
            .transpose()
            .map_err(Into::into)
    }

    pub fn forget(&mut self) {
        self.storage.remove_item(SESSION_USER_KEY);
        tracing::info!("session cleared");
    }

    pub fn landing_route(&self) -> Route {
        if self.storage.get_item(SESSION_USER_KEY).is_some() {
            Route::Dashboard
        } else {
            Route::Login { registered: false }
        }
    }
}
