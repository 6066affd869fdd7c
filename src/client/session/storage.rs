//! Key-value storage backing the session.
//!
//! [`LocalStorage`] wraps `window.localStorage` for web builds; [`MemoryStorage`] is
//! a shared in-memory map for tests and non-web builds. Neither caches anything
//! on top of the underlying store.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::client::error::SessionError;

pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// In-memory storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.items.borrow_mut().remove(key);

        Ok(())
    }
}

/// Browser `localStorage`.
#[cfg(feature = "web")]
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "web")]
impl LocalStorage {
    pub fn new() -> Result<Self, SessionError> {
        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(SessionError::StorageUnavailable)?;

        Ok(Self { storage })
    }
}

#[cfg(feature = "web")]
impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| SessionError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.storage
            .remove_item(key)
            .map_err(|e| SessionError::Remove {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}
