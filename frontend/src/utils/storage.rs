use std::cell::RefCell;
use std::rc::Rc;

pub const AUTH_TOKEN_KEY: &str = "auth_token";

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<web_sys::Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Persistence for the bearer token.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str) -> Result<(), String>;
    fn clear(&self);
}

/// Browser `localStorage` under [`AUTH_TOKEN_KEY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

#[cfg(target_arch = "wasm32")]
impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        local_storage()
            .ok()?
            .get_item(AUTH_TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) -> Result<(), String> {
        local_storage()?
            .set_item(AUTH_TOKEN_KEY, token)
            .map_err(|_| "Failed to persist token".to_string())
    }

    fn clear(&self) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(AUTH_TOKEN_KEY);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        None
    }

    fn set(&self, _token: &str) -> Result<(), String> {
        Err("No localStorage".to_string())
    }

    fn clear(&self) {}
}

#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Rc::new(RefCell::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) -> Result<(), String> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

pub fn default_token_store() -> Rc<dyn TokenStore> {
    if cfg!(target_arch = "wasm32") {
        Rc::new(LocalStorageTokenStore)
    } else {
        Rc::new(MemoryTokenStore::default())
    }
}
