use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::{info, warn};

use crate::api::{ApiError, HttpPropertySource};
use crate::api::types::LoginResponse;
use crate::models::User;

/// Where the session token survives between runs
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Token kept only for the lifetime of the process
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, token: &str) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}

/// Token persisted to a file, best-effort
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) {
        if let Err(err) = fs::write(&self.path, token) {
            warn!("failed to persist session token: {err}");
        }
    }

    fn clear(&self) {
        if self.path.exists() {
            if let Err(err) = fs::remove_file(&self.path) {
                warn!("failed to clear session token: {err}");
            }
        }
    }
}

/// Explicitly-scoped session state
///
/// Passed to the components that need the signed-in user instead of living
/// in process-wide globals. On app start `restore` revalidates a persisted
/// token; `logout` tears down both the persisted and in-memory state.
pub struct SessionContext<S: TokenStore> {
    user: Option<User>,
    token: Option<String>,
    store: S,
}

impl<S: TokenStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self {
            user: None,
            token: None,
            store,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Adopt a successful login response
    pub fn apply_login(&mut self, response: LoginResponse) {
        self.store.save(&response.token);
        self.token = Some(response.token);
        self.user = Some(response.user);
    }

    /// Exchange credentials for a session
    pub async fn login(
        &mut self,
        api: &HttpPropertySource,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let response = api.login(email, password).await?;
        self.apply_login(response);
        Ok(())
    }

    /// Try to revive a persisted session; a stale token is discarded
    pub async fn restore(&mut self, api: &HttpPropertySource) -> bool {
        let Some(token) = self.store.load() else {
            return false;
        };
        match api.me(&token).await {
            Ok(user) => {
                info!("restored session for {}", user.email);
                self.user = Some(user);
                self.token = Some(token);
                true
            }
            Err(err) => {
                warn!("stored session token rejected: {err}");
                self.store.clear();
                false
            }
        }
    }

    /// Clear the persisted token and the in-memory session
    pub fn logout(&mut self) {
        self.store.clear();
        self.token = None;
        self.user = None;
    }
}
