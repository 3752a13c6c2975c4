use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub token: String,
    pub email: String,
}

/// The authenticated session, shared across pipelines. Tokens expire and are
/// refreshed out-of-band by the identity broker, so callers read the token at
/// the moment a request is built, never earlier.
#[derive(Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<Credentials>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish()
    }
}

impl Session {
    pub fn new(token: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Credentials {
                token: token.into(),
                email: email.into(),
            })),
        }
    }

    /// Swaps in freshly refreshed credentials.
    pub fn replace(&self, credentials: Credentials) {
        if let Ok(mut inner) = self.inner.write() {
            *inner = credentials;
        }
    }

    pub fn token(&self) -> String {
        self.inner
            .read()
            .map(|c| c.token.clone())
            .unwrap_or_default()
    }

    pub fn email(&self) -> String {
        self.inner
            .read()
            .map(|c| c.email.clone())
            .unwrap_or_default()
    }
}
