pub mod bus;
pub mod client;
pub mod config;
pub mod session;

pub use bus::{AppEvent, EventBus};
pub use client::{CallError, HttpClient, Method, ReqwestClient, Request, Response};
pub use config::AppConfig;
pub use session::{Credentials, Session};

use std::sync::Arc;

/// Everything a pipeline needs to perform its side effects: the HTTP client
/// adapter, service locations, the live session, and the event bus.
#[derive(Clone)]
pub struct Environment {
    pub client: Arc<dyn HttpClient>,
    pub config: AppConfig,
    pub session: Session,
    pub bus: EventBus,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish()
    }
}

impl Environment {
    pub fn new(client: Arc<dyn HttpClient>, config: AppConfig, session: Session) -> Self {
        Self {
            client,
            config,
            session,
            bus: EventBus::default(),
        }
    }
}
