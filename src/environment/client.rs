use async_trait::async_trait;
use serde_json::Value;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Delete => write!(f, "DELETE"),
        }
    }
}

/// A request descriptor. Built fresh for every attempt so the bearer token
/// is always the one currently held by the session.
#[derive(Clone, Debug)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub bearer: String,
    pub entity: Option<Value>,
}

impl Request {
    pub fn get(path: String, bearer: String) -> Self {
        Self {
            method: Method::Get,
            path,
            bearer,
            entity: None,
        }
    }

    pub fn post(path: String, bearer: String, entity: Value) -> Self {
        Self {
            method: Method::Post,
            path,
            bearer,
            entity: Some(entity),
        }
    }

    pub fn delete(path: String, bearer: String) -> Self {
        Self {
            method: Method::Delete,
            path,
            bearer,
            entity: None,
        }
    }
}

/// A transport-successful response. Success actions carry this undecoded;
/// reducers decide what subset to retain.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: u16,
    pub entity: Value,
}

impl Response {
    /// A 200 with an empty collection body. Whether this means "genuinely
    /// absent" or "not provisioned yet" depends on the pipeline observing it.
    pub fn is_empty_collection(&self) -> bool {
        self.status == 200 && self.entity.as_array().map(Vec::is_empty).unwrap_or(false)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CallError {
    /// The request never produced a status line (connect/IO failure).
    Transport(String),
    /// The service answered with a non-success status.
    Status { code: u16, message: String },
    /// Transport succeeded but the record the caller is polling for has not
    /// been provisioned yet. Only ever synthesized inside a polling pipeline,
    /// never by the adapter itself.
    NotReady,
}

impl CallError {
    pub fn is_transient(&self) -> bool {
        match self {
            CallError::Transport(_) => true,
            CallError::Status { code, .. } => *code >= 500,
            CallError::NotReady => false,
        }
    }
}

impl std::fmt::Display for CallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallError::Transport(message) => {
                write!(f, "The service could not be reached: {message}")
            }
            CallError::Status { code, message } if message.is_empty() => {
                write!(f, "The service responded with status {code}")
            }
            CallError::Status { code, message } => {
                write!(f, "The service responded with status {code}: {message}")
            }
            CallError::NotReady => write!(f, "The requested record is not available yet"),
        }
    }
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response, CallError>;
}

#[derive(Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: Request) -> Result<Response, CallError> {
        log::trace!("{} {}", request.method, request.path);
        let mut builder = match request.method {
            Method::Get => self.inner.get(&request.path),
            Method::Post => self.inner.post(&request.path),
            Method::Delete => self.inner.delete(&request.path),
        };
        builder = builder
            .header(reqwest::header::ACCEPT, "application/json")
            .bearer_auth(&request.bearer);
        if let Some(ref entity) = request.entity {
            builder = builder.json(entity);
        }
        let response = builder
            .send()
            .await
            .map_err(|e| CallError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let entity = response.json::<Value>().await.unwrap_or(Value::Null);
        if (200..300).contains(&status) {
            Ok(Response { status, entity })
        } else {
            let message = entity
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            Err(CallError::Status {
                code: status,
                message,
            })
        }
    }
}

/// Scripted client for store-level tests.
#[cfg(debug_assertions)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    struct Route {
        method: Method,
        fragment: String,
        responses: VecDeque<Result<Response, CallError>>,
        last: Option<Result<Response, CallError>>,
    }

    /// Answers requests from per-route scripts; once a route's queue is
    /// drained, the last scripted result repeats. Records every request.
    #[derive(Default)]
    pub struct MockClient {
        routes: Mutex<Vec<Route>>,
        requests: Mutex<Vec<Request>>,
    }

    impl MockClient {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub fn on(
            &self,
            method: Method,
            fragment: &str,
            responses: Vec<Result<Response, CallError>>,
        ) {
            let mut routes = self.routes.lock().expect("mock routes");
            routes.push(Route {
                method,
                fragment: fragment.to_string(),
                responses: responses.into_iter().collect(),
                last: None,
            });
        }

        /// Number of recorded requests with this method whose path contains
        /// `fragment`.
        pub fn calls(&self, method: Method, fragment: &str) -> usize {
            self.requests
                .lock()
                .expect("mock requests")
                .iter()
                .filter(|r| r.method == method && r.path.contains(fragment))
                .count()
        }

        pub fn requests(&self) -> Vec<Request> {
            self.requests.lock().expect("mock requests").clone()
        }
    }

    #[async_trait]
    impl HttpClient for MockClient {
        async fn send(&self, request: Request) -> Result<Response, CallError> {
            self.requests
                .lock()
                .expect("mock requests")
                .push(request.clone());
            let mut routes = self.routes.lock().expect("mock routes");
            let route = routes
                .iter_mut()
                .find(|r| r.method == request.method && request.path.contains(&r.fragment));
            let Some(route) = route else {
                log::error!("no scripted response for {} {}", request.method, request.path);
                return Err(CallError::Status {
                    code: 404,
                    message: format!("no scripted response for {}", request.path),
                });
            };
            if let Some(next) = route.responses.pop_front() {
                route.last = Some(next.clone());
                next
            } else {
                route.last.clone().unwrap_or_else(|| {
                    Err(CallError::Status {
                        code: 404,
                        message: "scripted responses exhausted".to_string(),
                    })
                })
            }
        }
    }

    pub fn ok(entity: Value) -> Result<Response, CallError> {
        Ok(Response {
            status: 200,
            entity,
        })
    }

    pub fn status(code: u16, message: &str) -> Result<Response, CallError> {
        Err(CallError::Status {
            code,
            message: message.to_string(),
        })
    }

    pub fn server_error() -> Result<Response, CallError> {
        status(500, "internal server error")
    }
}
