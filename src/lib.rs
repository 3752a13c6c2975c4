pub mod environment;
pub mod features;
pub mod logging;
pub mod retry;
pub mod store;

pub use environment::Environment;
pub use store::{Action, AppState, Dispatcher, Store};
