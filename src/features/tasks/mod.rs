mod action;
mod reducer;
pub mod selectors;
mod state;

pub use action::TasksAction;
pub use reducer::reduce;
pub use state::{TasksState, DEFAULT_SORT};
