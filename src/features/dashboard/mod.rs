mod action;
mod epic;
mod reducer;
pub mod selectors;
mod state;

pub use action::DashboardAction;
pub use reducer::reduce;
pub use state::{DashboardState, TaskCounts};

pub(crate) use epic::spawn;
