mod action;
mod reducer;
pub mod selectors;
mod state;

pub use action::ProcessesAction;
pub use reducer::reduce;
pub use state::ProcessesState;
