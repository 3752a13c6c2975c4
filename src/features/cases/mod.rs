mod action;
mod reducer;
pub mod selectors;
mod state;

pub use action::CasesAction;
pub use reducer::reduce;
pub use state::CasesState;
