mod action;
mod epic;
mod reducer;
pub mod selectors;
mod state;

pub use action::ShiftAction;
pub use reducer::reduce;
pub use state::{ShiftRecord, ShiftState};

pub(crate) use epic::spawn;
