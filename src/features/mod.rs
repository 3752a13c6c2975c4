pub mod cases;
pub mod dashboard;
pub mod processes;
pub mod shift;
pub mod tasks;
