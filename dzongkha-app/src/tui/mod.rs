pub mod app;
pub mod inputs;
pub mod theme;
pub mod transition;
pub mod views;
