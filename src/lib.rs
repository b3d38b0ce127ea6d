pub mod config;
pub mod copy;
pub mod flow;
pub mod paywall;
pub mod reading;
pub mod ui;
pub mod wizard;
