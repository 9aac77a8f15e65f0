pub mod analyze;
pub mod config;
pub mod dispatch;
pub mod run;
pub mod schema;
