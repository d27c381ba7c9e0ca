pub mod event;
pub mod models;
pub use event::*;
pub use models::*;
