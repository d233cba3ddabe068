pub mod action;
pub mod module;
pub mod session;

pub use action::{Action, NotifyLevel};
pub use module::Module;
pub use session::{Portal, Role, Session, SessionAction};
