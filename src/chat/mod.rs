mod session;
mod store;
mod types;

pub use session::ChatSession;
pub use store::{SessionStore, SharedSession};
pub use types::*;
