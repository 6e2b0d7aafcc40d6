mod prompt;
mod reply;
mod service;
mod types;

pub use prompt::build_prompt;
pub use reply::*;
pub use service::AssistantService;
pub use types::*;
