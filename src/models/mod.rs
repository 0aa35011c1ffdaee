mod chat;
mod feedback;
mod project;

pub use chat::*;
pub use feedback::*;
pub use project::*;
