mod command;
mod display;
mod pipeline;
mod sequence;

pub use command::{Command, RedirectMode, Redirection};
pub use pipeline::Pipeline;
pub use sequence::Sequence;
