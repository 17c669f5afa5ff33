pub mod commands;
pub mod context;
pub mod dispatch;
pub mod logging;
pub mod region;
pub mod repl;
pub mod view;

pub use context::CliContext;
pub use dispatch::{Response, respond};
pub use repl::readline;
