pub mod commands;
pub mod io;
pub mod menus;
pub mod output;
mod shell;
pub mod shell_context;

pub use shell::{run_cli, run_loop, run_session};
pub use shell_context::{CliMode, ShellContext};
