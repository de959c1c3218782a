//! CLI command handlers. Each command is in its own file.

mod check;
mod load;
mod print_urls;
mod replay;

pub use check::run_check;
pub use print_urls::run_print_urls;
pub use replay::run_replay;
