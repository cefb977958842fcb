pub mod query;
pub mod repl;

pub use query::run_query_mode;
pub use repl::run_repl_mode;
