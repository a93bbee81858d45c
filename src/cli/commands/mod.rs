//! One file per subcommand. Each handler reports its own errors.

mod paths;
mod record;

pub use paths::cmd_paths;
pub use record::cmd_record;
