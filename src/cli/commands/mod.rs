//! CLI command implementations

pub mod check;
pub mod config;
pub mod match_paths;
pub mod run;
pub mod serve;

pub use check::execute as check;
pub use config::execute as config;
pub use match_paths::execute as match_paths;
pub use run::execute as run;
pub use serve::execute as serve;
