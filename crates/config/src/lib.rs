mod config;
mod site;

pub use self::config::*;
pub use self::site::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
