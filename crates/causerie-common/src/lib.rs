pub mod errors;
pub mod notifications;

pub use errors::{CauserieError, ConfigError};
pub use notifications::{Notification, NotificationLevel};

pub type Result<T> = std::result::Result<T, CauserieError>;
