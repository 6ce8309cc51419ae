use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrayerError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Failed to persist settings: {0}")]
    Persistence(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type PrayerResult<T> = Result<T, PrayerError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> PrayerResult<T>;
    fn with_context<F>(self, f: F) -> PrayerResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> PrayerResult<T> {
        self.map_err(|e| PrayerError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> PrayerResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| PrayerError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> PrayerResult<T> {
        self.ok_or_else(|| PrayerError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> PrayerResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| PrayerError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! prayer_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::PrayerError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::PrayerError::$error_type(format!($fmt, $($arg)*))
    };
}
