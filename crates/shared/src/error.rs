#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("unknown meal option: {0}")]
    UnknownMealOption(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("{0}")]
    Flow(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<time::error::Parse> for Error {
    fn from(value: time::error::Parse) -> Self {
        Self::InvalidDate(value.to_string())
    }
}

impl From<time::error::ComponentRange> for Error {
    fn from(value: time::error::ComponentRange) -> Self {
        Self::InvalidDate(value.to_string())
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Flow(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Flow(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Flow(format!($fmt, $($arg)*)))
    };
}
