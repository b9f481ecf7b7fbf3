//! Application error type.
//!
//! Each chart run is a straight pipeline (fetch, transform, scale, render, write) and
//! the first failing stage ends it. That stage builds an [`AppError`] at the point of
//! failure with `.map_err(...)`, picking the exit code from the kind of input that was
//! at fault, and `?` carries it unchanged up to `app::run`. `main` prints the message
//! to stderr and exits with the code. Under `svgcharts all` the two charts fail
//! independently and the first error is reported after both have been attempted.
//!
//! - `2`: local I/O or configuration (dataset file, output/export paths, layout values)
//! - `3`: the dataset endpoint (transport errors, non-2xx status, unreadable body)
//! - `4`: the dataset contents (invalid JSON, the first malformed record, no records)

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
