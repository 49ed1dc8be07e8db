//! Application-level error handling for the handler.
//!
//! Library crates in this workspace define their own typed errors. Once those errors reach the handler binary, where
//! the only remaining decision is "log it and exit", they are folded into [`GenericError`] and annotated with
//! human-readable context describing what the handler was doing at the time.
#![deny(warnings)]
#![deny(missing_docs)]

use std::fmt::Display;

/// A type-erased error with an optional chain of context messages.
pub type GenericError = anyhow::Error;

/// Constructs a [`GenericError`].
///
/// Accepts a string literal, a format string followed by its arguments, or an existing error value. When given an
/// existing error, that error becomes the source of the returned error, so its cause chain is kept intact.
#[macro_export]
macro_rules! generic_error {
    ($msg:literal $(,)?) => { $crate::__private::anyhow!($msg) };
    ($err:expr $(,)?) => { $crate::__private::anyhow!($err) };
    ($fmt:expr, $($arg:tt)*) => { $crate::__private::anyhow!($fmt, $($arg)*) };
}

#[doc(hidden)]
pub mod __private {
    pub use anyhow::anyhow;
}

mod sealed {
    pub trait Sealed {}

    impl<T, E> Sealed for Result<T, E> {}
    impl<T> Sealed for Option<T> {}
}

/// Extension methods for attaching context to fallible values.
///
/// This mirrors `anyhow::Context` under a distinct name, so it can be imported alongside `snafu::ResultExt` without
/// the two traits' `context` methods colliding.
pub trait ErrorContext<T>: sealed::Sealed {
    /// Converts the failure case into a [`GenericError`] carrying `context`.
    fn error_context<C>(self, context: C) -> Result<T, GenericError>
    where
        C: Display + Send + Sync + 'static;

    /// Converts the failure case into a [`GenericError`], computing the context only when a failure occurs.
    fn with_error_context<C, F>(self, f: F) -> Result<T, GenericError>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    Result<T, E>: anyhow::Context<T, E>,
{
    fn error_context<C>(self, context: C) -> Result<T, GenericError>
    where
        C: Display + Send + Sync + 'static,
    {
        anyhow::Context::context(self, context)
    }

    fn with_error_context<C, F>(self, f: F) -> Result<T, GenericError>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        anyhow::Context::with_context(self, f)
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn error_context<C>(self, context: C) -> Result<T, GenericError>
    where
        C: Display + Send + Sync + 'static,
    {
        anyhow::Context::context(self, context)
    }

    fn with_error_context<C, F>(self, f: F) -> Result<T, GenericError>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        anyhow::Context::with_context(self, f)
    }
}
