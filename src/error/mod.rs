// Copyright (c) 2025 Prefix Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error module for Prefix Complete.
//!
//! The prefix tree itself never fails. Errors come from the surfaces around
//! it: loading configuration, reading word lists, and writing output.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing_error::SpanTrace;

use crate::data_structures::prefix_tree::PrefixTreeError;

pub mod config;

/// Result type alias used throughout Prefix Complete.
pub type CompleteResult<T> = Result<T, CompleteError>;

/// Core error enum for Prefix Complete.
#[derive(Error, Debug)]
pub enum CompleteError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors occurring while filling a prefix tree.
    #[error("Prefix tree error: {0}")]
    PrefixTree(#[from] PrefixTreeError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: CompleteError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,

    /// Span trace information if available.
    pub trace: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: CompleteError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
            trace: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Adds trace information to the error context.
    pub fn with_trace<S: Into<String>>(mut self, trace: S) -> Self {
        self.trace = Some(trace.into());
        self
    }

    /// Captures the current tracing span stack as the trace.
    ///
    /// Spans are only recorded when the subscriber carries an `ErrorLayer`;
    /// otherwise the trace is left unset.
    pub fn with_span_trace(self) -> Self {
        let trace = SpanTrace::capture().to_string();
        if trace.trim().is_empty() {
            self
        } else {
            self.with_trace(trace)
        }
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// An error reporter that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            trace = context.trace.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Process-wide error reporter, set at most once.
static ERROR_REPORTER: OnceCell<Arc<dyn ErrorReporter>> = OnceCell::new();

/// Set the global error reporter.
///
/// # Returns
///
/// `false` if a reporter was already installed; the existing one is kept.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) -> bool {
    ERROR_REPORTER.set(reporter).is_ok()
}

/// Report an error through the global reporter.
///
/// Falls back to standard error output if no reporter is configured.
pub fn report_error(context: ErrorContext) {
    match ERROR_REPORTER.get() {
        Some(reporter) => reporter.report(context),
        None => eprintln!("Error: {context}"),
    }
}
