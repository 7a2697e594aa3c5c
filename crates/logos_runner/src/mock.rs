//! Mock formatter for testing.
//!
//! Provides a configurable implementation of the Formatter trait for use in
//! tests without requiring clang-format to be installed.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;

use crate::config::FormatConfig;
use crate::error::{RunnerError, RunnerResult};
use crate::runner::{Formatter, InvocationResult};

/// Text transformation applied by the mock in place of formatting.
pub type TransformFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// What the mock writes to stdout.
#[derive(Clone)]
pub enum MockOutput {
    /// Return the input unchanged.
    Echo,
    /// Return fixed text.
    Text(String),
    /// Return the input run through a function.
    Transform(TransformFn),
}

impl fmt::Debug for MockOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Echo => write!(f, "Echo"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Transform(_) => write!(f, "Transform(..)"),
        }
    }
}

/// Predefined mock response for a format call.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub exit_code: i32,
    pub output: MockOutput,
    pub stderr: String,
    pub duration_ms: u64,
}

impl MockResponse {
    pub fn echo() -> Self {
        Self {
            exit_code: 0,
            output: MockOutput::Echo,
            stderr: String::new(),
            duration_ms: 5,
        }
    }

    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            output: MockOutput::Text(stdout.into()),
            ..Self::echo()
        }
    }

    pub fn transform(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self {
            output: MockOutput::Transform(Arc::new(f)),
            ..Self::echo()
        }
    }

    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            output: MockOutput::Text(String::new()),
            stderr: stderr.into(),
            duration_ms: 5,
        }
    }

    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = stderr.into();
        self
    }

    fn render(&self, input: &str) -> String {
        match &self.output {
            MockOutput::Echo => input.to_string(),
            MockOutput::Text(text) => text.clone(),
            MockOutput::Transform(f) => f(input),
        }
    }
}

/// Captured call information for verification.
#[derive(Debug, Clone)]
pub struct CapturedCall {
    pub method: String,
    pub content: Option<String>,
    pub assume_filename: Option<PathBuf>,
    pub style: Option<String>,
}

/// Mock formatter for testing.
///
/// Captures all calls and returns predefined responses, cycling through
/// them when more calls are made than responses were added.
#[derive(Clone)]
pub struct MockFormatter {
    available: Arc<RwLock<bool>>,
    version: Arc<RwLock<String>>,
    responses: Arc<RwLock<Vec<MockResponse>>>,
    response_index: Arc<AtomicUsize>,
    captured_calls: Arc<RwLock<Vec<CapturedCall>>>,
}

impl Default for MockFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFormatter {
    pub fn new() -> Self {
        Self {
            available: Arc::new(RwLock::new(true)),
            version: Arc::new(RwLock::new("mock clang-format version 17.0.0".to_string())),
            responses: Arc::new(RwLock::new(Vec::new())),
            response_index: Arc::new(AtomicUsize::new(0)),
            captured_calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Set whether the formatter is available.
    pub fn set_available(self, available: bool) -> Self {
        *self.available.write() = available;
        self
    }

    pub fn set_version(self, version: impl Into<String>) -> Self {
        *self.version.write() = version.into();
        self
    }

    /// Add a mock response for the next format call.
    pub fn add_response(self, response: MockResponse) -> Self {
        self.responses.write().push(response);
        self
    }

    pub fn with_responses(self, responses: Vec<MockResponse>) -> Self {
        *self.responses.write() = responses;
        self
    }

    pub fn get_calls(&self) -> Vec<CapturedCall> {
        self.captured_calls.read().clone()
    }

    pub fn call_count(&self) -> usize {
        self.captured_calls.read().len()
    }

    /// Get calls to a specific method.
    pub fn get_method_calls(&self, method: &str) -> Vec<CapturedCall> {
        self.captured_calls
            .read()
            .iter()
            .filter(|c| c.method == method)
            .cloned()
            .collect()
    }

    fn record_call(&self, call: CapturedCall) {
        self.captured_calls.write().push(call);
    }

    fn next_response(&self) -> MockResponse {
        let responses = self.responses.read();
        if responses.is_empty() {
            return MockResponse::echo();
        }
        let index = self.response_index.fetch_add(1, Ordering::SeqCst);
        responses
            .get(index % responses.len())
            .cloned()
            .unwrap_or_else(MockResponse::echo)
    }

    fn check_available(&self) -> RunnerResult<()> {
        if *self.available.read() {
            Ok(())
        } else {
            Err(RunnerError::FormatterUnavailable(
                "mock formatter is unavailable".to_string(),
            ))
        }
    }
}

impl Formatter for MockFormatter {
    fn is_available(&self) -> bool {
        self.record_call(CapturedCall {
            method: "is_available".to_string(),
            content: None,
            assume_filename: None,
            style: None,
        });
        *self.available.read()
    }

    fn version(&self) -> RunnerResult<String> {
        self.record_call(CapturedCall {
            method: "version".to_string(),
            content: None,
            assume_filename: None,
            style: None,
        });
        self.check_available()?;
        Ok(self.version.read().clone())
    }

    fn format(
        &self,
        content: &str,
        assume_filename: &Path,
        config: &FormatConfig,
    ) -> RunnerResult<InvocationResult> {
        self.record_call(CapturedCall {
            method: "format".to_string(),
            content: Some(content.to_string()),
            assume_filename: Some(assume_filename.to_path_buf()),
            style: Some(config.style_arg()?),
        });
        self.check_available()?;

        let response = self.next_response();
        if response.exit_code != 0 {
            return Err(RunnerError::FormatterError {
                code: response.exit_code,
                diagnostics: response.stderr,
            });
        }

        let started_at = Utc::now();
        let finished_at = started_at + chrono::Duration::milliseconds(response.duration_ms as i64);

        Ok(InvocationResult {
            exit_code: 0,
            stdout: response.render(content),
            stderr: response.stderr.clone(),
            started_at,
            finished_at,
            duration_ms: response.duration_ms,
        })
    }
}
