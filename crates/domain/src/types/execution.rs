//! Code-execution sandbox contracts
//!
//! The sandbox speaks snake_case JSON (Piston-shaped), so these types keep
//! serde's default field naming. The client treats the whole exchange as an
//! opaque remote call and does not interpret exit codes beyond display.

use serde::{Deserialize, Serialize};

/// One source file in an execution request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub content: String,
}

/// Request body for `POST /execute`.
///
/// `compile_timeout` and `run_timeout` (milliseconds) are advisory values
/// forwarded to the sandbox, not enforced locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRequest {
    pub language: String,
    pub version: String,
    pub files: Vec<ExecutionFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile_timeout: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_timeout: Option<u64>,
}

/// Output of one sandbox phase (compile or run).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<String>,
}

/// Result of `POST /execute`; `compile` is present only for compiled
/// languages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub language: String,
    pub version: String,
    pub run: ProcessOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile: Option<ProcessOutput>,
}
