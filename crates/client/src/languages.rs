//! Static table of languages the execution sandbox accepts.
//!
//! The list is hard-coded, not derived from a server capability query, so it
//! can drift when the sandbox adds or retires runtimes. Versions match the
//! runtimes the sandbox pins today.

use codebin_domain::{ExecutionFile, ExecutionRequest};

/// One runnable language: wire identifier, display name, sandbox runtime
/// version and the conventional source-file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedLanguage {
    pub id: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub extension: &'static str,
}

/// Languages the execution sandbox currently accepts.
pub const SUPPORTED_LANGUAGES: &[SupportedLanguage] = &[
    SupportedLanguage { id: "javascript", name: "JavaScript", version: "18.15.0", extension: "js" },
    SupportedLanguage { id: "python", name: "Python", version: "3.10.0", extension: "py" },
    SupportedLanguage { id: "java", name: "Java", version: "15.0.2", extension: "java" },
    SupportedLanguage { id: "cpp", name: "C++", version: "10.2.0", extension: "cpp" },
    SupportedLanguage { id: "c", name: "C", version: "10.2.0", extension: "c" },
    SupportedLanguage { id: "csharp", name: "C#", version: "6.12.0", extension: "cs" },
    SupportedLanguage { id: "go", name: "Go", version: "1.16.2", extension: "go" },
    SupportedLanguage { id: "rust", name: "Rust", version: "1.68.2", extension: "rs" },
    SupportedLanguage { id: "typescript", name: "TypeScript", version: "5.0.3", extension: "ts" },
    SupportedLanguage { id: "php", name: "PHP", version: "8.2.3", extension: "php" },
    SupportedLanguage { id: "ruby", name: "Ruby", version: "3.0.1", extension: "rb" },
    SupportedLanguage { id: "swift", name: "Swift", version: "5.3.3", extension: "swift" },
    SupportedLanguage { id: "kotlin", name: "Kotlin", version: "1.8.20", extension: "kt" },
    SupportedLanguage { id: "scala", name: "Scala", version: "3.2.2", extension: "scala" },
];

/// Look up a language by its wire identifier.
pub fn find(id: &str) -> Option<&'static SupportedLanguage> {
    SUPPORTED_LANGUAGES.iter().find(|language| language.id == id)
}

impl SupportedLanguage {
    /// Build an execution request for a single source file in this language,
    /// using the pinned runtime version and conventional file name.
    pub fn request_for(&self, source: impl Into<String>) -> ExecutionRequest {
        ExecutionRequest {
            language: self.id.to_string(),
            version: self.version.to_string(),
            files: vec![ExecutionFile {
                name: Some(format!("main.{}", self.extension)),
                content: source.into(),
            }],
            stdin: None,
            args: None,
            compile_timeout: None,
            run_timeout: None,
        }
    }
}
