//! JSON output types for machine-readable CLI output.
//!
//! Every command run with `--json` prints exactly one envelope to stdout:
//! `success`, a list of `errors`, and a command-specific `result`.

use radiance_backend_svg::{AvatarPlan, SeedOrigin};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Backend failures pass through their own `AVATAR_XXX` codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Unknown file extension
    pub const UNKNOWN_EXTENSION: &str = "CLI_002";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_003";
    /// Command-line option value could not be parsed
    pub const INVALID_OPTION: &str = "CLI_004";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_005";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_006";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "AVATAR_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source or destination file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Output of `radiance generate --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether generation succeeded
    pub success: bool,
    /// Errors encountered during generation
    pub errors: Vec<JsonError>,
    /// Generation result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
}

/// Details of a rendered avatar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    /// The seed actually hashed
    pub seed: String,
    /// "provided" or "random"
    pub seed_origin: String,
    /// Hex digest of the seed
    pub digest: String,
    /// Output format ("svg" or "data_uri")
    pub format: String,
    /// Output path (when written to a file)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Length of the output in bytes
    pub bytes: usize,
    /// The output itself (when not written to a file)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl GenerateOutput {
    /// Creates a successful generate output.
    pub fn success(result: GenerateResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed generate output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Output of `radiance inspect --json`.
#[derive(Debug, Clone, Serialize)]
pub struct InspectOutput {
    /// Whether inspection succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// The derived values (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
}

/// Derived values for one seed.
#[derive(Debug, Clone, Serialize)]
pub struct InspectResult {
    #[serde(flatten)]
    pub plan: AvatarPlan,
    /// Number of drawn pixel cells, mirrors included
    pub cell_count: usize,
}

impl InspectOutput {
    /// Creates a successful inspect output.
    pub fn success(plan: AvatarPlan) -> Self {
        let cell_count = plan.pixel_cells.len();
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(InspectResult { plan, cell_count }),
        }
    }

    /// Creates a failed inspect output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Snake-case name of a seed origin.
pub fn seed_origin_name(origin: SeedOrigin) -> &'static str {
    match origin {
        SeedOrigin::Provided => "provided",
        SeedOrigin::Random => "random",
    }
}
