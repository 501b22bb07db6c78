//! # dahao-core — DAHAO Repository Structure Validation
//!
//! Checks that a DAHAO template repository has the expected directory and
//! file layout, that every YAML file in it parses, and that
//! `.dahao/config.yaml` carries the keys the rest of the tooling relies on.
//!
//! ## Checks
//!
//! Run in fixed order by [`Validator::run`]. Every check always runs, even
//! after earlier failures:
//!
//! 1. **Directories** — `.dahao/`, `constitution/`, `terms/`, `governance/`,
//!    `tokens/` exist and are directories.
//! 2. **YAML syntax** — every `*.yaml` / `*.yml` file under the root parses.
//! 3. **Required files** — config, version marker, and the two manifests.
//! 4. **Config keys** — `dahao.version` and `organization.name`.
//!
//! Failures are recorded as messages in a [`ValidationReport`]; nothing in a
//! check aborts the run.

pub mod checks;
pub mod error;
pub mod layout;
pub mod report;
pub mod validator;
pub mod yaml;

// Re-export primary types.
pub use checks::Findings;
pub use error::{Issue, YamlLoadError};
pub use layout::resolve_repo_root;
pub use report::ValidationReport;
pub use validator::Validator;
