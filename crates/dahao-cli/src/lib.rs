//! # dahao-cli — DAHAO Structure Validator CLI
//!
//! Provides the `dahao-validate` command, replacing `scripts/validate.py`.
//!
//! ```bash
//! dahao-validate                   # validate the current directory
//! dahao-validate path/to/checkout  # descends into dahao-template/ if present
//! dahao-validate --format json .
//! ```
//!
//! Exit code is 0 when every check passes and 1 otherwise.

pub mod validate;
