// Security module for file access control
//
// The conversion tools read files named by the client. This module makes
// sure those files stay inside the configured root directory.

pub mod path_validator;

pub use path_validator::{validate_path, PathSecurityError};
