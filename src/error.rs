///
/// @package flagmask
///
/// @file Error functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use thiserror::Error;

/// Errors raised by flag and bitmask operations
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum BitmaskError {
    /// A flag of another enumeration was passed in
    #[error("invalid bitmask value: expected `{expected}`, found `{found}`")]
    TypeMismatch {
        /// Type name of the authoritative enumeration
        expected: &'static str,
        /// Type name of the offending value
        found: &'static str,
    },
}

impl BitmaskError {
    /// Type name of the value that caused the error
    pub fn found(&self) -> &'static str {
        match self {
            Self::TypeMismatch { found, .. } => found,
        }
    }
}

pub type Result<T, E = BitmaskError> = std::result::Result<T, E>;
