///
/// @package flagmask
///
/// @file Library functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

mod error;
mod flag;
mod bitmask;
mod macros;
pub mod logger;

#[cfg(test)]
mod tests;

pub use crate::error::{BitmaskError, Result};
pub use crate::flag::{verify_cases, AnyFlag, FlagValue, Unsigned};
pub use crate::bitmask::Bitmask;
