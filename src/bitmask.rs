///
/// @package flagmask
///
/// @file Bitmask functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use bitflags::parser::WriteHex;
use log::debug;
use stdext::function_name;
use crate::error::{BitmaskError, Result};
use crate::flag::{AnyFlag, FlagValue};

/// Packed set of flags of the enumeration `F`
///
/// The stored bits are always a union of cases of `F`: every mutation checks the type of
/// each value before anything is combined. Embed it into other types to bind them to an
/// enumeration, e.g. `type Permissions = Bitmask<Permission>`.
#[derive(Clone, Copy)]
pub struct Bitmask<F: FlagValue> {
    bits: F::Bits,
    _flags: PhantomData<F>,
}

impl<F: FlagValue> Bitmask<F> {
    pub fn new() -> Self {
        Self::from_bits_retain(F::EMPTY)
    }

    /// Create bitmask from raw bits
    ///
    /// # Arguments
    ///
    /// * `bits` - Packed integer
    ///
    /// # Returns
    ///
    /// Either [`Some`] with the bitmask or [`None`] when `bits` has bits that are no case of `F`
    pub fn from_bits(bits: F::Bits) -> Option<Self> {
        if (bits & !F::all()) == F::EMPTY {
            Some(Self::from_bits_retain(bits))
        } else {
            None
        }
    }

    /// Create bitmask from raw bits and drop all unknown bits
    pub fn from_bits_truncate(bits: F::Bits) -> Self {
        Self::from_bits_retain(bits & F::all())
    }

    fn from_bits_retain(bits: F::Bits) -> Self {
        Self {
            bits,
            _flags: PhantomData,
        }
    }

    /// Get the underlying bitmask
    pub fn bitmask(&self) -> F::Bits {
        self.bits
    }

    pub fn is_empty(&self) -> bool {
        self.bits == F::EMPTY
    }

    pub fn clear(&mut self) {
        self.bits = F::EMPTY;
    }

    /// Check whether all of the given values are set
    ///
    /// # Arguments
    ///
    /// * `values` - Values to check
    ///
    /// # Returns
    ///
    /// A [`Result`] with either [`bool`] on success or otherwise
    /// [`BitmaskError::TypeMismatch`](crate::BitmaskError::TypeMismatch)
    pub fn has<I, V>(&self, values: I) -> Result<bool>
    where
        I: IntoIterator<Item = V>,
        V: Into<AnyFlag<F::Bits>>,
    {
        for value in values {
            if !Self::ensure_correct_type(value)?.is_in(self.bits) {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Check whether any of the given values is set
    ///
    /// # Arguments
    ///
    /// * `values` - Values to check
    ///
    /// # Returns
    ///
    /// A [`Result`] with either [`bool`] on success or otherwise
    /// [`BitmaskError::TypeMismatch`](crate::BitmaskError::TypeMismatch)
    pub fn has_any<I, V>(&self, values: I) -> Result<bool>
    where
        I: IntoIterator<Item = V>,
        V: Into<AnyFlag<F::Bits>>,
    {
        for value in values {
            if Self::ensure_correct_type(value)?.is_in(self.bits) {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Check whether none of the given values is set
    ///
    /// # Arguments
    ///
    /// * `values` - Values to check
    ///
    /// # Returns
    ///
    /// A [`Result`] with either [`bool`] on success or otherwise
    /// [`BitmaskError::TypeMismatch`](crate::BitmaskError::TypeMismatch)
    pub fn has_none<I, V>(&self, values: I) -> Result<bool>
    where
        I: IntoIterator<Item = V>,
        V: Into<AnyFlag<F::Bits>>,
    {
        for value in values {
            if Self::ensure_correct_type(value)?.is_in(self.bits) {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Turn values on
    ///
    /// Nothing is stored when any of the values is of a foreign enumeration.
    ///
    /// # Arguments
    ///
    /// * `values` - Values to turn on
    ///
    /// # Returns
    ///
    /// A [`Result`] with either `Self` for chaining on success or otherwise
    /// [`BitmaskError::TypeMismatch`](crate::BitmaskError::TypeMismatch)
    pub fn add<I, V>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<AnyFlag<F::Bits>>,
    {
        let bits = values.into_iter().try_fold(self.bits, |bitmask, value| {
            Ok::<_, BitmaskError>(Self::ensure_correct_type(value)?.on(bitmask))
        })?;

        debug!("{}: bitmask={:?} -> {:?}", function_name!(), self.bits, bits);

        self.bits = bits;

        Ok(self)
    }

    /// Turn values off
    ///
    /// Values are toggled, so a value that isn't set is turned on instead. Nothing is stored
    /// when any of the values is of a foreign enumeration.
    ///
    /// # Arguments
    ///
    /// * `values` - Values to turn off
    ///
    /// # Returns
    ///
    /// A [`Result`] with either `Self` for chaining on success or otherwise
    /// [`BitmaskError::TypeMismatch`](crate::BitmaskError::TypeMismatch)
    pub fn remove<I, V>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<AnyFlag<F::Bits>>,
    {
        let bits = values.into_iter().try_fold(self.bits, |bitmask, value| {
            Ok::<_, BitmaskError>(Self::ensure_correct_type(value)?.off(bitmask))
        })?;

        debug!("{}: bitmask={:?} -> {:?}", function_name!(), self.bits, bits);

        self.bits = bits;

        Ok(self)
    }

    /// Iterate over all set cases in declaration order, the empty case is skipped
    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        F::cases().iter().copied()
            .filter(|case| case.bits() != F::EMPTY && case.is_in(self.bits))
    }

    fn ensure_correct_type<V: Into<AnyFlag<F::Bits>>>(value: V) -> Result<F> {
        let flag: AnyFlag<F::Bits> = value.into();

        flag.downcast::<F>()
    }
}

impl<F: FlagValue> Default for Bitmask<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FlagValue> PartialEq for Bitmask<F> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<F: FlagValue> Eq for Bitmask<F> {}

impl<F: FlagValue> Hash for Bitmask<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<F: FlagValue> From<F> for Bitmask<F> {
    fn from(value: F) -> Self {
        Self::from_bits_retain(value.bits())
    }
}

impl<F: FlagValue> FromIterator<F> for Bitmask<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut bitmask = Self::new();

        bitmask.extend(iter);

        bitmask
    }
}

impl<F: FlagValue> Extend<F> for Bitmask<F> {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        self.bits = iter.into_iter().fold(self.bits, |bitmask, value| value.on(bitmask));
    }
}

impl<F: FlagValue> fmt::Display for Bitmask<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for case in self.iter() {
            if !first {
                f.write_str(" | ")?;
            }

            write!(f, "{case:?}")?;
            first = false;
        }

        // Fall back to the empty case if there is one
        if first && let Some(empty) = F::from_bits(F::EMPTY) {
            write!(f, "{empty:?}")?;
        }

        Ok(())
    }
}

impl<F: FlagValue> fmt::Debug for Bitmask<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Bitmask(0x")?;
        self.bits.write_hex(&mut *f)?;
        write!(f, ", {self})")
    }
}
