///
/// @package flagmask
///
/// @file Flag functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use std::any::{self, TypeId};
use std::fmt;
use std::hash::Hash;
use anyhow::anyhow;
use bitflags::Bits;
use bitflags::parser::WriteHex;
use log::debug;
use crate::error::{BitmaskError, Result};

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer types that can back a flag enumeration
pub trait Unsigned: Bits + WriteHex + fmt::Debug + Eq + Hash + sealed::Sealed {
    /// Number of set bits
    fn count_ones(self) -> u32;
}

macro_rules! impl_unsigned {
    ($($ty:ident),+) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Unsigned for $ty {
                #[inline]
                fn count_ones(self) -> u32 {
                    $ty::count_ones(self)
                }
            }
        )+
    };
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);

/// A single named flag of a closed enumeration
///
/// Every case must be backed by either zero (at most one case) or a power of two, and no two
/// cases may share a bit. Enumerations declared with [`flag_value!`](crate::flag_value) are
/// checked at compile time, manual implementations can call [`verify_cases`] from their tests.
///
/// All operations are pure and return a new bitmask. The mask that was optional in the
/// classic API is explicit here, pass [`FlagValue::EMPTY`] for the empty mask.
pub trait FlagValue: Copy + Eq + fmt::Debug + 'static {
    /// Integer type backing the enumeration
    type Bits: Unsigned;

    /// An empty bitmask
    const EMPTY: Self::Bits = <Self::Bits as Bits>::EMPTY;

    /// Backing value of this case
    fn bits(self) -> Self::Bits;

    /// All cases in declaration order
    fn cases() -> &'static [Self];

    /// Union of all cases
    fn all() -> Self::Bits {
        Self::cases().iter().fold(Self::EMPTY, |bitmask, case| case.or(bitmask))
    }

    /// Look up the case backed by `bits`
    fn from_bits(bits: Self::Bits) -> Option<Self> {
        Self::cases().iter().copied().find(|case| case.bits() == bits)
    }

    /// Builds a bitmask from a list of values
    ///
    /// # Arguments
    ///
    /// * `values` - Cases of this enumeration, either typed or as [`AnyFlag`]
    ///
    /// # Returns
    ///
    /// A [`Result`] with either the bitmask on success or otherwise
    /// [`BitmaskError::TypeMismatch`] for the first value of a foreign enumeration
    fn build_from<I, V>(values: I) -> Result<Self::Bits>
    where
        I: IntoIterator<Item = V>,
        V: Into<AnyFlag<Self::Bits>>,
    {
        values.into_iter().try_fold(Self::EMPTY, |bitmask, value| {
            let flag: AnyFlag<Self::Bits> = value.into();

            Ok(flag.downcast::<Self>()?.or(bitmask))
        })
    }

    /// ANDs this value to the given bitmask
    #[inline]
    fn and(self, bitmask: Self::Bits) -> Self::Bits {
        bitmask & self.bits()
    }

    /// Checks whether this value is present in the given bitmask
    #[inline]
    fn is_in(self, bitmask: Self::Bits) -> bool {
        (self.bits() & bitmask) == self.bits()
    }

    /// NOTs this value to the given bitmask
    ///
    /// This toggles the bit: it only clears it when it was set before.
    #[inline]
    fn not(self, bitmask: Self::Bits) -> Self::Bits {
        bitmask ^ self.bits()
    }

    /// ORs this value to the given bitmask
    #[inline]
    fn or(self, bitmask: Self::Bits) -> Self::Bits {
        bitmask | self.bits()
    }

    /// Adds this value to the given bitmask, alias of [`FlagValue::or`]
    #[inline]
    fn on(self, bitmask: Self::Bits) -> Self::Bits {
        self.or(bitmask)
    }

    /// Removes this value from the given bitmask, alias of [`FlagValue::not`]
    #[inline]
    fn off(self, bitmask: Self::Bits) -> Self::Bits {
        self.not(bitmask)
    }

    /// XORs this value to the given bitmask
    #[inline]
    fn xor(self, bitmask: Self::Bits) -> Self::Bits {
        bitmask ^ self.bits()
    }

    /// Erase the enumeration type of this value
    fn erase(self) -> AnyFlag<Self::Bits> {
        AnyFlag {
            bits: self.bits(),
            type_id: TypeId::of::<Self>(),
            type_name: any::type_name::<Self>(),
        }
    }
}

/// A flag whose enumeration is only known at runtime
///
/// Can only be created via [`FlagValue::erase`], so the bits always belong to a declared case.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct AnyFlag<B> {
    bits: B,
    type_id: TypeId,
    type_name: &'static str,
}

impl<B: Copy> AnyFlag<B> {
    pub fn bits(&self) -> B {
        self.bits
    }

    /// Type name of the enumeration this flag belongs to
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<F: FlagValue<Bits = B>>(&self) -> bool {
        self.type_id == TypeId::of::<F>()
    }

    /// Get the typed flag back
    ///
    /// # Returns
    ///
    /// A [`Result`] with either the case on success or otherwise
    /// [`BitmaskError::TypeMismatch`] carrying the type name of this flag
    pub fn downcast<F: FlagValue<Bits = B>>(self) -> Result<F> {
        let mismatch = BitmaskError::TypeMismatch {
            expected: any::type_name::<F>(),
            found: self.type_name,
        };

        if !self.is::<F>() {
            debug!("{mismatch}");

            return Err(mismatch);
        }

        F::from_bits(self.bits).ok_or(mismatch)
    }
}

impl<F: FlagValue> From<F> for AnyFlag<F::Bits> {
    fn from(value: F) -> Self {
        value.erase()
    }
}

impl<B: fmt::Debug> fmt::Debug for AnyFlag<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.type_name, self.bits)
    }
}

/// Check that all cases of `F` are backed by zero or a power of two without overlap
///
/// # Returns
///
/// A [`anyhow::Result`] with either `Unit` on success or otherwise an error naming the first
/// offending case
pub fn verify_cases<F: FlagValue>() -> anyhow::Result<()> {
    let mut seen = F::EMPTY;
    let mut empty: Option<F> = None;

    for case in F::cases().iter().copied() {
        let bits = case.bits();

        if bits == F::EMPTY {
            if let Some(other) = empty.replace(case) {
                return Err(anyhow!("Cases {other:?} and {case:?} are both empty"));
            }

            continue;
        }

        if 1 != bits.count_ones() {
            return Err(anyhow!("Case {case:?} is not a power of two: {bits:?}"));
        }

        if (seen & bits) != F::EMPTY {
            return Err(anyhow!("Case {case:?} overlaps with another case: {bits:?}"));
        }

        seen = case.or(seen);
    }

    Ok(())
}
