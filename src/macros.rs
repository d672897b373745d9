///
/// @package flagmask
///
/// @file Macro functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

/// Declare a flag enumeration and implement [`FlagValue`](crate::FlagValue) for it
///
/// The enumeration is `#[repr]`-ed with the given unsigned integer type. Cases that are
/// neither zero nor a power of two, overlapping cases and more than one empty case fail to
/// compile, and so do signed backing types:
///
/// ```compile_fail
/// flagmask::flag_value! {
///     pub enum Signed: i16 {
///         Low = 1,
///         Sign = -32768,
///     }
/// }
/// ```
///
/// ```compile_fail
/// flagmask::flag_value! {
///     pub enum Overlap: u8 {
///         Low = 1,
///         Both = 3,
///     }
/// }
/// ```
///
/// ```
/// flagmask::flag_value! {
///     pub enum Permission: u32 {
///         Read = 1 << 0,
///         Write = 1 << 1,
///         Execute = 1 << 2,
///     }
/// }
/// ```
#[macro_export]
macro_rules! flag_value {
    (
        $(#[$outer:meta])*
        $vis:vis enum $name:ident: $bits:ident {
            $(
                $(#[$inner:meta])*
                $case:ident = $value:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[repr($bits)]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$inner])*
                $case = $value,
            )+
        }

        const _: () = {
            let cases: &[$bits] = &[$($value),+];
            let mut seen: $bits = 0;
            let mut empty = 0;
            let mut idx = 0;

            while idx < cases.len() {
                let bits = cases[idx];

                if 0 == bits {
                    empty += 1;
                }

                assert!(1 >= bits.count_ones(),
                    concat!("Cases of `", stringify!($name), "` must be zero or a power of two"));
                assert!(0 == seen & bits,
                    concat!("Cases of `", stringify!($name), "` must not overlap"));
                assert!(1 >= empty,
                    concat!("`", stringify!($name), "` must not have more than one empty case"));

                seen |= bits;
                idx += 1;
            }
        };

        impl $crate::FlagValue for $name {
            type Bits = $bits;

            #[inline]
            fn bits(self) -> $bits {
                self as $bits
            }

            fn cases() -> &'static [Self] {
                &[$($name::$case),+]
            }
        }
    };
}
