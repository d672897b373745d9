///
/// @package flagmask
///
/// @file Flag tests
/// @copyright (c) 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use proptest::prelude::*;
use proptest::sample::select;
use crate::{BitmaskError, FlagValue};
use crate::tests::fixtures::{Mode, Permission};

#[test]
fn should_build_empty_bitmask() {
    assert_eq!(Permission::build_from(Vec::<Permission>::new()), Ok(0));
}

#[test]
fn should_build_from_values() {
    assert_eq!(Permission::build_from([Permission::Read, Permission::Write]), Ok(3));
    assert_eq!(Permission::build_from([Permission::Execute, Permission::Execute]), Ok(4));
}

#[test]
fn should_build_from_erased_values() {
    let values = [Permission::Read.erase(), Permission::Execute.erase()];

    assert_eq!(Permission::build_from(values), Ok(5));
}

#[test]
fn should_fail_to_build_from_foreign_value() {
    let values = [Permission::Read.erase(), Mode::Fast.erase()];

    let err = Permission::build_from(values).unwrap_err();

    assert!(matches!(err, BitmaskError::TypeMismatch { .. }));
    assert_eq!(err.found(), std::any::type_name::<Mode>());
}

#[test]
fn should_combine_all_cases() {
    assert_eq!(Permission::all(), 7);
    assert_eq!(Mode::all(), 3);
}

#[test]
fn should_find_case_by_bits() {
    assert_eq!(Permission::from_bits(2), Some(Permission::Write));
    assert_eq!(Permission::from_bits(3), None);
    assert_eq!(Mode::from_bits(0), Some(Mode::Off));
}

#[test]
fn should_apply_single_operations() {
    assert_eq!(Permission::Write.and(7), 2);
    assert_eq!(Permission::Write.and(5), 0);
    assert_eq!(Permission::Write.or(Permission::EMPTY), 2);
    assert_eq!(Permission::Write.on(1), 3);
    assert_eq!(Permission::Write.not(3), 1);
    assert_eq!(Permission::Write.off(3), 1);
    assert_eq!(Permission::Write.xor(3), 1);
    assert!(Permission::Write.is_in(6));
    assert!(!Permission::Write.is_in(5));
}

#[test]
fn should_toggle_instead_of_clear() {
    // Turning off a bit that isn't set turns it on
    assert_eq!(Permission::Execute.off(1), 5);
    assert_eq!(Permission::Execute.not(Permission::EMPTY), 4);
}

#[test]
fn should_treat_empty_case_as_always_present() {
    assert!(Mode::Off.is_in(0));
    assert!(Mode::Off.is_in(3));
    assert_eq!(Mode::Off.or(2), 2);
    assert_eq!(Mode::Off.xor(2), 2);
}

#[test]
fn should_erase_and_downcast() {
    let flag = Permission::Execute.erase();

    assert_eq!(flag.bits(), 4);
    assert!(flag.is::<Permission>());
    assert!(!flag.is::<Mode>());
    assert_eq!(flag.type_name(), std::any::type_name::<Permission>());
    assert_eq!(flag.downcast::<Permission>(), Ok(Permission::Execute));
    assert!(flag.downcast::<Mode>().is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]
    #[test]
    fn should_be_in_after_or(flag in select(Permission::cases()), bitmask: u32) {
        prop_assert!(flag.is_in(flag.or(bitmask)));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]
    #[test]
    fn should_and_to_own_bits_after_or(flag in select(Permission::cases()), bitmask: u32) {
        prop_assert_eq!(flag.and(flag.or(bitmask)), flag.bits());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]
    #[test]
    fn should_or_idempotent(flag in select(Permission::cases()), bitmask: u32) {
        prop_assert_eq!(flag.or(flag.or(bitmask)), flag.or(bitmask));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]
    #[test]
    fn should_restore_after_double_xor(flag in select(Permission::cases()), bitmask: u32) {
        prop_assert_eq!(flag.xor(flag.xor(bitmask)), bitmask);
        prop_assert_eq!(flag.not(bitmask), flag.xor(bitmask));
    }
}
