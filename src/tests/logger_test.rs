///
/// @package flagmask
///
/// @file Logger tests
/// @copyright (c) 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use log::LevelFilter;
use crate::logger::{self, LogLevel};

#[test]
fn should_parse_level() {
    assert_eq!(LogLevel::from("DEBUG"), LogLevel::Debug);
    assert_eq!(LogLevel::from("warnings"), LogLevel::Warnings);
    assert_eq!(LogLevel::from("none"), LogLevel::None);
    assert_eq!(LogLevel::from("unknown"), LogLevel::Info);
}

#[test]
fn should_map_level_to_filter() {
    assert_eq!(LevelFilter::from(LogLevel::None), LevelFilter::Off);
    assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::Error);
    assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::Trace);
}

#[test]
fn should_init_only_once() {
    assert!(logger::init(LogLevel::Debug).is_ok());
    assert!(logger::init(LogLevel::Info).is_err());
}
