#![allow(dead_code)]

mod logs;
mod mocks;
mod test_utils;

pub use logs::*;
pub use mocks::*;
pub use test_utils::*;
