#![allow(dead_code)]

pub mod builders;
pub mod upstream_mock;

pub use builders::*;
pub use upstream_mock::*;
