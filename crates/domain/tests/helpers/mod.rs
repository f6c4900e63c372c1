#![allow(unused_imports)]

pub mod builders;

pub use builders::{encode_name, pointer, WireBuilder};
