#![allow(unused_imports)]

pub mod mock_transports;

pub use mock_transports::{
    answer_for, truncated_for, with_id, FixedNameservers, ScriptedTransport, Step,
};
