pub mod dns;

pub use dns::{LookupHostUseCase, LookupOutcome, LookupPolicy, LookupRequest};
