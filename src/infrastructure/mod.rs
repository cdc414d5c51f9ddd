//! Infrastructure layer: concrete implementations of the domain's data
//! access contracts.

pub mod persistence;
