//! Infrastructure implementations.
//!
//! The store port and its two adapters.

pub mod memory;
pub mod ports;
pub mod sqlite;

#[cfg(test)]
mod store_contract_tests;
