//! Back-office CLI tools.
//!
//! This crate provides the command-line front end over the tillbook engines:
//!
//! - `till-ledger`: print a counterparty ledger statement from a data file
//! - `till-stock`: print the stock status report from a data file
//!
//! # Example Usage
//!
//! ```bash
//! till-ledger books.json --scope customers --customer c-1
//! till-ledger books.json --from 2024-01-01 --to 2024-03-31 --search acme
//! till-stock books.json --low-only
//! ```
//!
//! Both tools read one JSON data file (the exported store collections),
//! hand the already-loaded collections to the engine crates, and render the
//! precomputed rows. All business rules live in `tillbook-ledger` and
//! `tillbook-stock`; this crate only loads and prints.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
pub mod data;
pub mod report;
