//! # parklot
//!
//! A text-command-driven parking-lot simulator with pluggable
//! slot-allocation policies.
//!
//! The simulator reads line-oriented commands (create lot, park, leave,
//! query by color or registration number, status) from standard input or a
//! file, maintains in-memory slot-allocation state, and emits formatted
//! textual responses.
//!
//! ## Core Problem Solved
//!
//! Nearest-slot allocation needs the minimum of the free-slot set in
//! O(log n), while color and registration lookups must report cars in the
//! order they arrived. The engine keeps three consistent views of
//! occupancy (by slot, by color, by registration number) and a priority
//! structure of free slots, all owned by one aggregate so the views can
//! never drift apart.
//!
//! ## Key Features
//!
//! - **Nearest-Slot Allocation**: a min-heap hands out the lowest free
//!   slot; a farthest-slot policy is a configuration switch away
//! - **Indexed Lookups**: insertion-ordered secondary indexes answer
//!   color and registration queries without scanning the lot
//! - **Invariant-Preserving Updates**: storage mutates before the free
//!   pool on every command, so no error path desynchronizes them
//! - **Serialized Commands**: one mutex per session; a command completes
//!   before the next begins, whatever entry gate it came from
//!
//! ## Example
//!
//! ```rust
//! use parklot::builders::build_session;
//! use parklot::config::SimulatorConfig;
//! use parklot::parser::parse_line;
//!
//! let session = build_session(&SimulatorConfig::default()).unwrap();
//! let created = session
//!     .execute(&parse_line("create_parking_lot 6").unwrap())
//!     .unwrap();
//! assert_eq!(created, "Created a parking lot with 6 slots");
//! let parked = session
//!     .execute(&parse_line("park KA-01-HH-1234 White").unwrap())
//!     .unwrap();
//! assert_eq!(parked, "Allocated slot number: 1");
//! ```
//!
//! For complete examples, see `tests/command_flow_test.rs`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core domain: errors, storage abstraction, allocation policies, the lot
/// aggregate, and the command-processing session.
pub mod core;
/// Purpose-built collections backing the secondary indexes.
pub mod collections;
/// Configuration models for the simulator.
pub mod config;
/// Builders to construct simulator components from configuration.
pub mod builders;
/// Infrastructure adapters for storage backends.
pub mod infra;
/// Command parsing and line tokenization.
pub mod parser;
/// Run-loop drivers for interactive and batch execution.
pub mod runtime;
/// Shared utilities.
pub mod util;
