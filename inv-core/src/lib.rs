#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

/// Core domain models for the inventory service.
///
/// The models in this module are primarily data structures with minimal
/// business logic, following the principles of the hexagonal architecture
/// to separate domain entities from their persistence and presentation
/// implementations.
pub mod models;

/// Interface traits for the inventory service.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
///
/// These traits define the contract between the domain logic and external
/// adapters (such as files, databases, or test doubles) without specifying
/// implementation details, so infrastructure can be swapped without
/// affecting the request handlers.
pub mod ports;
