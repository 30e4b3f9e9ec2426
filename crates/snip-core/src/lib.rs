//! Core types and traits for the snip URL shortener.
//!
//! This crate provides the link model, the id strategies, the link store
//! contract and the shortener contract shared by the generator, storage and
//! service crates.

pub mod error;
pub mod link;
pub mod link_id;
pub mod repository;
pub mod shortener;
pub mod strategy;

pub use error::{AllocError, StorageError};
pub use link::Link;
pub use link_id::LinkId;
pub use repository::{ReadRepository, Repository};
pub use shortener::{AllocateParams, Shortener};
pub use strategy::IdStrategy;
