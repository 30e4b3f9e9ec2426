//! Link allocation service.
//!
//! [`ShortenerService`] implements [`snip_core::Shortener`] on top of any
//! [`snip_core::Repository`]: custom ids get one insert attempt, generated
//! ids are retried on collision up to [`AllocatorSettings::max_attempts`].

pub mod service;

pub use service::{AllocatorSettings, ShortenerService, DEFAULT_MAX_ATTEMPTS};
pub use snip_core::{AllocError, AllocateParams, IdStrategy, Link, LinkId, Shortener};
