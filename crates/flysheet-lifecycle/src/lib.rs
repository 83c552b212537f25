//! Artifact lifecycle management for Flysheet.
//!
//! The [`Lifecycle`] manager is the request-facing contract layered over
//! the artifact store: it renders and registers new artifacts, serves them
//! while they remain valid, and reclaims them once they lapse.
//!
//! Reclamation has two independent callers of the same idempotent sweep:
//! an opportunistic pass piggybacked on every creation (amortizing cleanup
//! onto traffic) and a fixed-interval background task spawned with
//! [`spawn_reclamation`] (guaranteeing cleanup through idle periods). The
//! two need no coordination — idempotence of the sweep is the correctness
//! requirement.

pub mod error;
pub mod manager;
pub mod reclaim;

pub use error::{LifecycleError, LifecycleResult};
pub use manager::{CreateReceipt, Lifecycle};
pub use reclaim::spawn_reclamation;
