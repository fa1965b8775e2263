//! Platform side of the export seam.
//!
//! The core hands serialized tables to a [`SaveTarget`](inkloop_core::SaveTarget);
//! this module provides the terminal host's filesystem implementation.

mod directory;

pub use directory::DirectorySaveTarget;
