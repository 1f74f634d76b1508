//! Top-level facade crate for metriq.
//!
//! Re-exports the core model/rendering types and the console library so
//! users can depend on a single crate.

pub mod core {
    pub use metriq_core::*;
}

pub mod console {
    pub use metriq_console::*;
}
