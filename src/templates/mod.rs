//! Pure template functions, one per generated file kind.
//!
//! Each submodule covers one generation phase and exposes a `plan` function
//! that pushes the phase's fixed directory list and file descriptors onto a
//! [`crate::plan::Plan`]. The payload strings are opaque boilerplate for the
//! generated project's own ecosystem; the only contract here is that the
//! right payload lands at the right path for a given option record.

pub mod client;
pub mod root;
pub mod server;
pub mod shared;
