//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models.
//! Theme is the only piece of page-lifetime state the site keeps.

pub mod theme;
