//! # Larder Scan Crate
//!
//! Barcode handling for the Larder client: the canonical normalization
//! applied to every scanned code, the per-session dedup cache that avoids
//! redundant remote lookups, and shape checks used for diagnostics.

pub mod cache;
pub mod normalize;
pub mod validation;

pub use cache::ScanCache;
pub use normalize::normalize;
