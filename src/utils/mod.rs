// Browser-only helpers

pub mod storage;

pub use storage::*;
