//! Value types shared across the reader and its callers.

pub mod digest;

pub use digest::Md5Digest;
