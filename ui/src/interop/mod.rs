//! Browser APIs that `web-sys` does not cover directly.

pub mod geolocation;
pub mod maps;
