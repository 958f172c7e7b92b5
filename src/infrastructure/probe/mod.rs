//! Image existence probing.

mod http_probe;

pub use http_probe::HttpImageProbe;
