mod directory_port;
mod image_probe_port;
mod key_value_store_port;

pub use directory_port::DirectoryPort;
pub use image_probe_port::{ImageProbePort, ProbeOutcome};
pub use key_value_store_port::KeyValueStorePort;

#[cfg(test)]
pub mod mocks {
    pub use super::directory_port::mock::MockDirectory;
    pub use super::image_probe_port::mock::MockImageProbe;
    pub use super::key_value_store_port::mock::MockKeyValueStore;
}
