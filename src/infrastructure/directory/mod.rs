//! Player directory service client.

mod client;

pub use client::DirectoryClient;
