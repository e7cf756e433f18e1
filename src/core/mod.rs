pub mod checksum;
pub mod classifier;
pub mod presentation;
