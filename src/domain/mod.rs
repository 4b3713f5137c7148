//! Boundary types shared with the UI layer.

pub mod descriptor;
pub mod sizing;

pub use descriptor::{descriptors_from_json, BubbleDescriptor};
pub use sizing::bubble_size;
