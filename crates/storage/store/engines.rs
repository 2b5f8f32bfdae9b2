pub mod api;
#[cfg(feature = "in_memory")]
pub mod in_memory;
