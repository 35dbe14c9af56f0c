pub mod registry;
pub mod resolve;

pub use registry::{ProfileRecord, ProfileRegistry};
pub use resolve::{FALLBACK_PROFILE_KEY, resolve};
