pub mod plan;
pub mod process;
pub mod urls;

pub use plan::LaunchPlan;
pub use process::{Launcher, ProcessLauncher};
pub use urls::{extract_urls, load_urls};
