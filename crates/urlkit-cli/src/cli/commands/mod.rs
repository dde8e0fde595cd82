//! CLI command handlers, one file per command.

mod brands;
mod classify;
mod convert;
mod drivers;
mod regions;
mod status;

pub use brands::{run_brand_urls, run_brands};
pub use classify::run_classify;
pub use convert::run_convert;
pub use drivers::run_drivers;
pub use regions::run_regions;
pub use status::{run_status, StatusOutput};
