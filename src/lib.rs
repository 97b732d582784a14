pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::host::{HeadlessTool, build_tool, run, run_with_config};
