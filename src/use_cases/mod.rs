// Use cases layer: the tool state machine and its event task.

pub mod executor;
#[cfg(test)]
pub(crate) mod test_support;
pub mod tool_gun;
pub mod tool_task;
pub mod types;

pub use tool_gun::ToolGun;
pub use tool_task::tool_task;
pub use types::HostEvent;
