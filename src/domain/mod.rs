// Domain layer: tool state, rules and the ports the host implements.

pub mod entities;
pub mod errors;
pub mod feedback;
pub mod grid;
pub mod history;
pub mod mode;
pub mod ports;
pub mod session;
pub mod settings;
pub mod target;

pub use entities::{ActorId, BuildTemplate, ObjectHandle, ObjectSnapshot, RayHit, Rgba, Viewpoint};
pub use errors::ConfigError;
pub use feedback::Hint;
pub use grid::{GridSize, snap};
pub use history::{Direction, History, HistoryStep, Mutation, Reverted};
pub use mode::{EdgeDetector, Mode, ModeCycle};
pub use ports::{HintSink, Inventory, Permissions, Scene};
pub use session::{Session, SessionRegistry};
pub use settings::{ToolConfig, ToolSettings};
