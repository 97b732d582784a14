// Interface adapters: host message decoding and headless port implementations.

pub mod hints;
pub mod inventory;
pub mod permissions;
pub mod protocol;
pub mod scene;
