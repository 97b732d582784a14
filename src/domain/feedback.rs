// Hint text shown to the actor after tool actions.

use super::mode::Mode;
use std::time::Duration;

const ATTRIBUTION: &str = "\n<size=12><color=#AAAAAA>ToolGun admin toolkit</color></size>";

const STATUS_DURATION: Duration = Duration::from_secs(2);
const MODE_DURATION: Duration = Duration::from_secs(3);
const WELCOME_DURATION: Duration = Duration::from_secs(5);

/// A transient on-screen message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub text: String,
    pub duration: Duration,
}

impl Hint {
    fn new(body: impl AsRef<str>, duration: Duration) -> Self {
        Self {
            text: format!("{}{ATTRIBUTION}", body.as_ref()),
            duration,
        }
    }

    fn status(color: &str, message: &str) -> Self {
        Self::new(format!("<color={color}>{message}</color>"), STATUS_DURATION)
    }

    pub fn welcome() -> Self {
        Self::new(
            "<color=#00FFFF>ToolGun activated!</color>\n\
             <color=#FFD700>Press the mode key to switch modes</color>",
            WELCOME_DURATION,
        )
    }

    pub fn mode_changed(mode: Mode) -> Self {
        Self::new(format!("ToolGun mode: {mode}"), MODE_DURATION)
    }

    pub fn built() -> Self {
        Self::status("#00FF00", "Object built!")
    }

    pub fn destroyed() -> Self {
        Self::status("#FF0000", "Object destroyed!")
    }

    pub fn painted() -> Self {
        Self::status("#FFFF00", "Object painted!")
    }

    pub fn moved() -> Self {
        Self::status("#00FFFF", "Object moved!")
    }

    pub fn undone() -> Self {
        Self::status("#AAAAFF", "Change undone")
    }

    pub fn redone() -> Self {
        Self::status("#AAAAFF", "Change redone")
    }

    pub fn nothing_to_undo() -> Self {
        Self::status("#AAAAAA", "Nothing to undo")
    }

    pub fn nothing_to_redo() -> Self {
        Self::status("#AAAAAA", "Nothing to redo")
    }

    /// The recorded object no longer exists, so its change was discarded.
    pub fn change_discarded() -> Self {
        Self::status("#FF8800", "Object no longer exists; change discarded")
    }
}
