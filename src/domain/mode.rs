// Tool modes and the wrapping cursor that cycles through them.

use super::errors::ConfigError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Build,
    Destroy,
    Paint,
    Move,
    Rotate,
    Scale,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Mode::Build,
        Mode::Destroy,
        Mode::Paint,
        Mode::Move,
        Mode::Rotate,
        Mode::Scale,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mode::Build => "Build",
            Mode::Destroy => "Destroy",
            Mode::Paint => "Paint",
            Mode::Move => "Move",
            Mode::Rotate => "Rotate",
            Mode::Scale => "Scale",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigError::UnknownMode(value.to_string()))
    }
}

/// Parses configured mode names, keeping their order.
pub fn parse_modes<S: AsRef<str>>(names: &[S]) -> Result<Arc<[Mode]>, ConfigError> {
    if names.is_empty() {
        return Err(ConfigError::EmptyModeList);
    }
    names
        .iter()
        .map(|name| name.as_ref().parse::<Mode>())
        .collect::<Result<Vec<_>, _>>()
        .map(Arc::from)
}

/// Ordered, wrapping list of modes with a cursor into it.
///
/// The list is shared between cycles; each cycle owns its own cursor.
#[derive(Debug, Clone)]
pub struct ModeCycle {
    modes: Arc<[Mode]>,
    cursor: usize,
}

impl ModeCycle {
    /// Returns `None` for an empty list so the cursor is always valid.
    pub fn new(modes: Arc<[Mode]>) -> Option<Self> {
        if modes.is_empty() {
            return None;
        }
        Some(Self { modes, cursor: 0 })
    }

    pub fn current(&self) -> Mode {
        self.modes[self.cursor]
    }

    /// Moves to the next mode, wrapping after the last one.
    pub fn advance(&mut self) -> Mode {
        self.cursor = (self.cursor + 1) % self.modes.len();
        self.current()
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

/// Turns a held/released input level into single rising-edge triggers.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    held: bool,
}

impl EdgeDetector {
    /// True only when the input goes from released to held.
    pub fn rising(&mut self, held: bool) -> bool {
        let edge = held && !self.held;
        self.held = held;
        edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(names: &[&str]) -> ModeCycle {
        ModeCycle::new(parse_modes(names).expect("valid modes")).expect("non-empty modes")
    }

    #[test]
    fn when_build_destroy_cycle_advances_twice_then_it_wraps_to_build() {
        let mut modes = cycle(&["Build", "Destroy"]);
        assert_eq!(modes.current(), Mode::Build);
        assert_eq!(modes.advance(), Mode::Destroy);
        assert_eq!(modes.advance(), Mode::Build);
    }

    #[test]
    fn when_advanced_len_times_then_cursor_returns_to_start() {
        for len in 1..=Mode::ALL.len() {
            let names: Vec<&str> = Mode::ALL[..len].iter().map(|m| m.name()).collect();
            let mut modes = cycle(&names);
            for start in 0..len {
                // Move the cursor to each possible starting point first.
                for _ in 0..start {
                    modes.advance();
                }
                let before = modes.current();
                for _ in 0..len {
                    modes.advance();
                }
                assert_eq!(modes.current(), before, "len {len}, start {start}");
            }
        }
    }

    #[test]
    fn when_single_mode_advances_then_it_stays_put() {
        let mut modes = cycle(&["Paint"]);
        assert_eq!(modes.advance(), Mode::Paint);
        assert_eq!(modes.current(), Mode::Paint);
    }

    #[test]
    fn when_mode_names_use_other_case_then_they_still_parse() {
        assert_eq!("destroy".parse::<Mode>(), Ok(Mode::Destroy));
        assert_eq!(" SCALE ".parse::<Mode>(), Ok(Mode::Scale));
    }

    #[test]
    fn when_mode_name_is_unknown_then_parse_fails() {
        let result = parse_modes(&["Build", "Teleport"]);
        assert_eq!(result, Err(ConfigError::UnknownMode("Teleport".to_string())));
    }

    #[test]
    fn when_mode_list_is_empty_then_parse_fails() {
        let names: [&str; 0] = [];
        assert_eq!(parse_modes(&names), Err(ConfigError::EmptyModeList));
        assert!(ModeCycle::new(Arc::from(Vec::new())).is_none());
    }

    #[test]
    fn when_input_is_held_then_only_first_sample_is_an_edge() {
        let mut edge = EdgeDetector::default();
        assert!(edge.rising(true));
        assert!(!edge.rising(true));
        assert!(!edge.rising(true));
        assert!(!edge.rising(false));
        assert!(edge.rising(true));
    }
}
