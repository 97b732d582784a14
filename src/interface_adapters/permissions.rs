use std::collections::HashSet;

use crate::domain::{ActorId, Permissions};

// Fixed set of actors holding one permission node.
#[derive(Debug, Clone)]
pub struct AllowList {
    node: String,
    actors: HashSet<ActorId>,
}

impl AllowList {
    pub fn new(node: impl Into<String>, actors: impl IntoIterator<Item = ActorId>) -> Self {
        Self {
            node: node.into(),
            actors: actors.into_iter().collect(),
        }
    }

    /// Parses a comma separated id list, skipping entries that are not ids.
    pub fn parse(node: impl Into<String>, list: &str) -> Self {
        let actors = list
            .split(',')
            .filter_map(|entry| entry.trim().parse::<ActorId>().ok());
        Self::new(node, actors)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

impl Permissions for AllowList {
    fn has_permission(&self, actor: ActorId, node: &str) -> bool {
        node.eq_ignore_ascii_case(&self.node) && self.actors.contains(&actor)
    }
}
