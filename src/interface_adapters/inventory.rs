use std::collections::HashMap;

use crate::domain::{ActorId, Inventory};

// Tracks how many tool items each actor carries.
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    tools: HashMap<ActorId, u32>,
}

impl InMemoryInventory {
    pub fn has_tool(&self, actor: ActorId) -> bool {
        self.tool_count(actor) > 0
    }

    pub fn tool_count(&self, actor: ActorId) -> u32 {
        self.tools.get(&actor).copied().unwrap_or(0)
    }
}

impl Inventory for InMemoryInventory {
    fn give_tool(&mut self, actor: ActorId) {
        *self.tools.entry(actor).or_insert(0) += 1;
    }

    // Removes a single tool item, leaving any others.
    fn take_tool(&mut self, actor: ActorId) {
        if let Some(count) = self.tools.get_mut(&actor) {
            *count -= 1;
            if *count == 0 {
                self.tools.remove(&actor);
            }
        }
    }
}
