/// Hello-world counter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: u64,
}

impl CounterState {
    pub fn incremented(self, step: u64) -> Self {
        Self {
            count: self.count.saturating_add(step),
        }
    }
}

/// Label text shown under the "Say Hello" button.
pub fn count_text(count: u64) -> String {
    if count == 1 {
        format!("I've said hello {} time", count)
    } else {
        format!("I've said hello {} times", count)
    }
}
