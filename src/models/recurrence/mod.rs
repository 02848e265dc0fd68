// Recurrence module
// Yearly templates are the only supported frequency; an event carrying a
// recurrence is never rendered directly and must be materialized first.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    pub freq: Frequency,
}

impl Recurrence {
    pub fn yearly() -> Self {
        Self {
            freq: Frequency::Yearly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Yearly,
}
