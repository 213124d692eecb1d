use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One line of the runtime's container listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSummary {
    pub id: String,
    pub name: String,
    pub image: String,
    pub status: String,
}

/// The runtime's inspect record, passed through untouched.
pub type ContainerDetail = Value;

/// Stats table row keyed by column header, in header order.
pub type ContainerStatsRow = Map<String, Value>;
