//! Cross-subsystem integration flows.

pub mod concurrency;
pub mod fixtures;
pub mod forum_flows;
pub mod governance_flows;
pub mod node_flows;
