//! Mock tools the agents can call.
//!
//! Every tool is a pure function of its arguments (plus the clock for
//! `current_time`). The registry adds the simulated backend latency.

mod definitions;
mod input;
mod mock;
mod registry;

pub use definitions::{ToolDetail, ToolKind};
pub use input::{Operation, ToolInput};
pub use mock::{calculate, current_time, web_search, DIVISION_BY_ZERO};
pub use registry::{ToolLatency, ToolRegistry};
