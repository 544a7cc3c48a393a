pub mod buffer;
pub mod collections;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod results;
pub mod search;

pub use buffer::{BufferKind, DemoSettings, SharedBuffer, PRODUCTS};
pub use collections::{PriorityQueue, RemovalEnd, Sequence};
pub use config::{CliOverrides, CrackConfig};
pub use errors::{HashQueueError, HashQueueResult};
pub use results::CrackOutcome;
pub use search::{reverse_md5, TargetHash};
