pub mod allocation;
pub mod context;
pub mod formats;
pub mod net;
pub mod sort_utils;
pub mod stableford;

pub use allocation::*;
pub use context::*;
pub use formats::*;
pub use net::*;
pub use sort_utils::*;
pub use stableford::*;
