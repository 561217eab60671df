pub mod config;
pub mod ent;
pub mod error;
pub mod pipeline;
pub mod rig;

pub use config::*;
pub use ent::*;
pub use error::*;
pub use pipeline::*;
pub use rig::*;

pub(crate) const AXES: [&str; 3] = ["X", "Y", "Z"];
