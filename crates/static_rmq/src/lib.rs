//! Batch static range minimum queries over a whitespace-delimited text
//! protocol, answered with [`rmq::SqrtDecompositionRmq`].

pub mod config;
pub mod driver;
mod error;
pub mod input;
pub mod query;

pub use config::{Args, Config, Engine};
pub use driver::{Summary, run};
pub use error::{Error, TokenError};
pub use input::Problem;
pub use query::{BoundsPolicy, Query};
