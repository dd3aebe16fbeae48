pub mod config;
pub mod error;
pub mod length;
pub mod node;
pub mod props;
pub mod shimmer;
pub mod style;

pub use config::*;
pub use error::*;
pub use length::*;
pub use node::*;
pub use props::*;
pub use shimmer::*;
pub use style::*;
