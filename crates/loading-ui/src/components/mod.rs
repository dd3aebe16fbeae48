pub mod auto_skeleton;
pub mod skeleton;

pub use auto_skeleton::*;
pub use skeleton::*;
