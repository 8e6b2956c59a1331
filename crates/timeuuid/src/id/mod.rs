mod hex;
mod node;
mod uuid;

pub use node::*;
pub use uuid::*;
