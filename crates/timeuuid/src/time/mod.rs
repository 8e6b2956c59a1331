mod epoch;
mod interface;
mod system_clock;

pub use epoch::*;
pub use interface::*;
pub use system_clock::*;
