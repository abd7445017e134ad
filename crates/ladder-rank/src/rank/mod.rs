mod naming;
mod playlist;
mod position;
mod resolver;

pub use naming::*;
pub use playlist::*;
pub use position::*;
pub use resolver::*;
