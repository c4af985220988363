pub mod cell;
pub mod lines;
pub mod mark;
pub mod snapshot;
pub mod square;

pub use cell::*;
pub use lines::*;
pub use mark::*;
pub use snapshot::*;
pub use square::*;
