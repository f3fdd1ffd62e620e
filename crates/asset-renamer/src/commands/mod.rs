mod basename;
mod batch;
mod format;
mod rules;

pub use basename::*;
pub use batch::*;
pub use format::*;
pub use rules::*;
