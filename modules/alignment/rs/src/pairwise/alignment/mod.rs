pub use alignment::Alignment;
pub use op::Op;
pub use step::{Offset, Step, StepWithOffset};

mod alignment;
mod op;
pub mod step;
pub mod utils;
