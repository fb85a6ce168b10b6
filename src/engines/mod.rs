mod buffer;
mod parallel;
mod sequential;
mod threaded;
mod traits;

pub use buffer::{run_timed, DoubleBuffer};
pub use parallel::ParallelEngine;
pub use sequential::SequentialEngine;
pub use threaded::ThreadedEngine;
pub use traits::{registry, Engine, EngineKind};
