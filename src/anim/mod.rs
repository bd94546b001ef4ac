pub mod chain;
pub mod driver;
pub mod scale;
pub mod state;

pub use chain::{Chain, Completed, Node, Sequence, Traversal};
pub use driver::{Animator, ScheduleError, Scheduler};
pub use state::{AnimState, Motion};
