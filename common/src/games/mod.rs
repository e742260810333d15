mod scheduler;
mod session_rng;

pub mod snake;

pub use scheduler::{ManualTickScheduler, TickScheduler, TickSignal, TokioTickScheduler};
pub use session_rng::SessionRng;
