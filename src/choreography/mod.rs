/// Weighted interleaving of pattern steps
pub mod scheduler;
/// Named programs composed from patterns
pub mod shows;
/// Drawing context shared by the steps of a show
pub mod stage;

pub use scheduler::{Interleaver, interweave, interweave_actions, run_pattern};
pub use shows::{Show, run_show};
pub use stage::Stage;
