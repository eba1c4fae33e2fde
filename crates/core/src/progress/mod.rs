//! Progress/streak engine - pure derivations over a goal and its completions.
//!
//! Nothing in here touches storage or the clock; callers pass the evaluation
//! date explicitly.

mod motivation;
pub mod progress_calculator;
mod progress_model;
pub mod streak_calculator;

pub use motivation::*;
pub use progress_calculator::*;
pub use progress_model::*;
pub use streak_calculator::*;
