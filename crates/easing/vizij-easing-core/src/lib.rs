//! Vizij Easing Core
//!
//! Closed-form easing curves (linear, sine, circular, cubic, quadratic,
//! exponential, back, bounce, elastic) and the fixed table that names them.

pub mod functions;
pub mod table;

pub use table::{find, Easing, EasingFn, EASINGS, NUM_EASINGS};
