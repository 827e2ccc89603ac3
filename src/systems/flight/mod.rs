mod boundary;
mod model;

pub use boundary::enforce_envelope;
pub use model::{step, step_within};
