mod read_error_policy;
mod read_outcome;

pub use read_error_policy::ReadErrorPolicy;
pub use read_outcome::ReadOutcome;
