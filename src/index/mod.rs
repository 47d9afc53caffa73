pub mod inverted;
pub mod queue;
