pub mod plot;
pub mod signal_generator;
