pub mod chart;
pub mod dashboard;
mod envelope;
mod filter;

#[rustfmt::skip]
pub use {
    envelope::{ResponseEnvelope, ResponseStatus},
    filter::FilterState,
};
