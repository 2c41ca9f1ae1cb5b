pub mod aggregate;
mod dashboard;
pub mod filter;

pub use dashboard::DashboardServiceImpl;
