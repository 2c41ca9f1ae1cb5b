mod dashboard;

#[rustfmt::skip]
pub use {
    dashboard::DashboardService,
};
