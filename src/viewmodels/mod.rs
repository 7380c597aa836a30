pub mod filter;
pub mod dashboard_viewmodel;

pub use dashboard_viewmodel::DashboardViewModel;
