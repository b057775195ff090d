//! Application constants and configuration

pub const APP_NAME: &str = "Customer Churn Analytics Dashboard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LOG_FILE: &str = "churn-dashboard.log";
pub const DEFAULT_LOG_FILTER: &str = "info,churn_dashboard=debug";

pub const WINDOW_SIZE: [f32; 2] = [1400.0, 900.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [1000.0, 700.0];
pub const ICON_SIZE: u32 = 64;
