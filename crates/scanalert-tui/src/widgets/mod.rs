//! Custom widget components

mod dashboard;
mod header;
mod pricing;
mod settings_panel;
mod status_bar;
mod tabs;
mod toasts;

pub use dashboard::Dashboard;
pub use header::MainHeader;
pub use pricing::PricingPage;
pub use settings_panel::SettingsPanel;
pub use status_bar::StatusBar;
pub use tabs::TabBar;
pub use toasts::ToastCard;
