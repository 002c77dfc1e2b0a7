//! Reusable Dioxus RSX components for the forecast dashboard.

mod back_button;
mod chart_container;
mod chart_header;
mod loading_spinner;
mod notice;
mod residual_model_selector;
mod score_table;
mod sidebar;
mod trace_selector;
mod well_about;
mod well_selector;

pub use back_button::BackButton;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use loading_spinner::LoadingSpinner;
pub use notice::{Notice, NoticeKind};
pub use residual_model_selector::ResidualModelSelector;
pub use score_table::ScoreTable;
pub use sidebar::Sidebar;
pub use trace_selector::TraceSelector;
pub use well_about::WellAbout;
pub use well_selector::WellSelector;
