mod age_risk;
pub use age_risk::AgeRiskChart;

mod bmi_scatter;
pub use bmi_scatter::BmiScatterChart;

mod checkup;
pub use checkup::CheckupChart;

mod heatmap;
pub use heatmap::HeatmapChart;

mod legend;
pub use legend::RiskLegend;

mod lifestyle;
pub use lifestyle::LifestyleChart;

mod radar;
pub use radar::RadarChart;

pub mod scale;

mod tooltip;
pub use tooltip::{HoverDetail, HoverLine, HoverOverlay};
