mod filters;
pub use filters::FilterPanel;

mod kpis;
pub use kpis::KpiPanel;
