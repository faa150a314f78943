//! Pure data pipeline: typed records in, chart-ready series out.

pub mod aggregate;
pub mod dataset;
pub mod filter;
pub mod format;
pub mod kpi;
pub mod profile;
pub mod record;
