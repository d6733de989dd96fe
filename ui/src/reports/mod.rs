mod table;
pub use table::ReportDayCards;

mod heatmap;
pub use heatmap::HeatmapSurface;

mod export;
pub use export::ReportsExportPanel;

mod utils;
pub use utils::ReportRow;
pub(crate) use utils::*;

use api::ReportResponse;

use crate::core::sample::ActivitySample;

/// Everything the reports page derives from one fetch: tabular rows for the
/// cards and exporters, grid samples for the surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportsData {
    pub rows: Vec<ReportRow>,
    pub samples: Vec<ActivitySample>,
}

impl ReportsData {
    pub fn from_response(response: &ReportResponse) -> Self {
        Self {
            rows: report_rows(response),
            samples: heat_samples(response),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
