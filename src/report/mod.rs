pub mod render;
pub mod style;

use crate::client::BackendClient;
use crate::model::ReportDocument;
use render::ReportRow;
use tracing::{debug, error};

/// Read-only view of the stored document. It is fetched once when the view
/// opens and never written back.
pub struct ReportView {
    doc: ReportDocument,
}

impl ReportView {
    /// A failed fetch is logged and leaves the view empty.
    pub async fn open(client: &BackendClient) -> ReportView {
        match client.fetch().await {
            Ok(doc) => {
                debug!(rows = doc.table_data.len(), "Fetched report data");
                ReportView::from_document(doc)
            }
            Err(e) => {
                error!(
                    url = %client.data_url(),
                    error = e.to_string(),
                    "Error fetching data",
                );
                ReportView::from_document(ReportDocument::default())
            }
        }
    }

    pub fn from_document(doc: ReportDocument) -> ReportView {
        ReportView { doc }
    }

    pub fn rows(&self) -> Vec<ReportRow> {
        render::report_rows(&self.doc)
    }

    pub fn render(&self) -> String {
        render::render(&self.doc)
    }
}
