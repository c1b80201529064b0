use crate::client::BackendClient;
use crate::model::{DayStatus, ReportDocument, SaveAck, ServerRow, ServerStatus, Weekday};
use crate::{Error, Result};
use tracing::{error, info, warn};

/// In-memory copy of the report being edited. Nothing reaches the backend
/// until `save`, which always sends the whole document.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    doc: ReportDocument,
}

impl EditSession {
    /// A failed fetch is logged and the session starts from an empty report.
    pub async fn open(client: &BackendClient) -> EditSession {
        match client.fetch().await {
            Ok(doc) => EditSession::from_document(doc),
            Err(e) => {
                error!(
                    url = %client.data_url(),
                    error = e.to_string(),
                    "Error fetching data",
                );
                EditSession::default()
            }
        }
    }

    pub fn from_document(doc: ReportDocument) -> EditSession {
        EditSession { doc }
    }

    pub fn document(&self) -> &ReportDocument {
        &self.doc
    }

    pub fn rows(&self) -> &[ServerRow] {
        &self.doc.table_data
    }

    pub fn set_start_date(&mut self, value: impl Into<String>) {
        self.doc.start_date = value.into();
    }

    pub fn set_end_date(&mut self, value: impl Into<String>) {
        self.doc.end_date = value.into();
    }

    pub fn set_space_used(&mut self, value: impl Into<String>) {
        self.doc.space_used = value.into();
    }

    pub fn add_row(&mut self) {
        self.doc.table_data.push(ServerRow::default());
    }

    /// Removing a row shifts the ones after it up, there are no stable row
    /// ids. Returns `None` when `index` is out of range.
    pub fn delete_row(&mut self, index: usize) -> Option<ServerRow> {
        if index < self.doc.table_data.len() {
            Some(self.doc.table_data.remove(index))
        } else {
            None
        }
    }

    /// Values are stored as given. Unrecognized statuses are only reported,
    /// the report renders them with the default style.
    pub fn set_field(&mut self, index: usize, field: &str, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        let rows = self.doc.table_data.len();
        let Some(row) = self.doc.table_data.get_mut(index) else {
            return Err(Error::InvalidInput(format!(
                "Row {index} doesn't exist, the report has {rows} rows"
            )));
        };
        if !value.is_empty() {
            if field.parse::<Weekday>().is_ok() && DayStatus::parse(&value).is_none() {
                warn!(field, value, "Unrecognized day status");
            }
            if field == "serverStatus" && ServerStatus::parse(&value).is_none() {
                warn!(value, "Unrecognized server status");
            }
        }
        row.set_field(field, value);
        Ok(())
    }

    /// Sends the complete document. A failure is logged and the local state
    /// is kept as is, so the operator can retry.
    pub async fn save(&self, client: &BackendClient) -> Result<SaveAck> {
        match client.save(&self.doc).await {
            Ok(ack) => {
                info!(ack = ack.message, "Save result");
                Ok(ack)
            }
            Err(e) => {
                error!(
                    url = %client.data_url(),
                    error = e.to_string(),
                    "Error saving data",
                );
                Err(e)
            }
        }
    }
}
