pub mod report;
pub use report::ReportDocument;
pub use report::SaveAck;
pub use report::ServerRow;

pub mod status;
pub use status::DayStatus;
pub use status::ServerStatus;
pub use status::Weekday;
