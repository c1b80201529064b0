use super::style::{day_style, CellStyle, REGULAR_STYLE, SERVER_STATUS_STYLE};
use crate::model::{ReportDocument, ServerRow, Weekday};
use strum::IntoEnumIterator;
use time::macros::format_description;
use time::Date;

pub const TITLE: &str = "IDRIVE WEEKLY REPORT";
pub const EMPTY_TABLE_MESSAGE: &str = "No data available";

const COLUMNS: [&str; 12] = [
    "Serial No",
    "Server Name",
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "SSL Expiry Date",
    "Server Status",
    "Remark",
];

const STYLESHEET: &str = r#"
    body { font-family: 'Lato', sans-serif; }
    .report { text-align: center; padding: 20px; }
    .report h1 { font-size: 2em; margin-bottom: 20px; color: #333; font-weight: 700; }
    .summary { margin-bottom: 20px; }
    .print { margin-bottom: 20px; padding: 10px 20px; font-size: 1em; cursor: pointer; background-color: #007bff; color: white; border: none; border-radius: 5px; }
    table { margin: auto; border-collapse: collapse; width: 90%; text-align: center; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1); border: 1px solid black; }
    th { padding: 4px; background-color: #007bff; color: white; border: 1px solid black; font-weight: 700; font-size: 0.7em; }
    td { padding: 4px; border: 1px solid black; font-size: 0.7em; }
    @media (max-width: 768px) {
        .report { padding: 10px; }
        .report h1 { font-size: 1.5em; margin-bottom: 10px; }
        .summary { font-size: 0.9em; }
        table { width: 100%; font-size: 0.6em; overflow-x: auto; display: block; }
        th, td { padding: 3px; font-size: 0.6em; }
    }
    @media print {
        @page { margin: 0; }
        body { margin: 1.6cm; }
        .print { display: none; }
        table { width: 100%; font-size: 0.8em; }
        th, td { -webkit-print-color-adjust: exact; print-color-adjust: exact; }
    }
"#;

/// Formats a stored `YYYY-MM-DD` date as `DD-MM-YYYY`. Anything after the
/// first ten characters (a time part) is ignored, values that don't start
/// with a date are shown as stored.
pub fn format_date(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    value
        .get(..10)
        .and_then(|it| Date::parse(it, &format_description!("[year]-[month]-[day]")).ok())
        .and_then(|it| it.format(&format_description!("[day]-[month]-[year]")).ok())
        .unwrap_or_else(|| value.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportCell {
    pub text: String,
    pub style: CellStyle,
}

impl ReportCell {
    fn new(text: impl Into<String>, style: CellStyle) -> Self {
        ReportCell {
            text: text.into(),
            style,
        }
    }
}

/// One rendered table line. Serial numbers come from the row position, so
/// they stay contiguous whatever rows were removed before.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub serial_no: usize,
    pub server_name: ReportCell,
    pub days: Vec<(Weekday, ReportCell)>,
    pub ssl_expiry_date: ReportCell,
    pub server_status: ReportCell,
    pub remark: ReportCell,
}

impl ReportRow {
    pub fn new(index: usize, row: &ServerRow) -> Self {
        ReportRow {
            serial_no: index + 1,
            server_name: ReportCell::new(&row.server_name, REGULAR_STYLE),
            days: Weekday::iter()
                .map(|day| {
                    let value = row.day(day);
                    (day, ReportCell::new(value, day_style(value)))
                })
                .collect(),
            ssl_expiry_date: ReportCell::new(format_date(&row.ssl_expiry_date), REGULAR_STYLE),
            server_status: ReportCell::new(&row.server_status, SERVER_STATUS_STYLE),
            remark: ReportCell::new(&row.remark, REGULAR_STYLE),
        }
    }

    fn cells(&self) -> Vec<ReportCell> {
        let mut cells = vec![
            ReportCell::new(self.serial_no.to_string(), REGULAR_STYLE),
            self.server_name.clone(),
        ];
        cells.extend(self.days.iter().map(|(_, cell)| cell.clone()));
        cells.push(self.ssl_expiry_date.clone());
        cells.push(self.server_status.clone());
        cells.push(self.remark.clone());
        cells
    }
}

pub fn report_rows(doc: &ReportDocument) -> Vec<ReportRow> {
    doc.table_data
        .iter()
        .enumerate()
        .map(|(index, row)| ReportRow::new(index, row))
        .collect()
}

pub fn render(doc: &ReportDocument) -> String {
    let title = html_escape(TITLE);
    let start_date = html_escape(&format_date(&doc.start_date));
    let end_date = html_escape(&format_date(&doc.end_date));
    let space_used = html_escape(&doc.space_used);
    let mut res = String::new();
    res.push_str("<!DOCTYPE html>");
    res.push_str(r#"<html lang="en">"#);
    res.push_str(r#"<head><meta charset="utf-8">"#);
    res.push_str(&format!("<title>{title}</title>"));
    res.push_str(&format!("<style>{STYLESHEET}</style>"));
    res.push_str("</head><body>");
    res.push_str(r#"<div class="report">"#);
    res.push_str(&format!("<h1>{title}</h1>"));
    res.push_str(&format!(
        r#"
            <div class="summary">
                <h2>Report Summary</h2>
                <p><strong>Start Date:</strong> {start_date}</p>
                <p><strong>End Date:</strong> {end_date}</p>
                <p><strong>Space Used:</strong> {space_used}</p>
            </div>
        "#
    ));
    res.push_str(r#"<button class="print" onclick="window.print()">Print Report</button>"#);
    res.push_str("<table><thead><tr>");
    for column in COLUMNS {
        res.push_str(&format!("<th>{column}</th>"));
    }
    res.push_str("</tr></thead><tbody>");
    let rows = report_rows(doc);
    if rows.is_empty() {
        res.push_str(&format!(
            r#"<tr><td colspan="{}" style="{} text-align: center;">{EMPTY_TABLE_MESSAGE}</td></tr>"#,
            COLUMNS.len(),
            REGULAR_STYLE.css(),
        ));
    }
    for row in rows {
        res.push_str("<tr>");
        for cell in row.cells() {
            res.push_str(&format!(
                r#"<td style="{}">{}</td>"#,
                cell.style.css(),
                html_escape(&cell.text),
            ));
        }
        res.push_str("</tr>");
    }
    res.push_str("</tbody></table></div></body></html>");
    res
}

fn html_escape(str: &str) -> String {
    str.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
