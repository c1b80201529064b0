use crate::client::BackendClient;
use crate::conf::Conf;
use crate::editor::EditSession;
use crate::model::Weekday;
use crate::{Error, Result};
use strum::IntoEnumIterator;
use tracing::warn;

const SAVED_MESSAGE: &str = "All data saved successfully!";

pub async fn show(conf: &Conf) -> Result<()> {
    let client = BackendClient::new(&conf.backend_url)?;
    let session = EditSession::open(&client).await;
    print!("{}", editing_table(&session));
    Ok(())
}

pub async fn add_row(conf: &Conf) -> Result<()> {
    let client = BackendClient::new(&conf.backend_url)?;
    let mut session = EditSession::open(&client).await;
    session.add_row();
    save(&session, &client).await;
    Ok(())
}

pub async fn delete_row(conf: &Conf, args: &[String]) -> Result<()> {
    let index = parse_serial(args.first())?;
    let client = BackendClient::new(&conf.backend_url)?;
    let mut session = EditSession::open(&client).await;
    if session.delete_row(index).is_none() {
        warn!(serial_no = index + 1, "No such row, nothing removed");
    }
    save(&session, &client).await;
    Ok(())
}

pub async fn set_field(conf: &Conf, args: &[String]) -> Result<()> {
    let index = parse_serial(args.first())?;
    let (Some(field), Some(value)) = (args.get(1), args.get(2)) else {
        return Err(Error::CLI("Usage: set-field <serial> <field> <value>".into()));
    };
    let client = BackendClient::new(&conf.backend_url)?;
    let mut session = EditSession::open(&client).await;
    session.set_field(index, field, value.as_str())?;
    save(&session, &client).await;
    Ok(())
}

pub async fn set_header(conf: &Conf, args: &[String]) -> Result<()> {
    let (Some(field), Some(value)) = (args.first(), args.get(1)) else {
        return Err(Error::CLI("Usage: set-header <field> <value>".into()));
    };
    let client = BackendClient::new(&conf.backend_url)?;
    let mut session = EditSession::open(&client).await;
    match field.as_str() {
        "startDate" => session.set_start_date(value.as_str()),
        "endDate" => session.set_end_date(value.as_str()),
        "spaceUsed" => session.set_space_used(value.as_str()),
        other => Err(Error::CLI(format!("Unknown header field: {other}")))?,
    }
    save(&session, &client).await;
    Ok(())
}

// Only success is reported to the operator, a failed save just ends up in
// the log and the command still exits normally
async fn save(session: &EditSession, client: &BackendClient) {
    if session.save(client).await.is_ok() {
        println!("{SAVED_MESSAGE}");
    }
}

fn parse_serial(arg: Option<&String>) -> Result<usize> {
    let arg = arg.ok_or_else(|| Error::CLI("Row serial number is missing".into()))?;
    match arg.parse::<usize>() {
        Ok(serial) if serial > 0 => Ok(serial - 1),
        _ => Err(Error::CLI(format!("Invalid row serial number: {arg}"))),
    }
}

fn editing_table(session: &EditSession) -> String {
    let doc = session.document();
    let mut res = String::new();
    res.push_str(&format!("Start Date: {}\n", doc.start_date));
    res.push_str(&format!("End Date: {}\n", doc.end_date));
    res.push_str(&format!("Space Used: {}\n", doc.space_used));
    let mut header = vec!["Serial No".to_string(), "Server Name".to_string()];
    header.extend(Weekday::iter().map(|it| it.to_string()));
    header.extend(["SSL Expiry Date", "Server Status", "Remark"].map(String::from));
    res.push_str(&header.join(" | "));
    res.push('\n');
    if session.rows().is_empty() {
        res.push_str("No data available\n");
    }
    for (index, row) in session.rows().iter().enumerate() {
        let mut cells = vec![(index + 1).to_string(), row.server_name.clone()];
        cells.extend(Weekday::iter().map(|day| row.day(day).to_string()));
        cells.push(row.ssl_expiry_date.clone());
        cells.push(row.server_status.clone());
        cells.push(row.remark.clone());
        res.push_str(&cells.join(" | "));
        res.push('\n');
    }
    res
}

#[cfg(test)]
mod test {
    use super::{editing_table, parse_serial};
    use crate::editor::EditSession;
    use crate::model::{ReportDocument, ServerRow};
    use crate::{Error, Result};

    #[test]
    fn serial_to_index() -> Result<()> {
        assert_eq!(0, parse_serial(Some(&"1".to_string()))?);
        assert_eq!(9, parse_serial(Some(&"10".to_string()))?);
        assert!(matches!(parse_serial(Some(&"0".to_string())), Err(Error::CLI(_))));
        assert!(matches!(parse_serial(Some(&"x".to_string())), Err(Error::CLI(_))));
        assert!(matches!(parse_serial(None), Err(Error::CLI(_))));
        Ok(())
    }

    #[test]
    fn empty_table() {
        let table = editing_table(&EditSession::default());
        assert!(table.contains("Serial No | Server Name | Saturday | Sunday"));
        assert!(table.ends_with("No data available\n"));
    }

    #[test]
    fn table_rows() {
        let session = EditSession::from_document(ReportDocument {
            space_used: "120GB".into(),
            table_data: vec![
                ServerRow {
                    server_name: "srv1".into(),
                    saturday: "AUTOMATIC".into(),
                    ..ServerRow::default()
                },
                ServerRow {
                    server_name: "srv2".into(),
                    remark: "ok".into(),
                    ..ServerRow::default()
                },
            ],
            ..ReportDocument::default()
        });
        let table = editing_table(&session);
        assert!(table.contains("Space Used: 120GB\n"));
        assert!(table.contains("\n1 | srv1 | AUTOMATIC |  |  |  |  |  |  |  |  | \n"));
        assert!(table.contains("\n2 | srv2 |  |  |  |  |  |  |  |  |  | ok\n"));
        assert!(!table.contains("No data available"));
    }
}
