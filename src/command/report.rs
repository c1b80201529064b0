use crate::client::BackendClient;
use crate::conf::Conf;
use crate::report::ReportView;
use crate::Result;
use std::fs;
use tracing::info;

/// Renders the report page, printing it is left to the browser opening it.
pub async fn run(conf: &Conf, out: Option<&String>) -> Result<()> {
    let client = BackendClient::new(&conf.backend_url)?;
    let view = ReportView::open(&client).await;
    let html = view.render();
    match out {
        Some(path) => {
            fs::write(path, html)?;
            info!(path, rows = view.rows().len(), "Report written");
        }
        None => println!("{html}"),
    }
    Ok(())
}
