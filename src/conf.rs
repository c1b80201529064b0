use crate::{Error, Result};
use std::{env, path::PathBuf};
use url::Url;

const DEFAULT_DATA_FILE: &str = "data.json";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct Conf {
    /// Location of the persisted report document, relative paths resolve
    /// against the working directory.
    pub data_file: PathBuf,
    pub bind_addr: String,
    pub port: u16,
    /// Base URL both views use to reach the `/data` endpoint.
    pub backend_url: Url,
}

impl Conf {
    pub fn from_env() -> Result<Conf> {
        Conf::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Conf> {
        let data_file = lookup("REPORT_DATA_FILE")
            .filter(|it| !it.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.into());
        let bind_addr = lookup("REPORT_BIND_ADDR")
            .filter(|it| !it.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let port = match lookup("REPORT_PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| Error::CLI(format!("Invalid REPORT_PORT: {port}")))?,
            None => DEFAULT_PORT,
        };
        let backend_url = lookup("REPORT_BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.into());
        Ok(Conf {
            data_file: data_file.into(),
            bind_addr,
            port,
            backend_url: Url::parse(&backend_url)?,
        })
    }
}
