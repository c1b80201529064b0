use crate::model::{ReportDocument, SaveAck};
use crate::{Error, Result};
use reqwest::Client;
use url::Url;

/// Talks to the `/data` endpoint on behalf of the editing and report views.
#[derive(Clone)]
pub struct BackendClient {
    data_url: Url,
    http: Client,
}

impl BackendClient {
    pub fn new(backend_url: &Url) -> Result<BackendClient> {
        let mut data_url = backend_url.clone();
        data_url.set_query(None);
        data_url.set_fragment(None);
        data_url
            .path_segments_mut()
            .map_err(|_| Error::CLI(format!("Not a valid backend URL: {backend_url}")))?
            .pop_if_empty()
            .push("data");
        Ok(BackendClient {
            data_url,
            http: Client::new(),
        })
    }

    pub fn data_url(&self) -> &Url {
        &self.data_url
    }

    pub async fn fetch(&self) -> Result<ReportDocument> {
        let res = self
            .http
            .get(self.data_url.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn save(&self, doc: &ReportDocument) -> Result<SaveAck> {
        let res = self
            .http
            .post(self.data_url.clone())
            .json(doc)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }
}
