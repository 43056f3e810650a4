use crate::{Endpoint, Result};
use indexs3client_api_types::index::{BlankRecordUpdate, IndexdRecord, UpdatedRecord};
use indexs3client_config::ServiceCredential;
use tracing::debug;

pub struct IndexdClient {
    endpoint: Endpoint,
}

impl IndexdClient {
    /// `credential.url` points at the index root, e.g. `http://indexd-service/index`.
    #[must_use]
    pub fn new(credential: &ServiceCredential) -> Self {
        Self::from_reqwest(credential, reqwest::Client::new())
    }

    #[must_use]
    pub fn from_reqwest(credential: &ServiceCredential, client: reqwest::Client) -> Self {
        Self {
            endpoint: Endpoint::new(credential, client),
        }
    }

    pub async fn get_record(&self, guid: &str) -> Result<IndexdRecord> {
        debug!(guid, "Fetching Indexd record");

        let resp = self.endpoint.get(guid).send().await?;

        resp.error_for_status_ref()?;

        let text = resp.text().await?;

        Ok(serde_json::from_str(&text)?)
    }

    /// Fill in size, hashes and urls of a blank record at revision `rev`.
    pub async fn update_blank_record(
        &self,
        guid: &str,
        rev: &str,
        update: &BlankRecordUpdate,
    ) -> Result<UpdatedRecord> {
        debug!(guid, rev, size = update.size, "Updating blank Indexd record");

        let resp = self
            .endpoint
            .put(&format!("blank/{guid}"))
            .query(&[("rev", rev)])
            .json(update)
            .send()
            .await?;

        resp.error_for_status_ref()?;

        let text = resp.text().await?;

        Ok(serde_json::from_str(&text)?)
    }
}
