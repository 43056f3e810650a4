use crate::{Endpoint, Result};
use indexs3client_api_types::index::{MetadataObject, UPLOAD_STATUS_KEY, UPLOAD_STATUS_UPLOADED};
use indexs3client_config::ServiceCredential;
use reqwest::StatusCode;
use tracing::debug;

pub struct MetadataClient {
    endpoint: Endpoint,
}

impl MetadataClient {
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

    /// Returns `None` when the service has no entry for `guid`.
    pub async fn get_metadata(&self, guid: &str) -> Result<Option<MetadataObject>> {
        let resp = self.endpoint.get(&format!("metadata/{guid}")).send().await?;

        if resp.status() == StatusCode::NOT_FOUND {
            debug!(guid, "No metadata entry");
            return Ok(None);
        }

        resp.error_for_status_ref()?;

        let text = resp.text().await?;

        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Merge `fields` into the existing entry, leaving other keys alone.
    pub async fn merge_metadata(
        &self,
        guid: &str,
        fields: &MetadataObject,
    ) -> Result<MetadataObject> {
        let resp = self
            .endpoint
            .put(&format!("metadata/{guid}"))
            .query(&[("merge", "true")])
            .json(fields)
            .send()
            .await?;

        resp.error_for_status_ref()?;

        let text = resp.text().await?;

        Ok(serde_json::from_str(&text)?)
    }

    /// Flag the entry for `guid` as uploaded.
    ///
    /// Objects uploaded without a metadata entry are left alone, in which case
    /// this returns `false`.
    pub async fn mark_uploaded(&self, guid: &str) -> Result<bool> {
        if self.get_metadata(guid).await?.is_none() {
            return Ok(false);
        }

        debug!(guid, "Marking metadata entry as uploaded");
        let mut fields = MetadataObject::new();
        fields.insert(UPLOAD_STATUS_KEY.into(), UPLOAD_STATUS_UPLOADED.into());
        self.merge_metadata(guid, &fields).await?;

        Ok(true)
    }
}
