use percent_encoding::percent_decode_str;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LocationError {
    #[error("Object URL could not be parsed: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Object key is not valid UTF-8 once percent-decoded")]
    InvalidEncoding,
    #[error("Object URL scheme {0:?} is not supported, expected s3:// or file://")]
    UnsupportedScheme(String),
    #[error("Object URL has no bucket")]
    MissingBucket,
    #[error("Object URL {0:?} is not a local absolute path")]
    InvalidFilePath(String),
    #[error("Object key {0:?} does not look like <guid>/<filename>")]
    InvalidKey(String),
}

/// Where the object's bytes live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    S3 { bucket: String, key: String },
    File(PathBuf),
}

/// A parsed object URL together with the Indexd record it belongs to.
///
/// Uploaded objects are keyed as `<guid>/<filename>`, where the guid itself may
/// contain a slash (`<dataguid>/<uuid>/<filename>`). Everything before the
/// last `/` of the key is the guid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    url: Url,
    locator: Locator,
    guid: String,
    file_name: String,
}

impl ObjectLocation {
    pub fn parse(raw: &str) -> Result<Self, LocationError> {
        let url = Url::parse(raw.trim())?;

        let (locator, key) = match url.scheme() {
            "s3" => {
                let bucket = url
                    .host_str()
                    .filter(|bucket| !bucket.is_empty())
                    .ok_or(LocationError::MissingBucket)?;
                // upload jobs hand over the key still escaped
                let path = url.path();
                let key = percent_decode_str(path.strip_prefix('/').unwrap_or(path))
                    .decode_utf8()
                    .map_err(|_| LocationError::InvalidEncoding)?
                    .into_owned();
                (
                    Locator::S3 {
                        bucket: bucket.to_string(),
                        key: key.clone(),
                    },
                    key,
                )
            }
            // file:///abs/path/<guid>/<filename>, the guid is the parent dir
            "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|()| LocationError::InvalidFilePath(url.to_string()))?;
                let key = match (path.parent().and_then(|p| p.file_name()), path.file_name()) {
                    (Some(dir), Some(file)) => {
                        format!("{}/{}", dir.to_string_lossy(), file.to_string_lossy())
                    }
                    _ => return Err(LocationError::InvalidKey(url.path().to_string())),
                };
                (Locator::File(path), key)
            }
            other => return Err(LocationError::UnsupportedScheme(other.to_string())),
        };

        let (guid, file_name) = split_key(&key)?;

        Ok(Self {
            guid: guid.to_string(),
            file_name: file_name.to_string(),
            url,
            locator,
        })
    }

    /// The URL as it will be recorded in Indexd, still percent-encoded.
    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    #[must_use]
    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    #[must_use]
    pub fn guid(&self) -> &str {
        &self.guid
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

fn split_key(key: &str) -> Result<(&str, &str), LocationError> {
    let invalid = || LocationError::InvalidKey(key.to_string());

    let (guid, file_name) = key.rsplit_once('/').ok_or_else(invalid)?;
    if file_name.is_empty() || guid.split('/').any(str::is_empty) {
        return Err(invalid());
    }
    Ok((guid, file_name))
}
