use crate::robots::{RobotsHeaders, RobotsMeta};
use crate::source::SourceError;
use log::{debug, info};
use reqwest::header::HeaderMap;
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Clone, Debug)]
pub struct RobotsSource {
    location: String,
    status_code: Option<u16>,
    headers: HeaderMap,
    content: String,
}

impl RobotsSource {
    pub fn new(location: &str, status_code: Option<u16>, headers: HeaderMap, content: String) -> Self {
        Self {
            location: location.to_owned(),
            status_code,
            headers,
            content,
        }
    }

    // A non-success status still yields a source.
    pub async fn load(source: &str) -> Result<Self, SourceError> {
        match Url::parse(source) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                Self::load_from_url(source, &url).await
            }
            Ok(url) if url.scheme() == "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|_| SourceError::UnsupportedSource(source.to_owned()))?;
                Self::load_from_path(source, &path).await
            }
            // Single letter schemes are Windows drive letters.
            Ok(url) if url.scheme().len() > 1 => {
                Err(SourceError::UnsupportedSource(source.to_owned()))
            }
            _ => Self::load_from_path(source, &PathBuf::from(source)).await,
        }
    }

    async fn load_from_url(source: &str, url: &Url) -> Result<Self, SourceError> {
        info!("fetching {}", url);
        let response = reqwest::get(url.clone()).await?;
        let status_code = response.status().as_u16();
        if !response.status().is_success() {
            info!("{} answered with status {}", url, status_code);
        }
        let headers = response.headers().clone();
        let content = response.text().await?;
        debug!("{}: {} headers, {} bytes of content", url, headers.len(), content.len());
        Ok(Self::new(source, Some(status_code), headers, content))
    }

    async fn load_from_path(source: &str, path: &Path) -> Result<Self, SourceError> {
        info!("reading {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|error| SourceError::Unreadable {
                location: source.to_owned(),
                error,
            })?;
        Ok(Self::new(source, None, HeaderMap::new(), content))
    }

    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    pub fn headers(&self) -> RobotsHeaders {
        RobotsHeaders::from_header_map(&self.headers)
    }

    pub fn meta(&self) -> RobotsMeta {
        RobotsMeta::create(&self.content)
    }
}
