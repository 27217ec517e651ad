use crate::config::Config;
use crate::utils;
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use color_eyre::Help;
use log::debug;
use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{read, read_to_string, write};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Timeout applied to explicit-mime uploads, which may carry large files.
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Name of the multipart form field Clowder expects for file uploads.
const UPLOAD_FIELD: &str = "File";

// ----------------------------------------------------------------------------
// Clowder Client
// ----------------------------------------------------------------------------

/// Client for the Clowder HTTP API.
///
/// Requests target `<base>/api<path>` and authenticate with the access
/// key read from the local key file.
#[derive(Clone, Debug)]
pub struct ClowderClient {
    client: reqwest::Client,
    base_url: String,
    key: String,
}

/// Response of a file upload, only the created identifier is used.
#[derive(Clone, Debug, Deserialize)]
struct UploadedFile {
    id: String,
}

impl ClowderClient {
    /// Build a client from the configured base url and local key file.
    pub fn new(config: &Config) -> Result<Self, Report> {
        let key = read_to_string(&config.key_path)
            .wrap_err_with(|| format!("Failed to read access key: {:?}", config.key_path))
            .suggestion(format!(
                "Save your Clowder API key to {:?}.",
                config.key_path
            ))?;

        Ok(ClowderClient {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            key: key.trim().to_string(),
        })
    }

    /// Resolve an API path against the base url.
    fn api_url(&self, path: &str) -> Result<Url, Report> {
        let url = format!("{}/api{}", self.base_url, path);
        Url::parse(&url).wrap_err_with(|| format!("Invalid API url: {url}"))
    }

    /// GET a json endpoint and deserialize the response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Report> {
        let url = self.api_url(path)?;
        debug!("GET {url}");

        let response = self
            .client
            .get(url.clone())
            .header("X-API-Key", &self.key)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(eyre!(
                "GET {url} failed with status code {}.",
                response.status()
            ));
        }

        let body = response
            .json()
            .await
            .wrap_err_with(|| format!("Failed to parse response from: {url}"))?;

        Ok(body)
    }

    /// GET binary content and write it to a local path.
    pub async fn get_file(&self, path: &str, output_path: &Path) -> Result<(), Report> {
        let url = self.api_url(path)?;
        debug!("GET {url} to {output_path:?}");

        let response = self
            .client
            .get(url.clone())
            .header("X-API-Key", &self.key)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(eyre!(
                "GET {url} failed with status code {}.",
                response.status()
            ));
        }

        let content = response.bytes().await?;
        write(output_path, content)
            .wrap_err_with(|| format!("Unable to write file: {output_path:?}"))?;

        Ok(())
    }

    /// POST a json body and deserialize the response.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, Report> {
        let url = self.api_url(path)?;
        debug!("POST {url}");

        let response = self
            .client
            .post(url.clone())
            .header("X-API-Key", &self.key)
            .json(body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(eyre!(
                "POST {url} failed with status code {}.",
                response.status()
            ));
        }

        let body = response
            .json()
            .await
            .wrap_err_with(|| format!("Failed to parse response from: {url}"))?;

        Ok(body)
    }

    /// Upload a file as multipart form data, inferring its content type
    /// from the extension. Returns the identifier of the created file.
    pub async fn post_file(&self, path: &str, file_path: &Path) -> Result<String, Report> {
        let mime =
            utils::guess_mime_type(file_path).unwrap_or("application/octet-stream");
        let url = self.api_url(path)?;
        debug!("POST {url} file {file_path:?} as {mime}");

        let form = file_form(file_path, mime)?;
        let response = self
            .client
            .post(url.clone())
            .header("X-API-Key", &self.key)
            .multipart(form)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(eyre!(
                "POST {url} failed with status code {}.",
                response.status()
            ));
        }

        let uploaded: UploadedFile = response
            .json()
            .await
            .wrap_err_with(|| format!("Failed to parse response from: {url}"))?;

        Ok(uploaded.id)
    }

    /// Upload a file as multipart form data with an explicit content type,
    /// under the long upload timeout.
    pub async fn post_multipart(
        &self,
        path: &str,
        file_path: &Path,
        mime: &str,
    ) -> Result<(), Report> {
        let url = self.api_url(path)?;
        debug!("POST {url} file {file_path:?} as {mime}");

        let form = file_form(file_path, mime)?;
        let response = self
            .client
            .post(url.clone())
            .header("X-API-Key", &self.key)
            .multipart(form)
            .timeout(UPLOAD_TIMEOUT)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(eyre!(
                "POST {url} failed with status code {}.",
                response.status()
            ));
        }

        Ok(())
    }
}

/// Build the multipart form for one local file.
fn file_form(file_path: &Path, mime: &str) -> Result<multipart::Form, Report> {
    let file_name = file_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| eyre!("Unable to parse file name from: {file_path:?}"))?
        .to_string();

    let content = read(file_path)
        .wrap_err_with(|| format!("Failed to read file: {file_path:?}"))?;

    let part = multipart::Part::bytes(content)
        .file_name(file_name)
        .mime_str(mime)?;

    Ok(multipart::Form::new().part(UPLOAD_FIELD, part))
}
