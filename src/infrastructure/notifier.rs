use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::{StatusCode, Url};
use thiserror::Error;

use crate::core::notification::{LikeNotification, NotifyOutcome};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },
    #[error("server rejected like status with {status}")]
    Rejected { status: StatusCode },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl NotifyError {
    pub fn outcome(&self) -> NotifyOutcome {
        match self {
            NotifyError::Rejected { status } => NotifyOutcome::Rejected {
                status: status.as_u16(),
            },
            other => NotifyOutcome::Failed {
                reason: other.to_string(),
            },
        }
    }
}

/// Delivers the user's choice to the remote collaborator
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: LikeNotification) -> BoxFuture<'_, Result<(), NotifyError>>;
}

/// Posts `{"Liked": bool}` to `<endpoint>/like`
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    client: reqwest::Client,
    like_url: Url,
}

fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Resolve `<endpoint>/like`, keeping any path prefix of the endpoint
pub fn like_url(endpoint: &str) -> Result<Url, NotifyError> {
    let invalid = |reason: String| NotifyError::InvalidEndpoint {
        url: endpoint.to_string(),
        reason,
    };
    let mut base = Url::parse(endpoint.trim()).map_err(|e| invalid(e.to_string()))?;
    if base.cannot_be_a_base() {
        return Err(invalid("not a base URL".to_string()));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("like").map_err(|e| invalid(e.to_string()))
}

impl HttpNotifier {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, NotifyError> {
        let like_url = like_url(endpoint)?;
        let client = reqwest::Client::builder()
            .user_agent(user_agent())
            .timeout(timeout)
            .build()?;
        Ok(Self { client, like_url })
    }

    pub fn like_url(&self) -> &Url {
        &self.like_url
    }

    /// Ask the endpoint for the stored choice
    pub async fn current(&self) -> Result<LikeNotification, NotifyError> {
        let response = self.client.get(self.like_url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected { status });
        }
        Ok(response.json::<LikeNotification>().await?)
    }

    async fn post(&self, notification: LikeNotification) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.like_url.clone())
            .json(&notification)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(NotifyError::Rejected { status })
        }
    }
}

impl Notifier for HttpNotifier {
    fn notify(&self, notification: LikeNotification) -> BoxFuture<'_, Result<(), NotifyError>> {
        Box::pin(self.post(notification))
    }
}
