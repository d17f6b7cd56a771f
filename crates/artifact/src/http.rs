use crate::probe::{ArtifactProbe, BoxFuture, ProbeError, ProbeOutcome};

/// HEAD-request probe against a static artifact host.
///
/// A 2xx answer means the artifact exists; any other status is a hard
/// not-found. Transport errors surface as probe errors and are absorbed by
/// the pre-warm builder.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProbe {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl ArtifactProbe for HttpProbe {
    fn probe<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<ProbeOutcome, ProbeError>> {
        Box::pin(async move {
            let url = self.url_for(path);
            let response = self.client.head(&url).send().await?;

            if response.status().is_success() {
                Ok(ProbeOutcome::Exists)
            } else {
                Ok(ProbeOutcome::NotFound)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let probe = HttpProbe::new("http://localhost:8000/");
        assert_eq!(probe.url_for("joel.png"), "http://localhost:8000/joel.png");

        let probe = HttpProbe::new("http://localhost:8000");
        assert_eq!(probe.url_for("joel.png"), "http://localhost:8000/joel.png");
    }
}
