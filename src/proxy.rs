use reqwest::{Client, Proxy, Url};

use crate::error::ProxyError;
use crate::models::{ProxyCandidate, ProxyListResponse};

/// Looks up a forward proxy and takes the first candidate the provider returns.
pub async fn fetch_proxy(client: &Client, list_url: &Url) -> Result<ProxyCandidate, ProxyError> {
    tracing::debug!(%list_url, "requesting proxy list");

    let response = client
        .get(list_url.clone())
        .send()
        .await
        .map_err(ProxyError::Request)?;
    let body = response.bytes().await.map_err(ProxyError::Request)?;

    parse_proxy_list(&body)
}

pub fn parse_proxy_list(body: &[u8]) -> Result<ProxyCandidate, ProxyError> {
    let list: ProxyListResponse = serde_json::from_slice(body).map_err(ProxyError::Malformed)?;
    tracing::debug!(candidates = list.data.len(), "proxy list parsed");

    list.data
        .into_iter()
        .next()
        .map(|entry| ProxyCandidate {
            address: entry.ip_port,
        })
        .ok_or(ProxyError::Empty)
}

/// Turns a candidate into a transport setting that routes every request through it.
pub fn to_transport_proxy(candidate: &ProxyCandidate) -> Result<Proxy, ProxyError> {
    Proxy::all(candidate.proxy_url()).map_err(|source| ProxyError::InvalidAddress {
        address: candidate.address.clone(),
        source,
    })
}
