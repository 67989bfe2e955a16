//! REST client for the content backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unsupported` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Server rejections carry the
//! backend's `detail` string so forms and toasts can show it verbatim;
//! transport and decode failures keep their own variants for logging.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;

use super::types::{
    ApiMessage, Chapter, DomainWord, LoginResponse, ResetRequested, Section, SessionCheck, Taxonomy,
};

#[cfg(feature = "hydrate")]
use super::types::{ChapterList, DomainWordList, ErrorBody, SectionList, TaxonomyList};

/// Failure surfaced by any backend call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{0}")]
    Server(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unsupported,
}

/// Base URL of the content backend. Overridable at build time via
/// `LEXBOARD_API_BASE`.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("LEXBOARD_API_BASE").unwrap_or("http://localhost:8000")
}

/// Image URL for a taxonomy record, also used as the download source.
#[must_use]
pub fn taxonomy_image_url(taxonomy_id: &str) -> String {
    format!("{}/taxonomy/image/{taxonomy_id}", api_base())
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn server_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) => ApiError::Server(body.detail),
        Err(_) => ApiError::Server(format!("request failed: {status}")),
    }
}

#[cfg(feature = "hydrate")]
async fn parse_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(server_error(resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(network)?;
    parse_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn put_json<T: serde::de::DeserializeOwned>(
    url: &str,
    body: &serde_json::Value,
) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::put(url)
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    parse_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(
    url: &str,
    body: &serde_json::Value,
) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    parse_json(resp).await
}

// =============================================================
// Content collections
// =============================================================

/// Fetch every chapter with its full summary.
///
/// # Errors
///
/// Fails on transport, server, or decode problems; see [`ApiError`].
pub async fn fetch_chapters() -> Result<Vec<Chapter>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/all-chapters", api_base());
        let list: ChapterList = get_json(&url).await?;
        Ok(list.chapters)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unsupported)
    }
}

/// Replace a chapter's full summary with the given sentences.
///
/// # Errors
///
/// Fails on transport, server, or decode problems.
pub async fn replace_full_summary(
    chapter_id: &str,
    sentences: &[String],
) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/full-summary/replace/{chapter_id}", api_base());
        put_json(&url, &serde_json::json!({ "sentences": sentences })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chapter_id, sentences);
        Err(ApiError::Unsupported)
    }
}

/// Fetch every section summary.
///
/// # Errors
///
/// Fails on transport, server, or decode problems.
pub async fn fetch_sections() -> Result<Vec<Section>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/all-sections", api_base());
        let list: SectionList = get_json(&url).await?;
        Ok(list.sections)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unsupported)
    }
}

/// Replace one section's summary text.
///
/// # Errors
///
/// Fails on transport, server, or decode problems.
pub async fn replace_section_summary(
    chapter_id: &str,
    section_id: &str,
    summary: &str,
) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "{}/section-summary/replace/{chapter_id}/{section_id}",
            api_base()
        );
        put_json(&url, &serde_json::json!({ "section_summary": summary })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chapter_id, section_id, summary);
        Err(ApiError::Unsupported)
    }
}

/// Fetch every domain word.
///
/// # Errors
///
/// Fails on transport, server, or decode problems.
pub async fn fetch_domain_words() -> Result<Vec<DomainWord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/all-domain-words", api_base());
        let list: DomainWordList = get_json(&url).await?;
        Ok(list.domain_words)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unsupported)
    }
}

/// Rename a domain word's id.
///
/// # Errors
///
/// Fails on transport, server, or decode problems.
pub async fn update_domain_id(
    chapter_id: &str,
    domain_id: &str,
    new_domain_id: &str,
) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/domain-words/{chapter_id}/{domain_id}", api_base());
        put_json(&url, &serde_json::json!({ "domain_id": new_domain_id })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chapter_id, domain_id, new_domain_id);
        Err(ApiError::Unsupported)
    }
}

/// Update a domain word's definition and translation values.
///
/// # Errors
///
/// Fails on transport, server, or decode problems.
pub async fn update_definition(
    chapter_id: &str,
    domain_id: &str,
    definition: &str,
    translations: &BTreeMap<String, String>,
) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/domain-words/{chapter_id}/{domain_id}", api_base());
        put_json(
            &url,
            &serde_json::json!({
                "definition": definition,
                "translations": translations,
            }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chapter_id, domain_id, definition, translations);
        Err(ApiError::Unsupported)
    }
}

/// Update a domain word's structure map.
///
/// # Errors
///
/// Fails on transport, server, or decode problems.
pub async fn update_word_structure(
    chapter_id: &str,
    domain_id: &str,
    word_structure: &BTreeMap<String, String>,
) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/domain-words/{chapter_id}/{domain_id}", api_base());
        put_json(&url, &serde_json::json!({ "word_structure": word_structure })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chapter_id, domain_id, word_structure);
        Err(ApiError::Unsupported)
    }
}

/// Delete a domain word.
///
/// # Errors
///
/// Fails on transport, server, or decode problems.
pub async fn delete_domain_word(
    chapter_id: &str,
    domain_id: &str,
) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/domain-words/{chapter_id}/{domain_id}", api_base());
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(network)?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chapter_id, domain_id);
        Err(ApiError::Unsupported)
    }
}

/// Fetch every taxonomy record.
///
/// # Errors
///
/// Fails on transport, server, or decode problems.
pub async fn fetch_taxonomies() -> Result<Vec<Taxonomy>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/all-taxonomies", api_base());
        let list: TaxonomyList = get_json(&url).await?;
        Ok(list.taxonomies)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unsupported)
    }
}

/// Update a taxonomy's display name and image format.
///
/// # Errors
///
/// Fails on transport, server, or decode problems.
pub async fn update_taxonomy(
    chapter_id: &str,
    domain_id: &str,
    domain_name: &str,
    image_format: &str,
) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/taxonomy/{chapter_id}/{domain_id}", api_base());
        put_json(
            &url,
            &serde_json::json!({
                "domain_name": domain_name,
                "image_format": image_format,
            }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chapter_id, domain_id, domain_name, image_format);
        Err(ApiError::Unsupported)
    }
}

/// Fetch a taxonomy image as raw bytes for the download action.
///
/// # Errors
///
/// Fails on transport or server problems.
pub async fn fetch_taxonomy_image(taxonomy_id: &str) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = taxonomy_image_url(taxonomy_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(server_error(resp).await);
        }
        resp.binary().await.map_err(network)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = taxonomy_id;
        Err(ApiError::Unsupported)
    }
}

// =============================================================
// Sessions and accounts
// =============================================================

/// Exchange credentials for a session token.
///
/// # Errors
///
/// Fails on transport, server, or decode problems; bad credentials come
/// back as `ApiError::Server` with the backend's detail message.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/login", api_base());
        post_json(
            &url,
            &serde_json::json!({ "username": username, "password": password }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Unsupported)
    }
}

/// Create an account.
///
/// # Errors
///
/// Fails on transport, server, or decode problems; duplicate accounts come
/// back as `ApiError::Server`.
pub async fn signup(
    username: &str,
    email: &str,
    password: &str,
    domain: &str,
) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/signup", api_base());
        post_json(
            &url,
            &serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
                "domain": domain,
            }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password, domain);
        Err(ApiError::Unsupported)
    }
}

/// Check a stored session token against the backend.
///
/// # Errors
///
/// Invalid or expired sessions come back as `ApiError::Server`.
pub async fn verify_session(token: &str) -> Result<SessionCheck, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/verify-session?session_token={token}", api_base());
        get_json(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unsupported)
    }
}

/// Tell the backend to drop the session. Local state clears regardless of
/// the outcome, so failures are ignored.
pub async fn logout(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/logout?session_token={token}", api_base());
        let _ = gloo_net::http::Request::post(&url).send().await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Ask the backend to send password-reset instructions.
///
/// # Errors
///
/// Fails on transport, server, or decode problems.
pub async fn request_password_reset(email: &str) -> Result<ResetRequested, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/forgot-password", api_base());
        post_json(&url, &serde_json::json!({ "email": email })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Unsupported)
    }
}

/// Redeem a reset token for a new password.
///
/// # Errors
///
/// Expired or unknown tokens come back as `ApiError::Server`.
pub async fn reset_password(token: &str, new_password: &str) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/reset-password", api_base());
        post_json(
            &url,
            &serde_json::json!({ "token": token, "new_password": new_password }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, new_password);
        Err(ApiError::Unsupported)
    }
}
