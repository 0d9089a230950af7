//! Container log retrieval and normalization
//!
//! Deployments serve container logs in one of two formats: the resource
//! manager's web UI (log text embedded in an HTML page) or a dedicated log
//! service (plain text). Each format branch is a pure function from the
//! response body and URLs to a [`ContainerLog`], so the parsing is fully
//! unit-testable without a live backend.
//!
//! Invariant: the returned `full_log_link` is always an absolute URL, even
//! when the HTML page carried a relative one.

use reqwest::Url;
use reqwest::header::CONTENT_TYPE;
use scraper::{ElementRef, Html, Selector};

use crate::PlatformClient;
use crate::error::{ClientError, Result};
use gantry_core::domain::log::{ContainerLog, LogFormat};

impl PlatformClient {
    /// Fetch and normalize a container log
    ///
    /// The log endpoint is separate from the REST server and is fetched
    /// without credentials. Responses with no content-type header, and any
    /// parse failure on the HTML path, fail with the fixed
    /// "Log not available" message.
    pub async fn get_container_log(&self, log_url: &str) -> Result<ContainerLog> {
        let response = self.client.get(log_url).send().await?;

        let status = response.status();
        let response_url = response.url().clone();
        let has_content_type = response.headers().contains_key(CONTENT_TYPE);
        let body = response.text().await?;

        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string());
            return Err(ClientError::Generic(reason));
        }

        if !has_content_type {
            return Err(ClientError::log_unavailable());
        }

        match self.log_format() {
            LogFormat::Yarn => parse_yarn_log(&body, log_url, &response_url),
            LogFormat::LogManager => Ok(log_manager_log(body, log_url)),
        }
    }
}

/// Parse an HTML-embedded (resource manager UI) log page
///
/// The log text is the first `<pre>` under the page's `.content` element.
/// If the `<pre>`'s previous element sibling holds exactly one anchor, that
/// anchor is the link to the full log; a relative href is resolved against
/// the page's `<base>` tag (itself resolved against the response URL when
/// relative), or against the response URL when no base tag exists.
///
/// Any shape mismatch yields the fixed "Log not available" failure instead
/// of a parse error.
pub fn parse_yarn_log(body: &str, log_url: &str, response_url: &Url) -> Result<ContainerLog> {
    let document = Html::parse_document(body);

    let pre_selector =
        Selector::parse(".content pre").map_err(|_| ClientError::log_unavailable())?;
    let pre = document
        .select(&pre_selector)
        .next()
        .ok_or_else(ClientError::log_unavailable)?;
    let text: String = pre.text().collect();

    let mut full_log_link = log_url.to_string();
    if let Some(link) = full_log_anchor(pre) {
        if let Some(href) = link.value().attr("href") {
            full_log_link = resolve_link(href, &document, response_url)?;
        }
    }

    Ok(ContainerLog {
        text: Some(text),
        full_log_link,
    })
}

/// Normalize a plain-text log service response
///
/// The body is the log verbatim; the service exposes the complete log at
/// the same path with the `tail` segment replaced by `full`.
pub fn log_manager_log(body: String, log_url: &str) -> ContainerLog {
    ContainerLog {
        text: Some(body),
        full_log_link: log_url.replacen("/tail/", "/full/", 1),
    }
}

/// The single anchor inside the `<pre>`'s previous element sibling, if any
fn full_log_anchor<'a>(pre: ElementRef<'a>) -> Option<ElementRef<'a>> {
    let sibling = pre.prev_siblings().find_map(ElementRef::wrap)?;
    let anchor_selector = Selector::parse("a").ok()?;
    let mut anchors = sibling.select(&anchor_selector);
    let first = anchors.next()?;
    // A sibling with several links is ambiguous; leave the link untouched.
    if anchors.next().is_some() {
        return None;
    }
    Some(first)
}

/// Resolve an href to an absolute URL
///
/// Precedence for the base of a relative href: the document's `<base>` tag
/// (itself resolved against the response URL when relative), then the
/// response URL.
fn resolve_link(href: &str, document: &Html, response_url: &Url) -> Result<String> {
    if Url::parse(href).is_ok() {
        return Ok(href.to_string());
    }

    let mut base = response_url.clone();
    if let Some(base_href) = base_tag_href(document) {
        base = match Url::parse(&base_href) {
            Ok(url) => url,
            Err(_) => response_url
                .join(&base_href)
                .map_err(|_| ClientError::log_unavailable())?,
        };
    }

    base.join(href)
        .map(|url| url.to_string())
        .map_err(|_| ClientError::log_unavailable())
}

/// The document's `<base href>` value, if present
///
/// There can be only one `<base>` element in a document.
fn base_tag_href(document: &Html) -> Option<String> {
    let selector = Selector::parse("base[href]").ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG_URL: &str = "http://node1:8042/node/containerlogs/container_001/stdout";

    fn response_url() -> Url {
        Url::parse(LOG_URL).unwrap()
    }

    fn page(head: &str, content: &str) -> String {
        format!(
            "<html><head>{}</head><body><div class=\"content\">{}</div></body></html>",
            head, content
        )
    }

    #[test]
    fn test_yarn_log_extracts_pre_text() {
        let body = page("", "<pre>line one\nline two</pre>");
        let log = parse_yarn_log(&body, LOG_URL, &response_url()).unwrap();
        assert_eq!(log.text.as_deref(), Some("line one\nline two"));
        assert_eq!(log.full_log_link, LOG_URL);
    }

    #[test]
    fn test_yarn_log_relative_link_resolves_against_base_tag() {
        let body = page(
            "<base href=\"http://h/x/\">",
            "<p><a href=\"full/stdout.log\">full log</a></p><pre>log</pre>",
        );
        let log = parse_yarn_log(&body, LOG_URL, &response_url()).unwrap();
        assert_eq!(log.full_log_link, "http://h/x/full/stdout.log");
    }

    #[test]
    fn test_yarn_log_relative_base_tag_resolves_against_response_url() {
        let body = page(
            "<base href=\"/logs/\">",
            "<p><a href=\"stdout.full\">full log</a></p><pre>log</pre>",
        );
        let log = parse_yarn_log(&body, LOG_URL, &response_url()).unwrap();
        assert_eq!(log.full_log_link, "http://node1:8042/logs/stdout.full");
    }

    #[test]
    fn test_yarn_log_relative_link_without_base_uses_response_url() {
        let body = page("", "<p><a href=\"stdout.full\">full log</a></p><pre>log</pre>");
        let log = parse_yarn_log(&body, LOG_URL, &response_url()).unwrap();
        assert_eq!(
            log.full_log_link,
            "http://node1:8042/node/containerlogs/container_001/stdout.full"
        );
    }

    #[test]
    fn test_yarn_log_absolute_link_kept_verbatim() {
        let body = page(
            "<base href=\"http://ignored/\">",
            "<p><a href=\"https://archive/c1.log\">full log</a></p><pre>log</pre>",
        );
        let log = parse_yarn_log(&body, LOG_URL, &response_url()).unwrap();
        assert_eq!(log.full_log_link, "https://archive/c1.log");
    }

    #[test]
    fn test_yarn_log_ambiguous_sibling_links_leave_request_url() {
        let body = page(
            "",
            "<p><a href=\"a.log\">a</a><a href=\"b.log\">b</a></p><pre>log</pre>",
        );
        let log = parse_yarn_log(&body, LOG_URL, &response_url()).unwrap();
        assert_eq!(log.full_log_link, LOG_URL);
    }

    #[test]
    fn test_yarn_log_without_pre_is_unavailable() {
        let body = page("", "<p>no logs here</p>");
        let err = parse_yarn_log(&body, LOG_URL, &response_url()).unwrap_err();
        assert_eq!(err.to_string(), "Log not available");
    }

    #[test]
    fn test_yarn_log_non_html_body_is_unavailable() {
        let err = parse_yarn_log("plain text, no markup", LOG_URL, &response_url()).unwrap_err();
        assert_eq!(err.to_string(), "Log not available");
    }

    #[test]
    fn test_log_manager_replaces_tail_segment() {
        let url = "http://log-manager:9200/api/v1/logs/tail/abc";
        let log = log_manager_log("raw body".to_string(), url);
        assert_eq!(log.text.as_deref(), Some("raw body"));
        assert_eq!(
            log.full_log_link,
            "http://log-manager:9200/api/v1/logs/full/abc"
        );
    }

    #[test]
    fn test_log_manager_without_tail_segment_keeps_url() {
        let url = "http://log-manager:9200/api/v1/logs/abc";
        let log = log_manager_log(String::new(), url);
        assert_eq!(log.full_log_link, url);
    }
}
