//! Image-of-the-day feed model.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Host prefixed to the host-relative image path from the feed.
pub const FEED_HOST: &str = "http://cn.bing.com";

pub const FEED_ENDPOINT: &str =
    "https://cn.bing.com/HPImageArchive.aspx?format=js&idx=0&n=1&mkt=zh-CN";

#[derive(Debug, Deserialize)]
pub struct FeedResponse {
    pub images: Vec<FeedImage>,
}

#[derive(Debug, Deserialize)]
pub struct FeedImage {
    pub url: String,
}

/// Extract `images[0].url` from a feed body and make it absolute.
pub fn parse_image_url(body: &str) -> Result<String> {
    let resp: FeedResponse =
        serde_json::from_str(body).map_err(|e| Error::Parse(format!("feed document: {e}")))?;

    let first = resp
        .images
        .into_iter()
        .next()
        .ok_or_else(|| Error::Parse("feed document: empty `images` list".into()))?;

    absolute_url(&first.url)
}

fn absolute_url(path: &str) -> Result<String> {
    if path.is_empty() {
        return Err(Error::Parse("feed document: empty image url".into()));
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return Ok(path.to_string());
    }
    Ok(format!("{FEED_HOST}{path}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_fixed_host() {
        let body = r#"{"images":[{"url":"/th?id=OHR.test_1920x1080.jpg"}]}"#;
        assert_eq!(
            parse_image_url(body).unwrap(),
            "http://cn.bing.com/th?id=OHR.test_1920x1080.jpg"
        );
    }

    #[test]
    fn only_first_entry_is_used() {
        let body = r#"{"images":[{"url":"/a.jpg","title":"x"},{"url":"/b.jpg"}],"tooltips":{}}"#;
        assert_eq!(parse_image_url(body).unwrap(), "http://cn.bing.com/a.jpg");
    }

    #[test]
    fn absolute_url_passes_through() {
        let body = r#"{"images":[{"url":"https://example.org/x.jpg"}]}"#;
        assert_eq!(parse_image_url(body).unwrap(), "https://example.org/x.jpg");
    }

    #[test]
    fn missing_or_malformed_fields_are_parse_errors() {
        for body in [
            "not json",
            "{}",
            r#"{"images":[]}"#,
            r#"{"images":[{}]}"#,
            r#"{"images":[{"url":42}]}"#,
            r#"{"images":[{"url":""}]}"#,
        ] {
            assert!(
                matches!(parse_image_url(body), Err(Error::Parse(_))),
                "body {body:?}"
            );
        }
    }
}
