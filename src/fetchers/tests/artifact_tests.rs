use super::StaticFetcher;
use crate::fetchers::artifacts::{self, ArtifactKind, SiteArtifact};
use crate::fetchers::FetchError;
use std::time::Duration;
use url::Url;

#[cfg(test)]
mod site_root_tests {
    use super::*;

    #[test]
    fn test_site_root_strips_path_and_query() {
        let url = Url::parse("https://example.com/blog/post?id=1#top").unwrap();
        assert_eq!(
            artifacts::site_root(&url).as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_site_root_keeps_explicit_port() {
        let url = Url::parse("http://localhost:8080/page").unwrap();
        assert_eq!(
            artifacts::site_root(&url).as_deref(),
            Some("http://localhost:8080")
        );
    }

    #[test]
    fn test_artifact_urls() {
        let url = Url::parse("https://example.com/a/b/c.html").unwrap();
        assert_eq!(
            artifacts::artifact_url(&url, ArtifactKind::Robots)
                .unwrap()
                .as_str(),
            "https://example.com/robots.txt"
        );
        assert_eq!(
            artifacts::artifact_url(&url, ArtifactKind::Sitemap)
                .unwrap()
                .as_str(),
            "https://example.com/sitemap.xml"
        );
    }

    #[test]
    fn test_no_host() {
        let url = Url::parse("data:text/plain,hello").unwrap();
        assert!(artifacts::site_root(&url).is_none());
        assert!(artifacts::artifact_url(&url, ArtifactKind::Robots).is_none());
    }
}

#[cfg(test)]
mod classification_tests {
    use super::*;

    #[test]
    fn test_sentinel_is_unavailable_in_any_case() {
        for text in [
            "robots.txt not available",
            "ROBOTS.TXT NOT AVAILABLE",
            "Robots.txt Not Available",
        ] {
            let artifact = SiteArtifact::from_text(ArtifactKind::Robots, "", text);
            assert!(!artifact.is_available(), "{:?} should be unavailable", text);
        }
    }

    #[test]
    fn test_any_other_text_is_available() {
        for text in ["User-agent: *\nDisallow:", "", "<html>404</html>", "garbage"] {
            let artifact = SiteArtifact::from_text(ArtifactKind::Robots, "", text);
            assert!(artifact.is_available(), "{:?} should be available", text);
        }
    }

    #[test]
    fn test_sentinel_is_per_kind() {
        let artifact =
            SiteArtifact::from_text(ArtifactKind::Sitemap, "", "robots.txt not available");
        assert!(artifact.is_available());
    }

    #[test]
    fn test_display_text() {
        let missing = SiteArtifact::Unavailable {
            kind: ArtifactKind::Sitemap,
            url: "https://example.com/sitemap.xml".to_string(),
            reason: "HTTP status 404".to_string(),
        };
        assert_eq!(missing.display_text(), "sitemap.xml not available");
        assert_eq!(missing.kind(), ArtifactKind::Sitemap);
        assert_eq!(missing.url(), "https://example.com/sitemap.xml");
    }
}

#[cfg(test)]
mod fetch_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetched_body_is_truncated() {
        let body = "x".repeat(1500);
        let fetcher = StaticFetcher::default().with("https://example.com/robots.txt", Ok(body.as_str()));
        let page = Url::parse("https://example.com/page").unwrap();

        let artifact = artifacts::fetch_site_artifact(
            &fetcher,
            &page,
            ArtifactKind::Robots,
            Duration::from_secs(10),
            1000,
        )
        .await;

        match artifact {
            SiteArtifact::Fetched { body, url, .. } => {
                assert_eq!(body.chars().count(), 1000);
                assert_eq!(url, "https://example.com/robots.txt");
            }
            other => panic!("expected fetched artifact, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_fetch_is_unavailable() {
        let fetcher = StaticFetcher::default().with(
            "https://example.com/sitemap.xml",
            Err(FetchError::Status {
                status: 404,
                body: "not found".to_string(),
            }),
        );
        let page = Url::parse("https://example.com/").unwrap();

        let artifact = artifacts::fetch_site_artifact(
            &fetcher,
            &page,
            ArtifactKind::Sitemap,
            Duration::from_secs(10),
            1000,
        )
        .await;

        assert!(!artifact.is_available());
        assert_eq!(artifact.display_text(), "sitemap.xml not available");
        match artifact {
            SiteArtifact::Unavailable { reason, .. } => assert_eq!(reason, "HTTP status 404"),
            other => panic!("expected unavailable artifact, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_timeout_is_unavailable() {
        let fetcher =
            StaticFetcher::default().with("https://example.com/robots.txt", Err(FetchError::Timeout));
        let page = Url::parse("https://example.com/").unwrap();

        let artifact = artifacts::fetch_site_artifact(
            &fetcher,
            &page,
            ArtifactKind::Robots,
            Duration::from_secs(10),
            1000,
        )
        .await;

        assert!(!artifact.is_available());
    }
}
