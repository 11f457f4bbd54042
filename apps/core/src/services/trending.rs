//! Trending topic collection from RSS, Atom and JSON Feed sources.
//!
//! Entries older than a week are dropped, tagged with domain keywords and
//! ranked by the engine. When a niche yields nothing, a fixed list of
//! evergreen topics stands in.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use feed_rs::model::Entry;
use feed_rs::parser;
use reqwest::Client;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::engine::feed::MAX_ENTRY_AGE_DAYS;
use crate::engine::{extract_feed_keywords, is_recent, rank_feed_topics_at, FeedTopic};
use crate::error::AppError;
use crate::services::traits::FeedSource;

/// Items read per feed
pub const MAX_ITEMS_PER_FEED: usize = 20;
pub const SUGGESTION_COUNT: usize = 3;
pub const FALLBACK_SOURCE: &str = "fallback";

const SUGGESTION_POOL: usize = 5;

/// Built-in feed sources, overridable via `data/feeds.json`
pub const DEFAULT_FEEDS: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            "https://feeds.feedburner.com/TechCrunch",
            "https://www.wired.com/feed/rss",
            "https://feeds.feedburner.com/oreilly/radar",
        ],
    ),
    (
        "business",
        &[
            "https://feeds.feedburner.com/entrepreneur",
            "https://feeds.a.dj.com/rss/RSSWorldNews.xml",
        ],
    ),
    (
        "health",
        &[
            "https://feeds.feedburner.com/healthline",
            "https://www.medicalnewstoday.com/rss",
        ],
    ),
    ("lifestyle", &["https://feeds.feedburner.com/MinimalismBlog"]),
];

const TECHNOLOGY_TOPICS: &[&str] = &[
    "Latest AI breakthroughs transforming industries",
    "Cybersecurity trends every business should know",
    "The future of cloud computing in 2024",
    "How automation is changing the workplace",
    "Blockchain applications beyond cryptocurrency",
    "The rise of quantum computing",
    "IoT devices revolutionizing smart homes",
    "Machine learning in healthcare innovation",
    "5G technology changing mobile experiences",
    "Virtual reality in education and training",
];

const BUSINESS_TOPICS: &[&str] = &[
    "Remote work strategies for productivity",
    "Digital marketing trends for small businesses",
    "Sustainable business practices gaining momentum",
    "Entrepreneurship in the digital age",
    "Customer experience optimization techniques",
    "Supply chain innovation and efficiency",
    "Financial planning for business growth",
    "Leadership skills for modern managers",
    "E-commerce strategies that work",
    "Building company culture remotely",
];

const HEALTH_TOPICS: &[&str] = &[
    "Mental health awareness and strategies",
    "Nutrition trends for optimal wellness",
    "Exercise routines for busy professionals",
    "Sleep optimization for better health",
    "Stress management in modern life",
    "Preventive healthcare approaches",
    "Healthy aging strategies",
    "Immune system boosting tips",
    "Digital health monitoring tools",
    "Mindfulness and meditation benefits",
];

const LIFESTYLE_TOPICS: &[&str] = &[
    "Minimalism for modern living",
    "Sustainable lifestyle choices",
    "Work-life balance strategies",
    "Personal development and growth",
    "Time management techniques",
    "Travel tips for budget-conscious adventurers",
    "Home organization and decluttering",
    "Financial wellness and budgeting",
    "Creative hobbies for stress relief",
    "Building meaningful relationships",
];

/// Evergreen topics for a niche; unknown niches get the technology list.
pub fn fallback_topics(niche: &str, max_topics: usize) -> Vec<FeedTopic> {
    let titles = match niche.to_lowercase().as_str() {
        "business" => BUSINESS_TOPICS,
        "health" => HEALTH_TOPICS,
        "lifestyle" => LIFESTYLE_TOPICS,
        _ => TECHNOLOGY_TOPICS,
    };

    titles
        .iter()
        .take(max_topics)
        .map(|title| FeedTopic::titled(*title, FALLBACK_SOURCE))
        .collect()
}

/// A syndication feed (RSS, Atom or JSON Feed) fetched over HTTP.
pub struct HttpFeedSource {
    client: Client,
    url: String,
}

impl HttpFeedSource {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

fn entry_topic(entry: Entry, source: &str) -> Option<FeedTopic> {
    let title = entry.title.map(|t| t.content).filter(|t| !t.trim().is_empty())?;
    let summary = entry
        .summary
        .map(|s| s.content)
        .or_else(|| entry.content.and_then(|c| c.body))
        .unwrap_or_default();

    Some(FeedTopic {
        title,
        summary,
        link: entry.links.into_iter().next().map(|l| l.href).unwrap_or_default(),
        published: entry.published.or(entry.updated).map(|d| d.to_rfc3339()),
        source: source.to_string(),
        keywords: vec![],
    })
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<FeedTopic>, AppError> {
        let res = self.client.get(&self.url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(AppError::Service(format!(
                "Feed {} responded with status {}",
                self.url, status
            )));
        }

        let body = res.bytes().await?;
        let feed = parser::parse(&body[..])?;
        let source = feed
            .title
            .map(|t| t.content)
            .unwrap_or_else(|| "Unknown".to_string());

        Ok(feed
            .entries
            .into_iter()
            .take(MAX_ITEMS_PER_FEED)
            .filter_map(|entry| entry_topic(entry, &source))
            .collect())
    }
}

/// Gathers and ranks entries for a niche from its configured sources.
pub struct TrendingCollector {
    sources: HashMap<String, Vec<Arc<dyn FeedSource>>>,
}

impl TrendingCollector {
    /// Collector over explicit sources, keyed by lower-case niche.
    pub fn with_sources(sources: HashMap<String, Vec<Arc<dyn FeedSource>>>) -> Self {
        Self { sources }
    }

    /// Collector over the built-in feed table, or `feeds_file` when it exists.
    pub fn from_config(config: &AppConfig, feeds_file: &Path) -> Result<Self, AppError> {
        let client = Client::builder().timeout(config.http_timeout()).build()?;

        let table: HashMap<String, Vec<String>> = if feeds_file.exists() {
            info!("Loading feed table from {:?}", feeds_file);
            serde_json::from_str(&std::fs::read_to_string(feeds_file)?)?
        } else {
            DEFAULT_FEEDS
                .iter()
                .map(|(niche, urls)| {
                    (niche.to_string(), urls.iter().map(|u| u.to_string()).collect())
                })
                .collect()
        };

        let sources = table
            .into_iter()
            .map(|(niche, urls)| {
                let feeds = urls
                    .into_iter()
                    .map(|url| Arc::new(HttpFeedSource::new(client.clone(), url)) as Arc<dyn FeedSource>)
                    .collect();
                (niche.to_lowercase(), feeds)
            })
            .collect();

        Ok(Self { sources })
    }

    /// Ranked topics for `niche`, at most `max_topics`.
    pub async fn trending_topics(&self, niche: &str, max_topics: usize) -> Vec<FeedTopic> {
        self.trending_topics_at(niche, max_topics, Utc::now()).await
    }

    pub async fn trending_topics_at(&self, niche: &str, max_topics: usize, now: DateTime<Utc>) -> Vec<FeedTopic> {
        let niche_key = niche.to_lowercase();
        let Some(sources) = self.sources.get(&niche_key) else {
            debug!(niche, "No sources for niche, using fallback topics");
            return fallback_topics(niche, max_topics);
        };

        let mut entries = Vec::new();
        for source in sources {
            let started = Instant::now();
            match source.fetch().await {
                Ok(topics) => {
                    info!(
                        source = source.name(),
                        count = topics.len(),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Fetched feed"
                    );
                    entries.extend(topics);
                }
                Err(e) => warn!("Skipping feed {}: {}", source.name(), e),
            }
        }

        let entries: Vec<FeedTopic> = entries
            .into_iter()
            .filter(|entry| is_recent(entry.published.as_deref(), now, MAX_ENTRY_AGE_DAYS))
            .map(|mut entry| {
                entry.keywords = extract_feed_keywords(&format!("{} {}", entry.title, entry.summary));
                entry
            })
            .collect();

        if entries.is_empty() {
            debug!(niche, "No recent entries, using fallback topics");
            return fallback_topics(niche, max_topics);
        }

        let mut ranked = rank_feed_topics_at(entries, now);
        ranked.truncate(max_topics);
        ranked
    }

    /// Titles of the top trending topics for `niche`.
    pub async fn topic_suggestions(&self, niche: &str) -> Vec<String> {
        self.trending_topics(niche, SUGGESTION_POOL)
            .await
            .into_iter()
            .take(SUGGESTION_COUNT)
            .map(|topic| topic.title)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct StaticSource(Vec<FeedTopic>);

    #[async_trait]
    impl FeedSource for StaticSource {
        fn name(&self) -> &str {
            "static"
        }

        async fn fetch(&self) -> Result<Vec<FeedTopic>, AppError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl FeedSource for BrokenSource {
        fn name(&self) -> &str {
            "broken"
        }

        async fn fetch(&self) -> Result<Vec<FeedTopic>, AppError> {
            Err(AppError::Service("connection refused".to_string()))
        }
    }

    fn entry(title: &str, published: Option<DateTime<Utc>>) -> FeedTopic {
        FeedTopic {
            published: published.map(|p| p.to_rfc3339()),
            ..FeedTopic::titled(title, "static")
        }
    }

    fn collector(sources: Vec<Arc<dyn FeedSource>>) -> TrendingCollector {
        TrendingCollector::with_sources(HashMap::from([("technology".to_string(), sources)]))
    }

    #[test]
    fn test_fallback_topics() {
        let topics = fallback_topics("Health", 3);
        assert_eq!(topics.len(), 3);
        assert_eq!(topics[0].title, "Mental health awareness and strategies");
        assert_eq!(topics[0].source, FALLBACK_SOURCE);

        assert_eq!(fallback_topics("gardening", 10)[0].title, TECHNOLOGY_TOPICS[0]);
    }

    #[tokio::test]
    async fn test_unknown_niche_uses_fallback() {
        let topics = collector(vec![]).trending_topics("Gardening", 2).await;
        assert_eq!(topics.len(), 2);
        assert!(topics.iter().all(|t| t.source == FALLBACK_SOURCE));
    }

    #[tokio::test]
    async fn test_failing_source_is_skipped() {
        let now = Utc::now();
        let good = StaticSource(vec![
            entry("Quarterly report", Some(now)),
            entry("New breakthrough in quantum computing", Some(now)),
        ]);
        let collector = collector(vec![Arc::new(BrokenSource), Arc::new(good)]);

        let topics = collector.trending_topics_at("technology", 10, now).await;

        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].title, "New breakthrough in quantum computing");
        assert_eq!(topics[0].keywords, vec!["quantum computing"]);
    }

    #[tokio::test]
    async fn test_stale_entries_dropped() {
        let now = Utc::now();
        let source = StaticSource(vec![
            entry("Old news", Some(now - Duration::days(10))),
            entry("Undated", None),
        ]);

        let topics = collector(vec![Arc::new(source)]).trending_topics_at("technology", 10, now).await;
        let titles: Vec<&str> = topics.iter().map(|t| t.title.as_str()).collect();

        assert_eq!(titles, vec!["Undated"]);
    }

    #[tokio::test]
    async fn test_no_entries_uses_fallback() {
        let topics = collector(vec![Arc::new(BrokenSource)]).trending_topics("technology", 4).await;
        assert_eq!(topics.len(), 4);
        assert_eq!(topics[0].source, FALLBACK_SOURCE);
    }

    #[tokio::test]
    async fn test_topic_suggestions_are_titles() {
        let suggestions = collector(vec![]).topic_suggestions("lifestyle").await;
        assert_eq!(
            suggestions,
            vec![
                "Minimalism for modern living",
                "Sustainable lifestyle choices",
                "Work-life balance strategies"
            ]
        );
    }

    const RSS_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Tech Wire</title>
    <link>https://example.com</link>
    <description>Daily tech news</description>
    <item>
      <title>New breakthrough in quantum computing</title>
      <description>Researchers report a stable qubit.</description>
      <link>https://example.com/quantum</link>
      <pubDate>Wed, 01 May 2024 10:00:00 GMT</pubDate>
    </item>
    <item>
      <description>An item without a title</description>
    </item>
  </channel>
</rss>"#;

    #[tokio::test]
    async fn test_feed_source_parses_rss() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rss"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/rss+xml")
                    .set_body_string(RSS_BODY),
            )
            .mount(&mock_server)
            .await;

        let source = HttpFeedSource::new(Client::new(), format!("{}/rss", mock_server.uri()));
        let topics = source.fetch().await.unwrap();

        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].title, "New breakthrough in quantum computing");
        assert_eq!(topics[0].source, "Tech Wire");
        assert_eq!(topics[0].summary, "Researchers report a stable qubit.");
        assert_eq!(topics[0].link, "https://example.com/quantum");
        assert_eq!(topics[0].published.as_deref(), Some("2024-05-01T10:00:00+00:00"));
    }

    #[tokio::test]
    async fn test_rss_entries_reach_trending_topics() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(RSS_BODY))
            .mount(&mock_server)
            .await;

        let now = DateTime::parse_from_rfc3339("2024-05-02T10:00:00Z").unwrap().with_timezone(&Utc);
        let source = HttpFeedSource::new(Client::new(), mock_server.uri());
        let topics = collector(vec![Arc::new(source)]).trending_topics_at("technology", 3, now).await;

        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].source, "Tech Wire");
        assert_eq!(topics[0].keywords, vec!["quantum computing"]);
    }

    #[tokio::test]
    async fn test_feed_source_parses_atom_updated() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Health Notes</title>
  <id>urn:health-notes</id>
  <updated>2024-05-01T08:00:00Z</updated>
  <entry>
    <title>Sleep and recovery</title>
    <id>urn:health-notes:1</id>
    <updated>2024-05-01T08:00:00Z</updated>
    <link href="https://example.com/sleep"/>
    <summary>Why rest matters.</summary>
  </entry>
</feed>"#,
            ))
            .mount(&mock_server)
            .await;

        let topics = HttpFeedSource::new(Client::new(), mock_server.uri()).fetch().await.unwrap();

        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].source, "Health Notes");
        assert_eq!(topics[0].link, "https://example.com/sleep");
        assert_eq!(topics[0].published.as_deref(), Some("2024-05-01T08:00:00+00:00"));
    }

    #[tokio::test]
    async fn test_feed_source_parses_json_feed() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/feed.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "version": "https://jsonfeed.org/version/1.1",
                "title": "Tech Daily",
                "items": [
                    {
                        "id": "1",
                        "title": "AI startup raises funding",
                        "summary": "A fintech startup...",
                        "url": "https://example.com/1",
                        "date_published": "2024-05-01T10:00:00Z"
                    },
                    { "id": "2", "content_text": "untitled item" }
                ]
            })))
            .mount(&mock_server)
            .await;

        let source = HttpFeedSource::new(Client::new(), format!("{}/feed.json", mock_server.uri()));
        let topics = source.fetch().await.unwrap();

        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].source, "Tech Daily");
        assert_eq!(topics[0].summary, "A fintech startup...");
        assert_eq!(topics[0].published.as_deref(), Some("2024-05-01T10:00:00+00:00"));
    }

    #[tokio::test]
    async fn test_feed_source_rejects_garbage() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not a feed"))
            .mount(&mock_server)
            .await;

        let source = HttpFeedSource::new(Client::new(), mock_server.uri());
        assert!(matches!(source.fetch().await, Err(AppError::Service(_))));
    }

    #[tokio::test]
    async fn test_feed_source_status_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let source = HttpFeedSource::new(Client::new(), mock_server.uri());
        assert!(matches!(source.fetch().await, Err(AppError::Service(msg)) if msg.contains("404")));
    }

    #[test]
    fn test_default_feed_table_covers_niches() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let collector =
            TrendingCollector::from_config(&AppConfig::default(), &dir.path().join("feeds.json")).unwrap();

        for niche in ["technology", "business", "health", "lifestyle"] {
            assert!(!collector.sources[niche].is_empty(), "{} has no sources", niche);
        }
    }

    #[test]
    fn test_from_config_reads_feed_table() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let feeds_file = dir.path().join("feeds.json");
        std::fs::write(&feeds_file, r#"{"Health": ["http://localhost/a.xml"]}"#).unwrap();

        let collector = TrendingCollector::from_config(&AppConfig::default(), &feeds_file).unwrap();

        assert_eq!(collector.sources.len(), 1);
        assert_eq!(collector.sources["health"].len(), 1);
    }
}
