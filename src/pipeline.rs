use super::*;

pub(crate) struct Pipeline<S> {
  fetch_articles: bool,
  keywords: Keywords,
  limit: usize,
  source: S,
}

impl<S: Source> Pipeline<S> {
  pub(crate) fn new(
    source: S,
    keywords: Keywords,
    limit: usize,
    fetch_articles: bool,
  ) -> Self {
    Self {
      fetch_articles,
      keywords,
      limit,
      source,
    }
  }

  /// Fetches the ranked ids, keeps relevant live items and returns them as
  /// stories sorted by score, highest first.
  pub(crate) async fn run(&self) -> Result<Vec<Story>> {
    let ids = self
      .source
      .story_ids(self.limit)
      .await
      .context("failed to load top stories")?;

    info!(count = ids.len(), "fetched top story ids");

    let mut stories = Vec::new();

    for id in ids {
      let item = match self.source.item(id).await {
        Ok(item) => item,
        Err(error) => {
          warn!(id, %error, "skipping item");
          continue;
        }
      };

      if !item.is_live() {
        debug!(id, "skipping dead or deleted item");
        continue;
      }

      let body = html_text(item.text());

      let verdict = self.keywords.evaluate(item.title(), &body);

      if !verdict.is_relevant() {
        if let Some(term) = &verdict.excluded_by {
          debug!(id, %term, title = item.title(), "excluded");
        }

        continue;
      }

      info!(
        id,
        core = verdict.core,
        related = verdict.related,
        title = item.title(),
        "matched"
      );

      let summary = self.summary(&item, &body).await;

      stories.push(Story::new(item, summary));
    }

    stories.sort_by_key(|story| Reverse(story.score));

    Ok(stories)
  }

  async fn summary(&self, item: &Item, body: &str) -> String {
    if self.fetch_articles {
      if let Some(url) = item.url.as_deref().filter(|url| !url.is_empty()) {
        match self.source.article(url).await {
          Ok(html) => {
            if let Some(summary) =
              summarize(&html_text(&html), MAX_SUMMARY_CHARS)
            {
              return summary;
            }

            debug!(id = item.id, url, "article has no text");
          }
          Err(error) => {
            debug!(id = item.id, url, %error, "article fetch failed");
          }
        }
      }
    }

    summarize(body, MAX_SUMMARY_CHARS)
      .unwrap_or_else(|| NO_SUMMARY.to_string())
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    std::collections::{HashMap, HashSet},
  };

  #[derive(Default)]
  struct FakeSource {
    articles: HashMap<String, String>,
    items: Vec<Item>,
    timeouts: HashSet<u64>,
  }

  impl FakeSource {
    fn with_article(mut self, url: &str, html: &str) -> Self {
      self.articles.insert(url.to_string(), html.to_string());
      self
    }

    fn with_item(mut self, item: Item) -> Self {
      self.items.push(item);
      self
    }

    fn with_timeout(mut self, id: u64) -> Self {
      self.timeouts.insert(id);
      self
    }
  }

  impl Source for FakeSource {
    async fn article(&self, url: &str) -> Result<String, FetchError> {
      self
        .articles
        .get(url)
        .cloned()
        .ok_or(FetchError::Status(reqwest::StatusCode::NOT_FOUND))
    }

    async fn item(&self, id: u64) -> Result<Item, FetchError> {
      if self.timeouts.contains(&id) {
        return Err(FetchError::Timeout);
      }

      self
        .items
        .iter()
        .find(|item| item.id == id)
        .cloned()
        .ok_or(FetchError::Missing(id))
    }

    async fn story_ids(&self, limit: usize) -> Result<Vec<u64>> {
      Ok(
        self
          .items
          .iter()
          .map(|item| item.id)
          .chain(self.timeouts.iter().copied())
          .take(limit)
          .collect(),
      )
    }
  }

  struct FailingSource;

  impl Source for FailingSource {
    async fn article(&self, _url: &str) -> Result<String, FetchError> {
      Err(FetchError::Timeout)
    }

    async fn item(&self, id: u64) -> Result<Item, FetchError> {
      Err(FetchError::Missing(id))
    }

    async fn story_ids(&self, _limit: usize) -> Result<Vec<u64>> {
      Err(anyhow::anyhow!("connection refused"))
    }
  }

  fn story(id: u64, title: &str, score: u64) -> Item {
    Item {
      id,
      score: Some(score),
      title: Some(title.to_string()),
      ..Item::default()
    }
  }

  fn pipeline<S: Source>(source: S) -> Pipeline<S> {
    Pipeline::new(source, Keywords::builtin().unwrap(), 150, true)
  }

  #[tokio::test]
  async fn keeps_relevant_items_sorted_by_score() {
    let source = FakeSource::default()
      .with_item(story(1, "Claude gets tool use", 40))
      .with_item(story(2, "Show HN: My sourdough starter", 500))
      .with_item(story(3, "Machine learning for compilers", 90))
      .with_item(story(4, "OpenAI raises again", 90))
      .with_item(story(5, "Deep learning without GPUs", 10));

    let stories = pipeline(source).run().await.unwrap();

    assert_eq!(
      stories.iter().map(|story| story.id).collect::<Vec<_>>(),
      vec![3, 4, 1, 5]
    );

    assert!(
      stories
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score)
    );
  }

  #[tokio::test]
  async fn claude_story_is_kept() {
    let source =
      FakeSource::default().with_item(story(1, "New Claude model released", 150));

    let stories = pipeline(source).run().await.unwrap();

    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].title, "New Claude model released");
    assert_eq!(stories[0].score, 150);
  }

  #[tokio::test]
  async fn excluded_story_is_dropped() {
    let source = FakeSource::default()
      .with_item(story(1, "Best rainbow six gaming AI bots", 80));

    assert!(pipeline(source).run().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn timed_out_item_costs_exactly_one_story() {
    let healthy = FakeSource::default()
      .with_item(story(1, "Claude gets tool use", 40))
      .with_item(story(2, "Anthropic publishes research", 30));

    let degraded = FakeSource::default()
      .with_item(story(1, "Claude gets tool use", 40))
      .with_timeout(2);

    let healthy = pipeline(healthy).run().await.unwrap();
    let degraded = pipeline(degraded).run().await.unwrap();

    assert_eq!(healthy.len(), 2);
    assert_eq!(degraded.len(), healthy.len() - 1);
    assert_eq!(degraded[0].id, 1);
  }

  #[tokio::test]
  async fn dead_and_deleted_items_are_skipped() {
    let source = FakeSource::default()
      .with_item(Item {
        dead: true,
        ..story(1, "Claude gets tool use", 40)
      })
      .with_item(Item {
        deleted: true,
        ..story(2, "Claude gets tool use", 40)
      });

    assert!(pipeline(source).run().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn story_id_failure_is_fatal() {
    let error = pipeline(FailingSource).run().await.unwrap_err();

    assert_eq!(error.to_string(), "failed to load top stories");
  }

  #[tokio::test]
  async fn summary_prefers_article_text() {
    let source = FakeSource::default()
      .with_item(Item {
        text: Some("<p>Body text that should lose.</p>".to_string()),
        url: Some("https://example.com/post".to_string()),
        ..story(1, "Claude gets tool use", 40)
      })
      .with_article(
        "https://example.com/post",
        "<script>track();</script><p>The article explains tool use.</p>",
      );

    let stories = pipeline(source).run().await.unwrap();

    assert_eq!(stories[0].summary, "The article explains tool use.");
  }

  #[tokio::test]
  async fn summary_falls_back_to_body_when_article_fails() {
    let source = FakeSource::default().with_item(Item {
      text: Some("I built this with an LLM&#x27;s help. Ask me.".to_string()),
      url: Some("https://example.com/missing".to_string()),
      ..story(1, "Show HN: Claude plugin", 40)
    });

    let stories = pipeline(source).run().await.unwrap();

    assert_eq!(stories[0].summary, "I built this with an LLM's help. Ask me.");
  }

  #[tokio::test]
  async fn summary_skips_article_when_disabled() {
    let source = FakeSource::default()
      .with_item(Item {
        text: Some("Body text wins here.".to_string()),
        url: Some("https://example.com/post".to_string()),
        ..story(1, "Claude gets tool use", 40)
      })
      .with_article("https://example.com/post", "<p>Article text.</p>");

    let stories = Pipeline::new(source, Keywords::builtin().unwrap(), 150, false)
      .run()
      .await
      .unwrap();

    assert_eq!(stories[0].summary, "Body text wins here.");
  }

  #[tokio::test]
  async fn summary_placeholder_without_url_or_text() {
    let source =
      FakeSource::default().with_item(story(1, "New Claude model released", 150));

    let stories = pipeline(source).run().await.unwrap();

    assert_eq!(stories[0].summary, NO_SUMMARY);
  }

  #[tokio::test]
  async fn limit_bounds_items_considered() {
    let source = FakeSource::default()
      .with_item(story(1, "Claude one", 1))
      .with_item(story(2, "Claude two", 2))
      .with_item(story(3, "Claude three", 3));

    let stories = Pipeline::new(source, Keywords::builtin().unwrap(), 2, true)
      .run()
      .await
      .unwrap();

    assert_eq!(
      stories.iter().map(|story| story.id).collect::<Vec<_>>(),
      vec![2, 1]
    );
  }

  #[tokio::test]
  async fn summary_falls_back_to_body_when_article_has_no_text() {
    let source = FakeSource::default()
      .with_item(Item {
        text: Some("<p>The body still says something.</p>".to_string()),
        url: Some("https://example.com/app".to_string()),
        ..story(1, "Claude gets tool use", 40)
      })
      .with_article(
        "https://example.com/app",
        "<html><head><title>App</title></head>\
         <body><script>render();</script></body></html>",
      );

    let stories = pipeline(source).run().await.unwrap();

    assert_eq!(stories[0].summary, "The body still says something.");
  }

  #[tokio::test]
  async fn ai_in_html_body_is_matched() {
    let source = FakeSource::default()
      .with_item(Item {
        text: Some("<p>AI tools wrote half of it</p>".to_string()),
        ..story(1, "Ask HN: What did you ship this week?", 12)
      })
      .with_item(Item {
        text: Some("AI&#x27;s latest tricks".to_string()),
        ..story(2, "Ask HN: Weekend reading", 8)
      });

    let stories = pipeline(source).run().await.unwrap();

    assert_eq!(
      stories.iter().map(|story| story.id).collect::<Vec<_>>(),
      vec![1, 2]
    );
    assert_eq!(stories[0].text, "<p>AI tools wrote half of it</p>");
    assert_eq!(stories[0].summary, "AI tools wrote half of it");
  }
}
