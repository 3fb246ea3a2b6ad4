use {super::*, reqwest::header::CONTENT_TYPE};

#[derive(Clone)]
pub(crate) struct Client {
  api_base: String,
  client: reqwest::Client,
}

impl Client {
  pub(crate) const API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

  const ARTICLE_TIMEOUT: Duration = Duration::from_secs(5);

  const HTML_CONTENT_TYPES: &[&str] = &["application/xhtml+xml", "text/html"];

  const ITEM_TIMEOUT: Duration = Duration::from_secs(5);

  const LIST_TIMEOUT: Duration = Duration::from_secs(10);

  const TOP_STORIES: &str = "topstories";

  const USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

  pub(crate) fn new(api_base: &str) -> Result<Self> {
    let client = reqwest::Client::builder()
      .user_agent(Self::USER_AGENT)
      .build()
      .context("failed to build http client")?;

    Ok(Self {
      api_base: api_base.trim_end_matches('/').to_string(),
      client,
    })
  }
}

impl Source for Client {
  async fn article(&self, url: &str) -> Result<String, FetchError> {
    let response = self
      .client
      .get(url)
      .timeout(Self::ARTICLE_TIMEOUT)
      .send()
      .await?
      .error_for_status()?;

    if let Some(content_type) = response.headers().get(CONTENT_TYPE) {
      let content_type = content_type
        .to_str()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

      if !Self::HTML_CONTENT_TYPES
        .iter()
        .any(|html| content_type.starts_with(html))
      {
        return Err(FetchError::Unsupported(content_type));
      }
    }

    Ok(response.text().await?)
  }

  async fn item(&self, id: u64) -> Result<Item, FetchError> {
    self
      .client
      .get(format!("{}/item/{id}.json", self.api_base))
      .timeout(Self::ITEM_TIMEOUT)
      .send()
      .await?
      .error_for_status()?
      .json::<Option<Item>>()
      .await?
      .ok_or(FetchError::Missing(id))
  }

  async fn story_ids(&self, limit: usize) -> Result<Vec<u64>> {
    let ids_url = format!("{}/{}.json", self.api_base, Self::TOP_STORIES);

    let story_ids = self
      .client
      .get(&ids_url)
      .timeout(Self::LIST_TIMEOUT)
      .send()
      .await
      .with_context(|| format!("failed to request {ids_url}"))?
      .error_for_status()?
      .json::<Vec<u64>>()
      .await
      .with_context(|| format!("failed to decode story ids from {ids_url}"))?;

    Ok(story_ids.into_iter().take(limit).collect())
  }
}
