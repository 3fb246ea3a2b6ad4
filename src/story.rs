use super::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct Story {
  pub(crate) by: String,
  pub(crate) comments: u64,
  pub(crate) hn_url: String,
  pub(crate) id: u64,
  pub(crate) score: u64,
  pub(crate) summary: String,
  pub(crate) text: String,
  pub(crate) time: Option<i64>,
  pub(crate) title: String,
  pub(crate) url: Option<String>,
}

impl Story {
  const UNKNOWN_AUTHOR: &str = "unknown";

  pub(crate) fn discussion_url(id: u64) -> String {
    format!("https://news.ycombinator.com/item?id={id}")
  }

  pub(crate) fn new(item: Item, summary: String) -> Self {
    Self {
      by: item.by.unwrap_or_else(|| Self::UNKNOWN_AUTHOR.to_string()),
      comments: item.descendants.unwrap_or_default(),
      hn_url: Self::discussion_url(item.id),
      id: item.id,
      score: item.score.unwrap_or_default(),
      summary,
      text: item.text.unwrap_or_default(),
      time: item.time,
      title: item.title.unwrap_or_default(),
      url: item.url.filter(|url| !url.is_empty()),
    }
  }
}
