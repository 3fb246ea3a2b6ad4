use super::*;

/// Where the pipeline reads stories from.
///
/// `story_ids` failing is fatal to a run, while `item` and `article` report a
/// [`FetchError`] the caller is expected to absorb.
pub(crate) trait Source {
  async fn article(&self, url: &str) -> Result<String, FetchError>;

  async fn item(&self, id: u64) -> Result<Item, FetchError>;

  async fn story_ids(&self, limit: usize) -> Result<Vec<u64>>;
}
