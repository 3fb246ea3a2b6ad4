use super::*;

#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct Item {
  pub(crate) by: Option<String>,
  #[serde(default)]
  pub(crate) dead: bool,
  #[serde(default)]
  pub(crate) deleted: bool,
  pub(crate) descendants: Option<u64>,
  pub(crate) id: u64,
  pub(crate) score: Option<u64>,
  pub(crate) text: Option<String>,
  pub(crate) time: Option<i64>,
  pub(crate) title: Option<String>,
  pub(crate) url: Option<String>,
}

impl Item {
  pub(crate) fn is_live(&self) -> bool {
    !self.dead && !self.deleted
  }

  pub(crate) fn text(&self) -> &str {
    self.text.as_deref().unwrap_or_default()
  }

  pub(crate) fn title(&self) -> &str {
    self.title.as_deref().unwrap_or_default()
  }
}
