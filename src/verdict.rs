#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Verdict {
  pub(crate) core: usize,
  pub(crate) excluded_by: Option<String>,
  pub(crate) related: usize,
}

impl Verdict {
  const CORE_THRESHOLD: usize = 1;

  const RELATED_THRESHOLD: usize = 2;

  pub(crate) fn is_relevant(&self) -> bool {
    self.excluded_by.is_none()
      && (self.core >= Self::CORE_THRESHOLD
        || self.related >= Self::RELATED_THRESHOLD)
  }
}
