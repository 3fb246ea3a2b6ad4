use super::*;

/// A list of lowercase terms matched as whole words in lowercase content.
///
/// A term matches where it is not glued to letters or digits on either side,
/// so `ai` hits `AI?` and `AI/ML` but not `said`. A trailing plural `s` is
/// accepted after a term ending in a letter or digit.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub(crate) struct Terms {
  pattern: Option<Regex>,
  terms: Vec<String>,
}

impl PartialEq for Terms {
  fn eq(&self, other: &Self) -> bool {
    self.terms == other.terms
  }
}

impl TryFrom<Vec<String>> for Terms {
  type Error = regex::Error;

  fn try_from(terms: Vec<String>) -> Result<Self, Self::Error> {
    let mut terms = terms
      .into_iter()
      .filter(|term| !term.trim().is_empty())
      .map(|term| term.to_lowercase())
      .collect::<Vec<_>>();

    terms.dedup();

    let mut alternatives = terms.iter().map(String::as_str).collect::<Vec<_>>();

    // Longer terms first so a phrase wins over its own prefix.
    alternatives.sort_by_key(|term| Reverse(term.len()));

    let pattern = if alternatives.is_empty() {
      None
    } else {
      Some(Regex::new(
        &alternatives
          .iter()
          .map(|term| Self::alternative(term))
          .collect::<Vec<_>>()
          .join("|"),
      )?)
    };

    Ok(Self { pattern, terms })
  }
}

impl Terms {
  fn alternative(term: &str) -> String {
    let word_start = term.starts_with(char::is_alphanumeric);
    let word_end = term.ends_with(char::is_alphanumeric);

    format!(
      "(?:{}{}{})",
      if word_start { r"\b" } else { "" },
      regex::escape(term),
      if word_end { r"s?\b" } else { "" },
    )
  }

  pub(crate) fn count(&self, content: &str) -> usize {
    self
      .pattern
      .as_ref()
      .map_or(0, |pattern| pattern.find_iter(content).count())
  }

  pub(crate) fn new(terms: &[&str]) -> Result<Self, regex::Error> {
    Self::try_from(
      terms
        .iter()
        .map(|term| (*term).to_string())
        .collect::<Vec<_>>(),
    )
  }

  #[cfg(test)]
  pub(crate) fn terms(&self) -> &[String] {
    &self.terms
  }
}
