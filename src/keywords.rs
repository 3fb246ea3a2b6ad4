use super::*;

const CORE: &[&str] = &[
  "ai",
  "artificial intelligence",
  "machine learning",
  "deep learning",
  "neural network",
  "llm",
  "large language model",
  "chatgpt",
  "gpt-",
  "openai",
  "claude",
  "anthropic",
  "gemini",
  "copilot",
  "hugging face",
  "diffusion model",
];

const EXCLUDE: &[&str] = &[
  "mushroom",
  "fungi",
  "gaming",
  "rainbow six",
  "video game",
  "esports",
];

const RELATED: &[&str] = &[
  "model",
  "training",
  "inference",
  "dataset",
  "algorithm",
  "automation",
  "robot",
  "chatbot",
  "prompt",
  "agent",
  "embedding",
  "gpu",
  "nvidia",
  "transformer",
  "benchmark",
];

/// Term lists driving the relevance filter.
///
/// Core and related terms count whole-word hits. Exclusions veto on a plain
/// substring hit anywhere in the content.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Keywords {
  core: Terms,
  #[serde(default)]
  exclude: Vec<String>,
  #[serde(default)]
  related: Terms,
}

impl Keywords {
  pub(crate) fn builtin() -> Result<Self> {
    Self::new(CORE, RELATED, EXCLUDE)
  }

  /// Judges plain `title` and `text`; markup should be stripped beforehand.
  pub(crate) fn evaluate(&self, title: &str, text: &str) -> Verdict {
    let content = format!("{title} {text}").to_lowercase();

    if let Some(term) = self
      .exclude
      .iter()
      .find(|term| content.contains(term.as_str()))
    {
      return Verdict {
        excluded_by: Some(term.clone()),
        ..Verdict::default()
      };
    }

    Verdict {
      core: self.core.count(&content),
      excluded_by: None,
      related: self.related.count(&content),
    }
  }

  pub(crate) fn load(path: &Path) -> Result<Self> {
    let data = fs::read(path)
      .with_context(|| format!("failed to read {}", path.display()))?;

    let keywords = serde_json::from_slice::<Self>(&data)
      .with_context(|| format!("failed to parse keywords {}", path.display()))?;

    Ok(Self {
      exclude: Self::normalize(keywords.exclude),
      ..keywords
    })
  }

  pub(crate) fn new(
    core: &[&str],
    related: &[&str],
    exclude: &[&str],
  ) -> Result<Self> {
    Ok(Self {
      core: Terms::new(core)?,
      exclude: Self::normalize(
        exclude.iter().map(|term| (*term).to_string()).collect(),
      ),
      related: Terms::new(related)?,
    })
  }

  fn normalize(terms: Vec<String>) -> Vec<String> {
    terms
      .into_iter()
      .filter(|term| !term.trim().is_empty())
      .map(|term| term.to_lowercase())
      .collect()
  }
}
