use super::*;

pub(crate) struct Report<'a> {
  generated_at: DateTime<Local>,
  stories: &'a [Story],
}

impl<'a> Report<'a> {
  const TIMESTAMP_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

  const TITLE: &'static str = "AI News from Hacker News";

  pub(crate) fn json(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(self.stories)?)
  }

  pub(crate) fn markdown(&self) -> String {
    let header = format!(
      "# {}\n\nUpdated: {}\nFound: {} stories\n",
      Self::TITLE,
      self.generated_at.format(Self::TIMESTAMP_FORMAT),
      self.stories.len(),
    );

    let mut fragments = Vec::with_capacity(self.stories.len() + 1);

    fragments.push(header);

    fragments.extend(
      self
        .stories
        .iter()
        .enumerate()
        .map(|(index, story)| Self::section(index + 1, story)),
    );

    fragments.join("\n")
  }

  pub(crate) fn new(
    stories: &'a [Story],
    generated_at: DateTime<Local>,
  ) -> Self {
    Self {
      generated_at,
      stories,
    }
  }

  fn section(rank: usize, story: &Story) -> String {
    let mut lines = vec![
      format!("## {rank}. {}", story.title),
      String::new(),
      format!(
        "**Score:** {} | **Comments:** {} | **Author:** {}",
        story.score, story.comments, story.by
      ),
      String::new(),
      story.summary.clone(),
      String::new(),
    ];

    if let Some(url) = &story.url {
      lines.push(format!("Link: {url}"));
    }

    lines.push(format!("Discussion: {}", story.hn_url));
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());

    lines.join("\n")
  }

  pub(crate) fn write(&self, markdown: &Path, json: &Path) -> Result {
    fs::write(markdown, self.markdown())
      .with_context(|| format!("failed to write {}", markdown.display()))?;

    fs::write(json, self.json()?)
      .with_context(|| format!("failed to write {}", json.display()))?;

    Ok(())
  }
}
