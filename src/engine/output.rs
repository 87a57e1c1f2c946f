use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum OutputBlock {
    /// Room descriptions and item listings.
    Text(String),
    /// One line per visible exit.
    Hint(String),
    /// Outcome of a command: "You take the hammer", "Hm?".
    Event(String),
}

impl OutputBlock {
    pub fn text(&self) -> &str {
        match self {
            OutputBlock::Text(s) | OutputBlock::Hint(s) | OutputBlock::Event(s) => s,
        }
    }
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn hint(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Hint(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(OutputBlock::text)
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().any(|l| l.contains(needle))
    }
}
