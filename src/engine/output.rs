#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    Title(String),
    Event(String),
    Warning(String),
    Paths(String),
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    pub fn warn(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Warning(s));
        }
    }

    pub fn set_paths(&mut self, s: impl Into<String>) {
        let s = s.into();
        if s.trim().is_empty() {
            return;
        }

        // ensure only one Paths block exists, always last
        self.blocks.retain(|b| !matches!(b, OutputBlock::Paths(_)));
        self.blocks.push(OutputBlock::Paths(s));
    }

    /// Plain-text lines of every block, in order. Handy for assertions.
    pub fn lines(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .flat_map(|b| match b {
                OutputBlock::Title(s)
                | OutputBlock::Event(s)
                | OutputBlock::Warning(s)
                | OutputBlock::Paths(s) => s.lines(),
            })
            .collect()
    }
}
