use std::collections::HashMap;

/// Open/closed flags for the named collapsible panels of one page.
/// Panels never touched are closed.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    open: HashMap<String, bool>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips one panel and returns its new state.
    pub fn toggle(&mut self, name: &str) -> bool {
        let open = self.open.entry(name.to_owned()).or_insert(false);
        *open = !*open;
        *open
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.open.get(name).copied().unwrap_or(false)
    }
}

/// FAQ list where opening one entry closes the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}
