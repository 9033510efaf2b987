//! Static description of the host document the widget is mounted on.

use std::collections::HashSet;

use anyhow::{Result, anyhow};

/// The fixed set of steps and navigation entries, in document order.
///
/// Built once at initialization; the controller never adds or removes steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistLayout {
    steps: Vec<String>,
    nav_targets: Vec<String>,
    hint: Option<HintPanel>,
}

/// Optional expandable hint panel with its own toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintPanel {
    /// Expanded flag carried by the markup before any interaction.
    pub initially_expanded: bool,
}

impl ChecklistLayout {
    /// Build a layout, rejecting empty or duplicate step ids.
    ///
    /// Navigation targets are not required to name a known step.
    pub fn new<S, N>(steps: S, nav_targets: N) -> Result<Self>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let layout = Self {
            steps: steps.into_iter().map(Into::into).collect(),
            nav_targets: nav_targets.into_iter().map(Into::into).collect(),
            hint: None,
        };
        let errors = validate_layout(&layout);
        if !errors.is_empty() {
            return Err(anyhow!("invalid checklist layout: {}", errors.join("; ")));
        }
        Ok(layout)
    }

    pub fn with_hint(mut self, initially_expanded: bool) -> Self {
        self.hint = Some(HintPanel { initially_expanded });
        self
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn nav_targets(&self) -> &[String] {
        &self.nav_targets
    }

    pub fn hint(&self) -> Option<HintPanel> {
        self.hint
    }

    pub fn total(&self) -> usize {
        self.steps.len()
    }

    pub fn first(&self) -> Option<&str> {
        self.steps.first().map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.steps.iter().any(|step| step == id)
    }
}

/// Check layout invariants:
/// - Step ids are non-empty
/// - No duplicate step ids
pub fn validate_layout(layout: &ChecklistLayout) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    for (index, id) in layout.steps.iter().enumerate() {
        if id.trim().is_empty() {
            errors.push(format!("step {index}: id must be non-empty"));
            continue;
        }
        if !seen.insert(id.as_str()) {
            errors.push(format!("duplicate step id '{id}' at position {index}"));
        }
    }
    errors
}
