use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
pub struct ProcedureFile {
    #[serde(default)]
    pub title: Option<String>,

    pub steps: Vec<Step>,
}

/// One step of a procedure. Leaves prompt the user; parents only
/// delegate to their children.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    #[serde(alias = "desc")]
    pub description: String,

    #[serde(default)]
    pub info: String,

    #[serde(default)]
    pub help: String,

    #[serde(default, alias = "steps")]
    pub children: Vec<Step>,

    /// Auxiliary attributes carried along with the step, never read by the walker.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Step {
    pub fn new(
        description: impl Into<String>,
        info: impl Into<String>,
        help: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            info: info.into(),
            help: help.into(),
            children: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Attach an auxiliary attribute. The walker never looks at these.
    pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<serde_yaml::Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Append a sub step and hand it back for further chaining.
    pub fn add(
        &mut self,
        description: impl Into<String>,
        info: impl Into<String>,
        help: impl Into<String>,
    ) -> &mut Step {
        self.push(Step::new(description, info, help))
    }

    /// Append an already built sub step, extras included.
    pub fn push(&mut self, step: Step) -> &mut Step {
        self.children.push(step);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Index `n` children ahead of `pos`, stopping at one past the last child.
    pub fn next(&self, pos: usize, n: usize) -> usize {
        pos.saturating_add(n).min(self.children.len())
    }

    /// Index `n` children before `pos`, stopping at the first child.
    pub fn previous(&self, pos: usize, n: usize) -> usize {
        pos.saturating_sub(n)
    }
}

impl ProcedureFile {
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(anyhow!("YAML must contain at least one step."));
        }

        for (i, step) in self.steps.iter().enumerate() {
            validate_step(step, &format!("steps[{}]", i))?;
        }

        Ok(())
    }

    /// Hang the top-level steps under a single root step.
    pub fn into_root(self) -> Step {
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| "Procedure".to_string());
        let mut root = Step::new(title, "", "");
        root.children = self.steps;
        root
    }
}

fn validate_step(step: &Step, path: &str) -> Result<()> {
    if step.description.trim().is_empty() {
        return Err(anyhow!("Step {} has an empty description.", path));
    }
    for (i, child) in step.children.iter().enumerate() {
        validate_step(child, &format!("{}.children[{}]", path, i))?;
    }
    Ok(())
}
