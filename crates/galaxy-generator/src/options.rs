//! Settings controls a generator asks the host UI to build
//!
//! Only the declaration lives here. The host renders the controls and routes
//! user interaction back through typed callbacks on the generator.

use serde::{Deserialize, Serialize};

/// Handle to an option registered with [`GeneratorOptions::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionId(usize);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GeneratorOption {
    /// Drop-down list; `selected` is the displayed item index
    Combobox {
        label: String,
        items: Vec<String>,
        selected: usize,
    },
}

impl GeneratorOption {
    pub fn combobox(label: impl Into<String>, items: Vec<String>) -> Self {
        Self::Combobox {
            label: label.into(),
            items,
            selected: 0,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Combobox { label, .. } => label,
        }
    }
}

/// Ordered list of controls shown on the generator's settings page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    options: Vec<GeneratorOption>,
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, option: GeneratorOption) -> OptionId {
        self.options.push(option);
        OptionId(self.options.len() - 1)
    }

    pub fn get(&self, id: OptionId) -> Option<&GeneratorOption> {
        self.options.get(id.0)
    }

    /// Set the displayed index of a combobox
    ///
    /// Indices past the last item are ignored.
    pub fn set_selected(&mut self, id: OptionId, index: usize) {
        match self.options.get_mut(id.0) {
            Some(GeneratorOption::Combobox {
                items, selected, ..
            }) if index < items.len() => *selected = index,
            _ => {}
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratorOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
