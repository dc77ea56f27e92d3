//! Form store: form data and form schema behind two mutations
//!
//! Callers go through the actions (`load_form_data`, `load_form_config`),
//! which forward their argument unchanged to [`Store::commit`]. A commit
//! replaces its slot wholesale; nothing is merged and no history is kept.

use crate::schema::{FormConfig, FormData};

/// State held by the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    pub form_data: FormData,
    pub form_config: FormConfig,
}

/// Named state changes accepted by [`Store::commit`]
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    SetFormData(FormData),
    SetFormConfig(FormConfig),
}

impl Mutation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetFormData(_) => "SET_FORM_DATA",
            Self::SetFormConfig(_) => "SET_FORM_CONFIG",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    state: StoreState,
    /// Bumped on every commit so views can tell when to resync
    revision: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn form_data(&self) -> &FormData {
        &self.state.form_data
    }

    pub fn form_config(&self) -> &FormConfig {
        &self.state.form_config
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply a mutation
    pub fn commit(&mut self, mutation: Mutation) {
        tracing::debug!("commit {}", mutation.name());
        match mutation {
            Mutation::SetFormData(data) => self.state.form_data = data,
            Mutation::SetFormConfig(config) => self.state.form_config = config,
        }
        self.revision += 1;
    }

    /// Replace the form data
    pub fn load_form_data(&mut self, data: FormData) {
        self.commit(Mutation::SetFormData(data));
    }

    /// Replace the form schema
    pub fn load_form_config(&mut self, config: FormConfig) {
        self.commit(Mutation::SetFormConfig(config));
    }
}
