use crate::collections::{AddOutcome, CollectionError, CollectionStore};
use crate::models::{Collection, CollectionSet, Title};
use crate::storage::KeyValueStore;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum DialogError {
    #[error("No title selected.")]
    NotOpen,

    #[error(transparent)]
    Collection(#[from] CollectionError),
}

/// User-facing summary of a successful submit.
pub(crate) fn outcome_message(outcome: AddOutcome, title: &str, collection: &str) -> String {
    match outcome {
        AddOutcome::Created => format!("Created \"{collection}\" with {title}."),
        AddOutcome::Added => format!("Added {title} to \"{collection}\"."),
        AddOutcome::AlreadyPresent => format!("{title} is already in \"{collection}\"."),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum DialogTarget {
    NewCollection { name: String },
    Existing { name: String },
}

/// Quick-add modal on the catalog page.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub(crate) enum AddToCollectionDialog {
    #[default]
    Closed,
    Choosing { title: Title, target: DialogTarget },
}

impl AddToCollectionDialog {
    pub fn open(&mut self, title: Title) {
        *self = Self::Choosing {
            title,
            target: DialogTarget::NewCollection {
                name: String::new(),
            },
        };
    }

    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Choosing { .. })
    }

    pub fn title(&self) -> Option<&Title> {
        match self {
            Self::Closed => None,
            Self::Choosing { title, .. } => Some(title),
        }
    }

    pub fn target(&self) -> Option<&DialogTarget> {
        match self {
            Self::Closed => None,
            Self::Choosing { target, .. } => Some(target),
        }
    }

    /// Name of the selected existing collection, if any.
    pub fn existing_name(&self) -> Option<&str> {
        match self.target() {
            Some(DialogTarget::Existing { name }) => Some(name),
            _ => None,
        }
    }

    /// Collection the next submit would write to.
    pub fn target_name(&self) -> Option<&str> {
        match self.target() {
            Some(DialogTarget::NewCollection { name } | DialogTarget::Existing { name }) => {
                Some(name)
            }
            None => None,
        }
    }

    pub fn new_name(&self) -> Option<&str> {
        match self.target() {
            Some(DialogTarget::NewCollection { name }) => Some(name),
            _ => None,
        }
    }

    pub fn choose_new(&mut self) {
        if let Self::Choosing { target, .. } = self {
            *target = DialogTarget::NewCollection {
                name: String::new(),
            };
        }
    }

    /// Unknown names fall back to the new-collection target.
    pub fn choose_existing(&mut self, name: &str, set: &CollectionSet) {
        if let Self::Choosing { target, .. } = self {
            *target = match set.get(name) {
                Some(c) => DialogTarget::Existing {
                    name: c.name.clone(),
                },
                None => DialogTarget::NewCollection {
                    name: String::new(),
                },
            };
        }
    }

    pub fn set_new_name(&mut self, value: &str) {
        if let Self::Choosing {
            target: DialogTarget::NewCollection { name },
            ..
        } = self
        {
            *name = value.to_string();
        }
    }

    pub fn selected_collection<'a>(&self, set: &'a CollectionSet) -> Option<&'a Collection> {
        self.existing_name().and_then(|name| set.get(name))
    }

    /// Whether the chosen title already belongs to the selected existing collection.
    pub fn selected_is_member(&self, set: &CollectionSet) -> bool {
        match (self.title(), self.existing_name()) {
            (Some(title), Some(name)) => set.contains_title(name, title.id),
            _ => false,
        }
    }

    /// Adds the chosen title. Closes on success; stays open on error.
    pub fn submit<S: KeyValueStore>(
        &mut self,
        store: &mut CollectionStore<S>,
    ) -> Result<AddOutcome, DialogError> {
        let Self::Choosing { title, target } = self else {
            return Err(DialogError::NotOpen);
        };

        let name = match target {
            DialogTarget::NewCollection { name } | DialogTarget::Existing { name } => name,
        };

        let outcome = store.add_title_to_collection(name, title.clone())?;
        *self = Self::Closed;
        Ok(outcome)
    }

    /// Removes a member of the selected existing collection.
    pub fn remove_member<S: KeyValueStore>(
        &self,
        store: &mut CollectionStore<S>,
        title_id: i64,
    ) -> bool {
        match self.existing_name() {
            Some(name) => store.remove_title_from_collection(name, title_id),
            None => false,
        }
    }

    pub fn remove_collection<S: KeyValueStore>(
        &mut self,
        store: &mut CollectionStore<S>,
        name: &str,
    ) -> bool {
        let removed = store.remove_collection(name);
        if self.existing_name() == Some(name) {
            self.choose_new();
        }
        removed
    }
}
