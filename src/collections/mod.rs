use crate::models::{Collection, CollectionSet, Title};
use crate::storage::{load_collections, save_collections, KeyValueStore};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum CollectionError {
    #[error("Please enter a collection name.")]
    EmptyName,

    #[error("Collection name cannot contain special characters: {0:?}")]
    InvalidName(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AddOutcome {
    /// A new collection was created holding the title.
    Created,
    /// The title was appended to an existing collection.
    Added,
    /// The collection already held a title with this id.
    AlreadyPresent,
}

/// Names are non-empty and made of ASCII letters, digits and spaces.
pub(crate) fn validate_collection_name(name: &str) -> Result<(), CollectionError> {
    if name.trim().is_empty() {
        return Err(CollectionError::EmptyName);
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
        return Err(CollectionError::InvalidName(name.to_string()));
    }
    Ok(())
}

impl CollectionSet {
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collection> {
        self.collections.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.collections.iter().map(|c| c.name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Collection> {
        self.collections.iter_mut().find(|c| c.name == name)
    }

    pub fn contains_title(&self, name: &str, title_id: i64) -> bool {
        self.get(name).is_some_and(|c| c.contains(title_id))
    }

    pub fn add_title_to_collection(
        &mut self,
        name: &str,
        title: Title,
    ) -> Result<AddOutcome, CollectionError> {
        validate_collection_name(name)?;

        if let Some(collection) = self.get_mut(name) {
            if collection.contains(title.id) {
                return Ok(AddOutcome::AlreadyPresent);
            }
            collection.titles.push(title);
            return Ok(AddOutcome::Added);
        }

        self.collections.push(Collection {
            name: name.to_string(),
            titles: vec![title],
        });
        Ok(AddOutcome::Created)
    }

    /// Returns whether a title was removed.
    pub fn remove_title_from_collection(&mut self, name: &str, title_id: i64) -> bool {
        let Some(collection) = self.get_mut(name) else {
            return false;
        };
        let before = collection.titles.len();
        collection.titles.retain(|t| t.id != title_id);
        collection.titles.len() != before
    }

    /// Returns whether a collection was removed.
    pub fn remove_collection(&mut self, name: &str) -> bool {
        let before = self.collections.len();
        self.collections.retain(|c| c.name != name);
        self.collections.len() != before
    }
}

/// In-memory collection set with write-through persistence.
///
/// Every accepted mutation rewrites the whole set to `S`. A page builds one of
/// these on mount; there is no cross-page store.
#[derive(Clone, Debug)]
pub(crate) struct CollectionStore<S: KeyValueStore> {
    storage: S,
    set: CollectionSet,
}

impl<S: KeyValueStore> CollectionStore<S> {
    pub fn load(storage: S) -> Self {
        let set = load_collections(&storage);
        log::debug!("loaded {} collection(s)", set.len());
        Self { storage, set }
    }

    /// Re-read storage, dropping in-memory state.
    pub fn reload(&mut self) {
        self.set = load_collections(&self.storage);
    }

    pub fn set(&self) -> &CollectionSet {
        &self.set
    }

    pub fn get(&self, name: &str) -> Option<&Collection> {
        self.set.get(name)
    }

    pub fn add_title_to_collection(
        &mut self,
        name: &str,
        title: Title,
    ) -> Result<AddOutcome, CollectionError> {
        let title_id = title.id;
        let outcome = self.set.add_title_to_collection(name, title)?;
        log::info!("add title {title_id} to {name:?}: {outcome:?}");
        self.save();
        Ok(outcome)
    }

    pub fn remove_title_from_collection(&mut self, name: &str, title_id: i64) -> bool {
        let removed = self.set.remove_title_from_collection(name, title_id);
        if removed {
            log::info!("removed title {title_id} from {name:?}");
        }
        self.save();
        removed
    }

    pub fn remove_collection(&mut self, name: &str) -> bool {
        let removed = self.set.remove_collection(name);
        if removed {
            log::info!("removed collection {name:?}");
        }
        self.save();
        removed
    }

    fn save(&self) {
        save_collections(&self.storage, &self.set);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CoverImage, TitleName};
    use crate::storage::{MemoryStorage, COLLECTIONS_KEY};

    fn title(id: i64) -> Title {
        Title {
            id,
            title: TitleName {
                romaji: Some(format!("Title {id}")),
            },
            cover_image: CoverImage {
                large: Some(format!("https://img.example/{id}.jpg")),
            },
        }
    }

    fn stored_blob(storage: &MemoryStorage) -> Option<String> {
        storage.get_item(COLLECTIONS_KEY).expect("memory read")
    }

    #[test]
    fn test_validate_collection_name() {
        assert_eq!(validate_collection_name("My List 2"), Ok(()));
        assert_eq!(validate_collection_name(""), Err(CollectionError::EmptyName));
        assert_eq!(validate_collection_name("   "), Err(CollectionError::EmptyName));
        assert_eq!(
            validate_collection_name("My/List"),
            Err(CollectionError::InvalidName("My/List".to_string()))
        );
        assert!(validate_collection_name("Café").is_err());
        assert!(validate_collection_name("tab\there").is_err());
    }

    #[test]
    fn test_add_creates_then_appends() {
        let mut set = CollectionSet::default();
        assert_eq!(
            set.add_title_to_collection("Watching", title(1)),
            Ok(AddOutcome::Created)
        );
        assert_eq!(
            set.add_title_to_collection("Watching", title(2)),
            Ok(AddOutcome::Added)
        );
        assert_eq!(set.len(), 1);
        let ids: Vec<i64> = set.get("Watching").expect("exists").titles.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_add_same_title_twice_keeps_one_copy() {
        let mut set = CollectionSet::default();
        set.add_title_to_collection("Fav", title(7)).expect("valid name");
        assert_eq!(
            set.add_title_to_collection("Fav", title(7)),
            Ok(AddOutcome::AlreadyPresent)
        );
        assert_eq!(set.get("Fav").expect("exists").titles.len(), 1);
    }

    #[test]
    fn test_add_with_invalid_name_leaves_set_unchanged() {
        let mut set = CollectionSet::default();
        set.add_title_to_collection("My List 2", title(1)).expect("valid name");
        let before = set.clone();

        let err = set
            .add_title_to_collection("My/List", title(2))
            .expect_err("slash should be rejected");
        assert_eq!(err, CollectionError::InvalidName("My/List".to_string()));
        assert_eq!(set, before);
    }

    #[test]
    fn test_names_stay_unique() {
        let mut set = CollectionSet::default();
        set.add_title_to_collection("A", title(1)).expect("valid");
        set.add_title_to_collection("B", title(1)).expect("valid");
        set.add_title_to_collection("A", title(2)).expect("valid");
        assert_eq!(set.names(), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_remove_absent_title_is_noop() {
        let mut set = CollectionSet::default();
        set.add_title_to_collection("A", title(1)).expect("valid");
        let before = set.clone();

        assert!(!set.remove_title_from_collection("A", 99));
        assert!(!set.remove_title_from_collection("Missing", 1));
        assert_eq!(set, before);
    }

    #[test]
    fn test_remove_title_and_collection() {
        let mut set = CollectionSet::default();
        set.add_title_to_collection("A", title(1)).expect("valid");
        set.add_title_to_collection("A", title(2)).expect("valid");

        assert!(set.remove_title_from_collection("A", 1));
        assert!(!set.contains_title("A", 1));
        assert!(set.contains_title("A", 2));

        assert!(set.remove_collection("A"));
        assert!(set.is_empty());
        assert!(!set.remove_collection("A"));
    }

    #[test]
    fn test_store_persists_every_accepted_mutation() {
        let storage = MemoryStorage::new();
        let mut store = CollectionStore::load(storage.clone());
        assert!(store.set().is_empty());

        store.add_title_to_collection("Watching", title(1)).expect("valid");
        let reloaded = CollectionStore::load(storage.clone());
        assert!(reloaded.set().contains_title("Watching", 1));

        store.remove_title_from_collection("Watching", 1);
        let reloaded = CollectionStore::load(storage.clone());
        assert_eq!(reloaded.get("Watching").expect("kept").titles.len(), 0);

        store.remove_collection("Watching");
        let reloaded = CollectionStore::load(storage);
        assert!(reloaded.set().is_empty());
    }

    #[test]
    fn test_store_rejected_add_does_not_write() {
        let storage = MemoryStorage::new();
        let mut store = CollectionStore::load(storage.clone());

        assert_eq!(
            store.add_title_to_collection("", title(1)),
            Err(CollectionError::EmptyName)
        );
        assert_eq!(stored_blob(&storage), None);
    }

    #[test]
    fn test_store_reload_sees_other_writer() {
        let storage = MemoryStorage::new();
        let mut a = CollectionStore::load(storage.clone());
        let mut b = CollectionStore::load(storage.clone());

        a.add_title_to_collection("A", title(1)).expect("valid");
        assert!(b.set().is_empty());
        b.reload();
        assert!(b.set().contains_title("A", 1));
    }
}
