use crate::collections::CollectionStore;
use crate::models::Title;
use crate::storage::KeyValueStore;

/// Two-step title removal on the collection detail page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RemovalFlow {
    staged: Option<Title>,
}

impl RemovalFlow {
    pub fn stage(&mut self, title: Title) {
        self.staged = Some(title);
    }

    pub fn staged(&self) -> Option<&Title> {
        self.staged.as_ref()
    }

    pub fn is_prompt_open(&self) -> bool {
        self.staged.is_some()
    }

    /// Removes the staged title from `collection_name` and returns it.
    pub fn confirm<S: KeyValueStore>(
        &mut self,
        store: &mut CollectionStore<S>,
        collection_name: &str,
    ) -> Option<Title> {
        let title = self.staged.take()?;
        store.remove_title_from_collection(collection_name, title.id);
        Some(title)
    }

    pub fn cancel(&mut self) -> Option<Title> {
        self.staged.take()
    }
}

/// Editing a collection is not supported yet; the request is only logged.
pub(crate) fn edit_collection(name: &str) {
    log::info!("edit collection requested: {name:?}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CoverImage, TitleName};
    use crate::storage::MemoryStorage;

    fn title(id: i64) -> Title {
        Title {
            id,
            title: TitleName {
                romaji: Some(format!("Title {id}")),
            },
            cover_image: CoverImage::default(),
        }
    }

    fn seeded(storage: &MemoryStorage) -> CollectionStore<MemoryStorage> {
        let mut store = CollectionStore::load(storage.clone());
        for id in 1..=3 {
            store.add_title_to_collection("Fav", title(id)).expect("valid");
        }
        store
    }

    #[test]
    fn test_confirm_removes_exactly_the_staged_title_and_persists() {
        let storage = MemoryStorage::new();
        let mut store = seeded(&storage);
        let mut flow = RemovalFlow::default();

        flow.stage(title(2));
        assert!(flow.is_prompt_open());

        let removed = flow.confirm(&mut store, "Fav").expect("staged");
        assert_eq!(removed.id, 2);
        assert!(!flow.is_prompt_open());

        let reloaded = CollectionStore::load(storage);
        let ids: Vec<i64> = reloaded.get("Fav").expect("exists").titles.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_cancel_leaves_set_unchanged() {
        let storage = MemoryStorage::new();
        let mut store = seeded(&storage);
        let before = store.set().clone();
        let mut flow = RemovalFlow::default();

        flow.stage(title(1));
        assert_eq!(flow.cancel().map(|t| t.id), Some(1));
        assert!(flow.staged().is_none());
        assert!(flow.confirm(&mut store, "Fav").is_none());

        assert_eq!(store.set(), &before);
        assert_eq!(CollectionStore::load(storage).set(), &before);
    }

    #[test]
    fn test_restaging_replaces_previous_title() {
        let mut flow = RemovalFlow::default();
        flow.stage(title(1));
        flow.stage(title(3));
        assert_eq!(flow.staged().map(|t| t.id), Some(3));
    }

    #[test]
    fn test_edit_collection_is_a_noop() {
        let storage = MemoryStorage::new();
        let store = seeded(&storage);
        let before = store.set().clone();
        edit_collection("Fav");
        assert_eq!(CollectionStore::load(storage).set(), &before);
    }
}
