//! # Dashboard State Container
//!
//! The "list + mutate-by-id" pattern every dashboard repeats.
//! Records are never edited in place: an update builds a modified copy and
//! swaps it into the same position.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::models::{FlaggedContent, Issue, IssueDraft, ManagedUser, RecordId, Response};

/// Anything a `Collection` can hold.
pub trait Record: Clone {
    fn id(&self) -> &RecordId;
}

/// A record type that can be built from user input plus server-assigned fields.
pub trait FromDraft<D>: Record {
    fn from_draft(id: RecordId, draft: D, today: NaiveDate) -> Self;
}

/// A record type owning an ordered sequence of children.
pub trait WithChildren: Record {
    type Child;

    /// Returns a copy of `self` with `child` appended last.
    fn with_child(&self, child: Self::Child) -> Self;
}

/// Ordered, newest-first collection of records with unique identifiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Collection<T: Record> {
    items: Vec<T>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    /// Wraps seed data. Later duplicates of an identifier are dropped.
    pub fn new(items: Vec<T>) -> Self {
        let mut unique: Vec<T> = Vec::with_capacity(items.len());
        for item in items {
            if unique.iter().all(|existing| existing.id() != item.id()) {
                unique.push(item);
            }
        }
        Self { items: unique }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn count_where(&self, predicate: impl Fn(&T) -> bool) -> usize {
        self.items.iter().filter(|item| predicate(item)).count()
    }

    /// Builds a record with a fresh identifier and puts it first.
    pub fn create<D>(&mut self, draft: D, today: NaiveDate) -> RecordId
    where
        T: FromDraft<D>,
    {
        let mut id = RecordId::generate();
        while self.get(&id).is_some() {
            id = RecordId::generate();
        }

        let record = T::from_draft(id.clone(), draft, today);
        self.items.insert(0, record);
        id
    }

    /// Replaces the record `id` with `patcher(&record)`.
    ///
    /// An unknown `id` is a silent no-op; the return value only reports
    /// whether a record was touched. The patcher cannot change the identifier.
    pub fn update_by_id(&mut self, id: &RecordId, patcher: impl FnOnce(&T) -> T) -> bool {
        let Some(slot) = self.items.iter_mut().find(|item| item.id() == id) else {
            debug!(%id, "update skipped: no such record");
            return false;
        };

        let updated = patcher(&*slot);
        if updated.id() != id {
            debug!(%id, "patch rejected: identifier changed");
            return false;
        }
        *slot = updated;
        true
    }

    /// Appends `child` to the record `parent_id`. Silent no-op when missing.
    pub fn append_child(&mut self, parent_id: &RecordId, child: T::Child) -> bool
    where
        T: WithChildren,
    {
        self.update_by_id(parent_id, |parent| parent.with_child(child))
    }
}

impl Record for Issue {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl FromDraft<IssueDraft> for Issue {
    fn from_draft(id: RecordId, draft: IssueDraft, today: NaiveDate) -> Self {
        Issue {
            id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            status: draft.status,
            reporter: draft.reporter,
            location: draft.location,
            date: today,
            upvotes: 0,
            responses: Vec::new(),
        }
    }
}

impl WithChildren for Issue {
    type Child = Response;

    fn with_child(&self, child: Response) -> Self {
        let mut copy = self.clone();
        copy.responses.push(child);
        copy
    }
}

impl Record for FlaggedContent {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Record for ManagedUser {
    fn id(&self) -> &RecordId {
        &self.id
    }
}
