//! Canonically ordered problem set.

use crate::error::{Result, SetForgeError};

use super::item::{Item, ItemId, Points, ProblemRecord};
use super::preference::PreferenceList;

/// The ranked problems of one instance, sorted by ascending id.
///
/// The ascending-id order is the canonical order the search enumerates
/// subsets in. It is fixed at construction and never changes.
///
/// # Examples
///
/// ```
/// use setforge_core::{PreferenceList, ProblemRecord, ProblemSet};
///
/// let prefs = PreferenceList::new(["dp", "graphs"]).unwrap();
/// let set = ProblemSet::new(
///     vec![
///         ProblemRecord::new(2, 6, 5, "graphs", 200),
///         ProblemRecord::new(1, 5, 3, "dp", 120),
///     ],
///     prefs,
/// )
/// .unwrap();
///
/// assert_eq!(set.items()[0].id(), 1);
/// assert_eq!(set.items()[0].rank(), 2);
/// assert_eq!(set.total_points(), 11);
/// ```
#[derive(Debug, Clone)]
pub struct ProblemSet {
    items: Vec<Item>,
    preferences: PreferenceList,
}

impl ProblemSet {
    /// Ranks the records against the preference list and sorts them by id.
    ///
    /// # Errors
    ///
    /// Returns [`SetForgeError::DuplicateItem`] if two records share an id.
    pub fn new(records: Vec<ProblemRecord>, preferences: PreferenceList) -> Result<Self> {
        let mut items: Vec<Item> = records
            .into_iter()
            .map(|record| {
                let rank = preferences.rank_of(&record.topic);
                Item::from_record(record, rank)
            })
            .collect();

        items.sort_by_key(Item::id);

        if let Some(pair) = items.windows(2).find(|pair| pair[0].id() == pair[1].id()) {
            return Err(SetForgeError::DuplicateItem(pair[0].id()));
        }

        Ok(Self { items, preferences })
    }

    /// Returns the items in canonical order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the item at a canonical position.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Looks an item up by id.
    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items
            .binary_search_by_key(&id, Item::id)
            .ok()
            .map(|index| &self.items[index])
    }

    pub fn preferences(&self) -> &PreferenceList {
        &self.preferences
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all points, saturating at `Points::MAX`.
    pub fn total_points(&self) -> Points {
        self.items
            .iter()
            .fold(0, |acc: Points, item| acc.saturating_add(item.points()))
    }
}
