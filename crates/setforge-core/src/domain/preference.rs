//! Topic preference ranking.

use std::collections::HashMap;

use crate::error::{Result, SetForgeError};

/// Ordered list of preferred topics.
///
/// For a list of length `n` the first topic has rank `n`, the second `n - 1`
/// and so on down to 1 for the last. Topics not on the list have rank 0.
///
/// # Examples
///
/// ```
/// use setforge_core::PreferenceList;
///
/// let prefs = PreferenceList::new(["dp", "graphs", "arrays"]).unwrap();
/// assert_eq!(prefs.rank_of("dp"), 3);
/// assert_eq!(prefs.rank_of("arrays"), 1);
/// assert_eq!(prefs.rank_of("geometry"), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceList {
    topics: Vec<String>,
    ranks: HashMap<String, u32>,
}

impl PreferenceList {
    /// Builds the ranking from topics ordered most preferred first.
    ///
    /// # Errors
    ///
    /// Returns [`SetForgeError::DuplicateTopic`] if a topic repeats.
    pub fn new<I, T>(topics: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let topics: Vec<String> = topics.into_iter().map(Into::into).collect();
        let len = topics.len() as u32;
        let mut ranks = HashMap::with_capacity(topics.len());

        for (position, topic) in topics.iter().enumerate() {
            let rank = len - position as u32;
            if ranks.insert(topic.clone(), rank).is_some() {
                return Err(SetForgeError::DuplicateTopic(topic.clone()));
            }
        }

        Ok(Self { topics, ranks })
    }

    /// Returns the rank of a topic, 0 if it is not listed.
    pub fn rank_of(&self, topic: &str) -> u32 {
        self.ranks.get(topic).copied().unwrap_or(0)
    }

    /// Returns the topics, most preferred first.
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
