//! Problem records and ranked items.

use crate::cost::SelectionCost;

/// Identifier of a problem, unique within an instance.
pub type ItemId = u64;

/// Point value of a problem or selection.
///
/// 128 bits leave head-room for targets beyond `10^20` and for summing many
/// problems of that magnitude. Sums past `u128::MAX` saturate.
pub type Points = u128;

/// A problem exactly as it appears in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemRecord {
    pub id: ItemId,
    pub points: Points,
    pub difficulty: u32,
    pub topic: String,
    pub length: u32,
}

impl ProblemRecord {
    pub fn new(
        id: ItemId,
        points: Points,
        difficulty: u32,
        topic: impl Into<String>,
        length: u32,
    ) -> Self {
        Self {
            id,
            points,
            difficulty,
            topic: topic.into(),
            length,
        }
    }
}

/// A problem with its preference rank resolved.
///
/// Immutable once built by [`ProblemSet`](super::ProblemSet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    points: Points,
    difficulty: u32,
    topic: String,
    length: u32,
    rank: u32,
}

impl Item {
    pub(crate) fn from_record(record: ProblemRecord, rank: u32) -> Self {
        Self {
            id: record.id,
            points: record.points,
            difficulty: record.difficulty,
            topic: record.topic,
            length: record.length,
            rank,
        }
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn points(&self) -> Points {
        self.points
    }

    #[inline]
    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Preference rank of this problem's topic (0 when unlisted).
    #[inline]
    pub fn rank(&self) -> u32 {
        self.rank
    }

    /// Cost this problem adds to any selection containing it.
    #[inline]
    pub fn cost(&self) -> SelectionCost {
        SelectionCost::of_item(self.difficulty, self.rank, self.length)
    }
}
