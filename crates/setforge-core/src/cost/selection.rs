//! SelectionCost - Four-level lexicographic cost of a problem selection

use std::cmp::Ordering;
use std::fmt;

/// The cost of a selection of problems.
///
/// Levels, highest priority first:
/// 1. total difficulty
/// 2. number of problems
/// 3. negated total preference rank
/// 4. total text length
///
/// Every level is minimized and lower levels only break ties of the levels
/// above them. Storing the rank negated turns "maximize preference" into
/// "minimize" so the whole vector orders ascending.
///
/// # Examples
///
/// ```
/// use setforge_core::SelectionCost;
///
/// let easy = SelectionCost::of(4, 2, -3, 500);
/// let hard = SelectionCost::of(5, 1, 0, 10);
///
/// // Difficulty dominates everything below it
/// assert!(easy < hard);
///
/// // Same difficulty and count: the better-liked selection wins
/// let liked = SelectionCost::of(4, 2, -5, 900);
/// assert!(liked < easy);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SelectionCost {
    difficulty: i64,
    count: i64,
    neg_rank: i64,
    length: i64,
}

impl SelectionCost {
    /// The cost of the empty selection.
    pub const ZERO: SelectionCost = SelectionCost {
        difficulty: 0,
        count: 0,
        neg_rank: 0,
        length: 0,
    };

    /// Creates a new SelectionCost from its four levels.
    #[inline]
    pub const fn of(difficulty: i64, count: i64, neg_rank: i64, length: i64) -> Self {
        SelectionCost {
            difficulty,
            count,
            neg_rank,
            length,
        }
    }

    /// Creates the cost contribution of a single problem.
    #[inline]
    pub const fn of_item(difficulty: u32, rank: u32, length: u32) -> Self {
        SelectionCost::of(difficulty as i64, 1, -(rank as i64), length as i64)
    }

    /// Returns the zero cost.
    #[inline]
    pub const fn zero() -> Self {
        SelectionCost::ZERO
    }

    #[inline]
    pub const fn difficulty(&self) -> i64 {
        self.difficulty
    }

    #[inline]
    pub const fn count(&self) -> i64 {
        self.count
    }

    /// Returns the negated rank level as stored.
    #[inline]
    pub const fn neg_rank(&self) -> i64 {
        self.neg_rank
    }

    /// Returns the total preference rank (the negated level flipped back).
    #[inline]
    pub const fn rank(&self) -> i64 {
        -self.neg_rank
    }

    #[inline]
    pub const fn length(&self) -> i64 {
        self.length
    }

    /// Returns the levels from highest to lowest priority.
    pub const fn to_levels(&self) -> [i64; 4] {
        [self.difficulty, self.count, self.neg_rank, self.length]
    }

    /// Creates a cost from levels ordered highest priority first.
    pub const fn from_levels(levels: [i64; 4]) -> Self {
        SelectionCost::of(levels[0], levels[1], levels[2], levels[3])
    }

    /// Returns true if this cost is strictly cheaper than the other.
    #[inline]
    pub fn is_cheaper_than(&self, other: &Self) -> bool {
        self < other
    }
}

impl Ord for SelectionCost {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.difficulty.cmp(&other.difficulty) {
            Ordering::Equal => {}
            other => return other,
        }
        match self.count.cmp(&other.count) {
            Ordering::Equal => {}
            other => return other,
        }
        match self.neg_rank.cmp(&other.neg_rank) {
            Ordering::Equal => self.length.cmp(&other.length),
            other => other,
        }
    }
}

impl_cost_ops!(SelectionCost { difficulty, count, neg_rank, length } => of);

impl fmt::Debug for SelectionCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SelectionCost({}, {}, {}, {})",
            self.difficulty, self.count, self.neg_rank, self.length
        )
    }
}

impl fmt::Display for SelectionCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}difficulty/{}count/{}rank/{}length",
            self.difficulty, self.count, self.neg_rank, self.length
        )
    }
}

impl_cost_parse!(SelectionCost {
    difficulty => "difficulty",
    count => "count",
    neg_rank => "rank",
    length => "length"
} => of);
