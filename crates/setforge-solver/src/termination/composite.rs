//! Composite OR termination over tuples.

use super::Termination;
use crate::stats::SearchStats;

/// Combines terminations with OR logic.
///
/// Wraps a tuple of terminations and fires when ANY child fires.
///
/// # Examples
///
/// ```
/// use setforge_solver::termination::{NodeCountTermination, OrTermination, TimeTermination};
///
/// // Stop after 30 seconds OR 1000 expansions
/// let termination = OrTermination::new((
///     TimeTermination::seconds(30),
///     NodeCountTermination::new(1000),
/// ));
/// ```
#[derive(Debug)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Generates `Termination` implementations for OR tuples.
macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn is_terminated(&self, stats: &SearchStats) -> bool {
                $((self.0).$idx.is_terminated(stats))||+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
