//! Declarative macros for field-based cost vectors.
//!
//! These generate the arithmetic, ordering glue and slash-separated parsing
//! that every level of a cost vector shares.

/// Generates `PartialOrd`, `Add`, `AddAssign`, `Sub`, `Neg` and `Sum` for a
/// field-based cost type.
///
/// The constructor must accept fields in the order they are listed.
///
/// # Usage
/// ```ignore
/// impl_cost_ops!(SelectionCost { difficulty, count, neg_rank, length } => of);
/// ```
macro_rules! impl_cost_ops {
    ($type:ident { $($field:ident),+ } => $ctor:ident) => {
        impl PartialOrd for $type {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl std::ops::Add for $type {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                $type::$ctor( $(self.$field + other.$field),+ )
            }
        }

        impl std::ops::AddAssign for $type {
            fn add_assign(&mut self, other: Self) {
                $( self.$field += other.$field; )+
            }
        }

        impl std::ops::Sub for $type {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                $type::$ctor( $(self.$field - other.$field),+ )
            }
        }

        impl std::ops::Neg for $type {
            type Output = Self;

            fn neg(self) -> Self {
                $type::$ctor( $(-self.$field),+ )
            }
        }

        impl std::iter::Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold($type::default(), |acc, cost| acc + cost)
            }
        }
    };
}

/// Generates `FromStr` for costs using the `"Xsuffix/Ysuffix/..."` format.
///
/// Each field maps to a suffix label. All values are parsed as `i64`.
///
/// # Usage
/// ```ignore
/// impl_cost_parse!(SelectionCost {
///     difficulty => "difficulty", count => "count", neg_rank => "rank", length => "length"
/// } => of);
/// ```
macro_rules! impl_cost_parse {
    ($type:ident { $($field:ident => $suffix:literal),+ } => $ctor:ident) => {
        impl std::str::FromStr for $type {
            type Err = $crate::cost::CostParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let parts: Vec<&str> = s.split('/').collect();
                let suffixes: &[&str] = &[ $($suffix),+ ];
                let count = suffixes.len();

                if parts.len() != count {
                    return Err($crate::cost::CostParseError {
                        message: format!(
                            "Invalid {} format '{}': expected {} parts separated by '/'",
                            stringify!($type), s, count
                        ),
                    });
                }

                let mut _idx = 0usize;
                $(
                    let $field = {
                        let part = parts[_idx].trim();
                        let num_str = part.strip_suffix($suffix).ok_or_else(|| {
                            $crate::cost::CostParseError {
                                message: format!(
                                    "{} part '{}' must end with '{}'",
                                    stringify!($field), part, $suffix
                                ),
                            }
                        })?;
                        let val = num_str.parse::<i64>().map_err(|e| {
                            $crate::cost::CostParseError {
                                message: format!(
                                    "Invalid {} value '{}': {}",
                                    $suffix, num_str, e
                                ),
                            }
                        })?;
                        _idx += 1;
                        val
                    };
                )+

                Ok($type::$ctor( $($field),+ ))
            }
        }
    };
}
