//! Left-outer group-join over customer ids

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::model::{CustomerId, HasCustomerId};

/// Pair every left element with the right elements sharing its customer id.
///
/// The output holds exactly one value per left element, in left order. Each
/// group keeps right order and is empty when nothing matches. Right elements
/// whose key has no left counterpart are dropped.
///
/// # Examples
///
/// ```
/// use partner_core::join::group_join;
/// use partner_core::model::{CustomerId, HasCustomerId};
///
/// struct Row(CustomerId, &'static str);
///
/// impl HasCustomerId for Row {
///     fn customer_id(&self) -> CustomerId {
///         self.0
///     }
/// }
///
/// let left = vec![Row(1, "a"), Row(2, "b")];
/// let right = vec![Row(1, "x"), Row(1, "y"), Row(9, "z")];
///
/// let counts = group_join(left, right, |l, group| (l.1, group.len()));
/// assert_eq!(counts, vec![("a", 2), ("b", 0)]);
/// ```
pub fn group_join<L, R, O, I, J, F>(left: I, right: J, mut merge: F) -> Vec<O>
where
    L: HasCustomerId,
    R: HasCustomerId,
    I: IntoIterator<Item = L>,
    J: IntoIterator<Item = R>,
    F: FnMut(L, &[R]) -> O,
{
    let mut groups: HashMap<CustomerId, Vec<R>> = HashMap::new();
    for record in right {
        groups.entry(record.customer_id()).or_default().push(record);
    }

    let mut matched: HashSet<CustomerId> = HashSet::new();
    let output: Vec<O> = left
        .into_iter()
        .map(|item| {
            let key = item.customer_id();
            let group = match groups.get(&key) {
                Some(group) => {
                    matched.insert(key);
                    group.as_slice()
                }
                None => &[],
            };
            merge(item, group)
        })
        .collect();

    let dropped: usize = groups
        .iter()
        .filter(|(key, _)| !matched.contains(key))
        .map(|(_, group)| group.len())
        .sum();
    if dropped > 0 {
        trace!("Dropped {} right-hand records without a matching key", dropped);
    }

    output
}

/// Method form of [`group_join`] for any sequence of keyed records
pub trait GroupJoinExt: IntoIterator + Sized
where
    Self::Item: HasCustomerId,
{
    fn group_join<R, O, J, F>(self, right: J, merge: F) -> Vec<O>
    where
        R: HasCustomerId,
        J: IntoIterator<Item = R>,
        F: FnMut(Self::Item, &[R]) -> O,
    {
        group_join(self, right, merge)
    }
}

impl<I> GroupJoinExt for I
where
    I: IntoIterator,
    I::Item: HasCustomerId,
{
}
