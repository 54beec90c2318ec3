// Grouping helpers
// Partition a sequence by a key, keeping groups in the order their key
// first shows up and members in input order.

use std::collections::HashMap;
use std::hash::Hash;

/// Group items by key. No item is dropped; groups appear in order of the
/// first item with that key.
pub fn group_by<I, K, F>(items: impl IntoIterator<Item = I>, mut key: F) -> Vec<(K, Vec<I>)>
where
    K: Eq + Hash + Clone,
    F: FnMut(&I) -> K,
{
    // Maps a key to its position in `groups`
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<I>)> = Vec::new();

    for item in items {
        let k = key(&item);
        match index.get(&k) {
            Some(&position) => groups[position].1.push(item),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![item]));
            }
        }
    }

    groups
}

/// Like group_by, but only keeps how many items landed in each group
pub fn count_by<I, K, F>(items: impl IntoIterator<Item = I>, key: F) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    F: FnMut(&I) -> K,
{
    group_by(items, key)
        .into_iter()
        .map(|(k, members)| (k, members.len()))
        .collect()
}
