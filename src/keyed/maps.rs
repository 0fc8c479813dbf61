//! Helpers over maps and pair sequences.

use std::collections::HashMap;
use std::hash::Hash;

/// Applies `function` to every key of `map`.
///
/// When two keys map to the same new key, the entry visited last wins; the
/// visiting order of a `HashMap` is unspecified.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use fnkit::keyed::map_keys;
///
/// let squared = map_keys(|key: i32| key * key, HashMap::from([(1, 'a'), (2, 'b'), (3, 'c')]));
/// assert_eq!(squared, HashMap::from([(1, 'a'), (4, 'b'), (9, 'c')]));
/// ```
pub fn map_keys<K, L, V, F>(mut function: F, map: HashMap<K, V>) -> HashMap<L, V>
where
    L: Hash + Eq,
    F: FnMut(K) -> L,
{
    map.into_iter()
        .map(|(key, value)| (function(key), value))
        .collect()
}

/// Applies `function` to every value of `map`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use fnkit::keyed::map_values;
///
/// let settings: HashMap<&str, &str> = "A=5,B=7"
///     .split(',')
///     .filter_map(|pair| pair.split_once('='))
///     .collect();
/// let parsed = map_values(|text: &str| text.parse::<i32>().unwrap_or_default(), settings);
///
/// assert_eq!(parsed, HashMap::from([("A", 5), ("B", 7)]));
/// ```
pub fn map_values<K, V, W, F>(mut function: F, map: HashMap<K, V>) -> HashMap<K, W>
where
    K: Hash + Eq,
    F: FnMut(V) -> W,
{
    map.into_iter()
        .map(|(key, value)| (key, function(value)))
        .collect()
}

/// Applies `function` to the first element of every pair.
///
/// ```rust
/// use fnkit::keyed::map_fst;
///
/// let codes: Vec<(u32, i32)> = map_fst(u32::from, [('A', 1), ('B', 2)]).collect();
/// assert_eq!(codes, vec![(65, 1), (66, 2)]);
/// ```
pub fn map_fst<I, A, B, C, F>(mut function: F, pairs: I) -> impl Iterator<Item = (C, B)>
where
    I: IntoIterator<Item = (A, B)>,
    F: FnMut(A) -> C,
{
    pairs
        .into_iter()
        .map(move |(first, second)| (function(first), second))
}

/// Applies `function` to the second element of every pair.
pub fn map_snd<I, A, B, C, F>(mut function: F, pairs: I) -> impl Iterator<Item = (A, C)>
where
    I: IntoIterator<Item = (A, B)>,
    F: FnMut(B) -> C,
{
    pairs
        .into_iter()
        .map(move |(first, second)| (first, function(second)))
}

/// Groups values by `key`, keeping their input order inside each group.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use fnkit::keyed::group_by;
///
/// let groups = group_by(|word: &&str| word.len(), ["ab", "c", "de", "f"]);
/// assert_eq!(groups, HashMap::from([(2, vec!["ab", "de"]), (1, vec!["c", "f"])]));
/// ```
pub fn group_by<I, K, F>(mut key: F, iterable: I) -> HashMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    iterable
        .into_iter()
        .fold(HashMap::new(), |mut groups: HashMap<K, Vec<I::Item>>, value| {
            groups.entry(key(&value)).or_default().push(value);
            groups
        })
}

/// Merges maps into one; for a key present in several maps the last one wins.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use fnkit::keyed::merge;
///
/// let merged = merge([
///     HashMap::from([("date", "2019-02-28"), ("id", "1")]),
///     HashMap::from([("date", "2019-03-01")]),
/// ]);
/// assert_eq!(merged, HashMap::from([("date", "2019-03-01"), ("id", "1")]));
/// ```
pub fn merge<I, K, V>(maps: I) -> HashMap<K, V>
where
    I: IntoIterator<Item = HashMap<K, V>>,
    K: Hash + Eq,
{
    maps.into_iter().flatten().collect()
}

/// Returns `|map| map[key]`, falling back to `default` for a missing key.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use fnkit::keyed::dget;
///
/// let rows = [HashMap::from([("lang", "fr")]), HashMap::new()];
/// let languages: Vec<&str> = rows.iter().map(dget("lang", "en")).collect();
/// assert_eq!(languages, vec!["fr", "en"]);
/// ```
pub fn dget<K, V>(key: K, default: V) -> impl Fn(&HashMap<K, V>) -> V
where
    K: Hash + Eq,
    V: Clone,
{
    move |map: &HashMap<K, V>| map.get(&key).unwrap_or(&default).clone()
}
