//! Helpers shared by the checks.

use std::collections::HashMap;

/// Values occurring more than once, in order of first appearance.
pub fn duplicated_values<'a, I>(values: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&'a str, usize> = HashMap::new();
    let mut order = Vec::new();
    for value in values {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }
    order
        .into_iter()
        .filter(|value| counts.get(value).copied().unwrap_or(0) > 1)
        .collect()
}
