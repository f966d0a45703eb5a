use std::collections::HashMap;
use std::hash::Hash;

/// Running count and sum for one group
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupStats {
    pub count: u32,
    pub total: f64,
}

impl GroupStats {
    fn add(&mut self, value: f64) {
        self.count += 1;
        self.total += value;
    }

    /// Arithmetic mean. None for an empty group so no NaN leaks out.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.total / self.count as f64)
        }
    }
}

/// Groups `(key, value)` pairs, keeping groups in first-seen order
pub fn group_in_order<K, I>(pairs: I) -> Vec<(K, GroupStats)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, GroupStats)> = Vec::new();

    for (key, value) in pairs {
        let idx = *index.entry(key.clone()).or_insert_with(|| {
            groups.push((key, GroupStats::default()));
            groups.len() - 1
        });
        groups[idx].1.add(value);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_keep_first_seen_order() {
        let groups = group_in_order(vec![("b", 1.0), ("a", 2.0), ("b", 3.0)]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "b");
        assert_eq!(groups[0].1, GroupStats { count: 2, total: 4.0 });
        assert_eq!(groups[1].0, "a");
    }

    #[test]
    fn test_mean_of_empty_group_is_none() {
        assert_eq!(GroupStats::default().mean(), None);
        assert_eq!(GroupStats { count: 2, total: 5.0 }.mean(), Some(2.5));
    }
}
