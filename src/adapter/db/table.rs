//! Autoincrement table used by every database component.

use std::collections::BTreeMap;

use parking_lot::RwLock;

#[derive(Debug)]
struct Rows<T> {
    rows: BTreeMap<u64, T>,
    next_id: u64,
}

/// Rows keyed by an integer id allocated on insert, starting at 1.
#[derive(Debug)]
pub struct Table<T> {
    inner: RwLock<Rows<T>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Rows {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl<T: Clone> Table<T> {
    /// Allocate the next id and insert the row built from it.
    pub fn insert_with(&self, build: impl FnOnce(u64) -> T) -> u64 {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.rows.insert(id, build(id));
        id
    }

    /// Find a row matching `pred`, or insert one built from the new id.
    ///
    /// Lookup and insert happen under one lock.
    pub fn find_or_insert_with(
        &self,
        pred: impl Fn(&T) -> bool,
        build: impl FnOnce(u64) -> T,
    ) -> u64 {
        let mut inner = self.inner.write();
        if let Some((&id, _)) = inner.rows.iter().find(|(_, row)| pred(*row)) {
            return id;
        }
        let id = inner.next_id;
        inner.next_id += 1;
        inner.rows.insert(id, build(id));
        id
    }

    pub fn get(&self, id: u64) -> Option<T> {
        self.inner.read().rows.get(&id).cloned()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.inner.read().rows.contains_key(&id)
    }

    /// Apply `f` to the row with `id`; returns false if there is none.
    pub fn update(&self, id: u64, f: impl FnOnce(&mut T)) -> bool {
        match self.inner.write().rows.get_mut(&id) {
            Some(row) => {
                f(row);
                true
            }
            None => false,
        }
    }

    /// All rows matching `pred`, in id order.
    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.inner
            .read()
            .rows
            .values()
            .filter(|&row| pred(row))
            .cloned()
            .collect()
    }

    pub fn list(&self) -> Vec<T> {
        self.inner.read().rows.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_increase() {
        let table = Table::default();
        assert_eq!(table.insert_with(|id| id * 10), 1);
        assert_eq!(table.insert_with(|id| id * 10), 2);
        assert_eq!(table.get(2), Some(20));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn find_or_insert_reuses_matching_row() {
        let table: Table<String> = Table::default();
        let a = table.find_or_insert_with(|r| r == "a", |_| "a".to_string());
        let b = table.find_or_insert_with(|r| r == "b", |_| "b".to_string());
        let again = table.find_or_insert_with(|r| r == "a", |_| "a".to_string());
        assert_eq!((a, b, again), (1, 2, 1));
    }

    #[test]
    fn update_reports_missing_rows() {
        let table = Table::default();
        let id = table.insert_with(|_| 1u32);
        assert!(table.update(id, |v| *v += 1));
        assert!(!table.update(99, |v| *v += 1));
        assert_eq!(table.get(id), Some(2));
    }
}
