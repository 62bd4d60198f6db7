//! Column-level access to instance state.
//!
//! The field accessor and the projection layer never depend on a concrete
//! record type: anything that can hand out column values by name works.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::value::Value;

/// Read access to column values by name.
pub trait ColumnSource {
    /// The value stored in `column`, or `None` if the column is absent.
    fn column(&self, column: &str) -> Option<&Value>;
}

/// Read/write access to column values by name.
pub trait ColumnStore: ColumnSource {
    /// Overwrite the value stored in `column`.
    fn set_column(&mut self, column: &str, value: Value);
}

impl<H: BuildHasher> ColumnSource for HashMap<String, Value, H> {
    fn column(&self, column: &str) -> Option<&Value> {
        self.get(column)
    }
}

impl<H: BuildHasher> ColumnStore for HashMap<String, Value, H> {
    fn set_column(&mut self, column: &str, value: Value) {
        self.insert(column.to_string(), value);
    }
}

impl ColumnSource for BTreeMap<String, Value> {
    fn column(&self, column: &str) -> Option<&Value> {
        self.get(column)
    }
}

impl ColumnStore for BTreeMap<String, Value> {
    fn set_column(&mut self, column: &str, value: Value) {
        self.insert(column.to_string(), value);
    }
}

impl<T: ColumnSource + ?Sized> ColumnSource for &T {
    fn column(&self, column: &str) -> Option<&Value> {
        (**self).column(column)
    }
}

impl<T: ColumnSource + ?Sized> ColumnSource for &mut T {
    fn column(&self, column: &str) -> Option<&Value> {
        (**self).column(column)
    }
}

impl<T: ColumnStore + ?Sized> ColumnStore for &mut T {
    fn set_column(&mut self, column: &str, value: Value) {
        (**self).set_column(column, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_through<S: ColumnStore + ?Sized>(store: &mut S) {
        store.set_column("name_en", Value::from("Laptop"));
    }

    #[test]
    fn test_maps_are_column_stores() {
        let mut hashed: HashMap<String, Value> = HashMap::new();
        write_through(&mut hashed);
        assert_eq!(hashed.column("name_en"), Some(&Value::from("Laptop")));

        let mut ordered: BTreeMap<String, Value> = BTreeMap::new();
        write_through(&mut &mut ordered);
        assert_eq!(ordered.column("name_en"), Some(&Value::from("Laptop")));
        assert_eq!(ordered.column("name_fr"), None);
    }

    #[test]
    fn test_hash_map_with_custom_hasher() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::BuildHasherDefault;

        let mut row: HashMap<String, Value, BuildHasherDefault<DefaultHasher>> =
            HashMap::default();
        write_through(&mut row);
        assert_eq!(row.column("name_en"), Some(&Value::from("Laptop")));
    }
}
