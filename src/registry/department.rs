use std::collections::BTreeMap;

use super::bst::StudentTree;
use super::student::Student;

/// All per-department trees, keyed by department name.
///
/// A department appears the first time a record names it and is never
/// removed afterwards, even when its tree becomes empty. The map is a
/// `BTreeMap` so the cross-department scan order and the record order in
/// the backing file are both stable (name order).
#[derive(Debug)]
pub struct DepartmentTable {
    departments: BTreeMap<String, StudentTree>,
}

impl DepartmentTable {
    pub fn new() -> Self {
        DepartmentTable {
            departments: BTreeMap::new(),
        }
    }

    /// The tree for `name`, created empty on first use.
    pub fn get_or_create(&mut self, name: &str) -> &mut StudentTree {
        self.departments
            .entry(name.to_string())
            .or_insert_with(StudentTree::new)
    }

    pub fn get(&self, name: &str) -> Option<&StudentTree> {
        self.departments.get(name)
    }

    /// Every (department, tree) pair in name order.
    pub fn iter<'table>(
        &'table self,
    ) -> impl Iterator<Item = (&'table String, &'table StudentTree)> {
        self.departments.iter()
    }

    pub fn iter_mut<'table>(
        &'table mut self,
    ) -> impl Iterator<Item = (&'table String, &'table mut StudentTree)> {
        self.departments.iter_mut()
    }

    /// Union of the in-order traversals, in department-name order. This is
    /// the exact sequence the store persists.
    pub fn all_students(&self) -> Vec<&Student> {
        let mut records = Vec::new();
        for tree in self.departments.values() {
            tree.collect_in_order(&mut records);
        }
        records
    }
}
