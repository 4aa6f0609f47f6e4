use std::{
    collections::{btree_map::Iter, BTreeMap},
    fmt::Display,
};

use crate::errors::errors::{Error, ErrorImpl};

/// The variable bindings of one call frame.
///
/// Bindings are kept ordered by name so stack dumps are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationRecord {
    members: BTreeMap<String, i64>,
}

impl ActivationRecord {
    pub fn new() -> Self {
        ActivationRecord::default()
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.members.get(name).copied()
    }

    /// Inserts or overwrites a binding.
    pub fn set(&mut self, name: &str, value: i64) {
        self.members.insert(name.to_string(), value);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, i64> {
        self.members.iter()
    }
}

/// A LIFO stack of activation records. Reads and writes always go to the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallStack {
    records: Vec<ActivationRecord>,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack::default()
    }

    pub fn push(&mut self, record: ActivationRecord) {
        self.records.push(record);
    }

    pub fn pop(&mut self) -> Option<ActivationRecord> {
        self.records.pop()
    }

    pub fn peek(&self) -> Result<&ActivationRecord, Error> {
        self.records
            .last()
            .ok_or_else(|| Error::runtime(ErrorImpl::EmptyCallStack))
    }

    pub fn peek_mut(&mut self) -> Result<&mut ActivationRecord, Error> {
        self.records
            .last_mut()
            .ok_or_else(|| Error::runtime(ErrorImpl::EmptyCallStack))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates the records from the most recent frame down to the oldest.
    pub fn iter(&self) -> impl Iterator<Item = &ActivationRecord> {
        self.records.iter().rev()
    }
}

impl Display for CallStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "CALL STACK:")?;
        for record in self.iter() {
            for (name, value) in record.iter() {
                writeln!(f, "  {} = {}", name, value)?;
            }
        }
        Ok(())
    }
}
