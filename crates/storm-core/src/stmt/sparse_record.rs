use super::Value;

/// A partially populated entity record.
///
/// Built by the hydrator from one result row: slots are indexed by the
/// model's field position, and fields absent from the result set stay
/// empty. Generated `load` implementations take each slot once and fall
/// back to the field type's default when a slot is empty.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SparseRecord {
    values: Vec<Option<Value>>,
}

impl SparseRecord {
    /// Creates an empty record with `width` field slots.
    pub fn new(width: usize) -> Self {
        Self {
            values: vec![None; width],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn set(&mut self, index: usize, value: Value) {
        self.values[index] = Some(value);
    }

    pub fn contains(&self, index: usize) -> bool {
        matches!(self.values.get(index), Some(Some(_)))
    }

    /// Takes the value stored for the field at `index`, leaving the slot empty.
    pub fn take(&mut self, index: usize) -> Option<Value> {
        self.values.get_mut(index).and_then(Option::take)
    }
}
