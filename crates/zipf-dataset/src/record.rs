use crate::error::{DatasetError, Result};

/// One output row: a flow identifier and an element seen in that flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Record {
    pub flow_id: u32,
    pub element_id: u32,
}

impl Record {
    pub fn new(flow_id: u32, element_id: u32) -> Self {
        Self {
            flow_id,
            element_id,
        }
    }

    /// Single `u64` key with the flow in the high 32 bits.
    pub fn packed(&self) -> u64 {
        ((self.flow_id as u64) << 32) | self.element_id as u64
    }

    pub fn from_packed(key: u64) -> Self {
        Self {
            flow_id: (key >> 32) as u32,
            element_id: key as u32,
        }
    }
}

/// Zip two equal-length columns row by row. No reordering, filtering or dedup.
pub fn pair_columns(flow: &[u32], element: &[u32]) -> Result<Vec<Record>> {
    if flow.len() != element.len() {
        return Err(DatasetError::LengthMismatch {
            flow: flow.len(),
            element: element.len(),
        });
    }
    Ok(flow
        .iter()
        .zip(element)
        .map(|(&f, &e)| Record::new(f, e))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_row_by_row() {
        let records = pair_columns(&[3, 1, 3], &[7, 7, 2]).unwrap();
        assert_eq!(
            records,
            vec![Record::new(3, 7), Record::new(1, 7), Record::new(3, 2)]
        );
    }

    #[test]
    fn keeps_duplicates() {
        let records = pair_columns(&[1, 1, 1], &[1, 1, 1]).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn empty_columns_pair_to_nothing() {
        assert!(pair_columns(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let err = pair_columns(&[1, 2, 3], &[1, 2]).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::LengthMismatch {
                flow: 3,
                element: 2
            }
        ));
    }

    #[test]
    fn packed_key_splits_back() {
        let record = Record::new(149_197_297, 87_963_297);
        assert_eq!(record.packed() >> 32, 149_197_297);
        assert_eq!(Record::from_packed(record.packed()), record);
    }
}
