use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn new(id: i64) -> Self {
        RecordId(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId(id)
    }
}

/// A stored text record.
///
/// `created_at` is assigned once on first insert and survives content
/// updates, so recency ordering always reflects insertion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Soft-delete marker. Not consulted by any operation.
    pub marked_for_deletion: bool,
}

impl Record {
    pub fn new(id: RecordId, content: String, created_at: DateTime<Utc>) -> Self {
        Record {
            id,
            content,
            created_at,
            marked_for_deletion: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_is_an_independent_copy() {
        let original = Record::new(RecordId(7), "hello world".to_string(), Utc::now());
        let mut staged = original.clone();
        staged.content = "hello again".to_string();

        assert_eq!(original.content, "hello world");
        assert_eq!(staged.id, original.id);
        assert_eq!(staged.created_at, original.created_at);
        assert_eq!(staged.marked_for_deletion, original.marked_for_deletion);
    }
}
