//! Ordered result of a full archive scan.

use serde::Serialize;

use crate::inspection::member::MemberRecord;

/// Members of an archive in on-disk order, plus the bytes left over after
/// the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArchiveInventory {
    /// Parsed members, first member first.
    pub members: Vec<MemberRecord>,

    /// Bytes between the end of the last parsed member and end of file.
    pub trailing_bytes: u64,
}

impl ArchiveInventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a member, preserving archive order.
    pub fn add_member(&mut self, member: MemberRecord) {
        self.members.push(member);
    }

    /// Returns the number of members.
    #[must_use]
    pub fn total_members(&self) -> usize {
        self.members.len()
    }

    /// Returns the summed payload size of all members.
    #[must_use]
    pub fn total_payload_size(&self) -> u64 {
        self.members.iter().map(|m| m.size).sum()
    }

    /// Returns `true` if the archive has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::MemberHeader;
    use crate::types::Md5Digest;

    fn member(name: &str, size: u64) -> MemberRecord {
        let header = MemberHeader {
            name: name.to_string(),
            mtime: 0,
            uid: 0,
            gid: 0,
            mode: 0o644,
            size,
        };
        MemberRecord::new(header, Md5Digest::of(name.as_bytes()))
    }

    #[test]
    fn test_empty_inventory() {
        let inventory = ArchiveInventory::new();
        assert!(inventory.is_empty());
        assert_eq!(inventory.total_members(), 0);
        assert_eq!(inventory.total_payload_size(), 0);
        assert_eq!(inventory.trailing_bytes, 0);
    }

    #[test]
    fn test_add_member_preserves_order() {
        let mut inventory = ArchiveInventory::new();
        inventory.add_member(member("first", 3));
        inventory.add_member(member("second", 5));

        assert_eq!(inventory.total_members(), 2);
        assert_eq!(inventory.total_payload_size(), 8);
        assert_eq!(inventory.members[0].name, "first");
        assert_eq!(inventory.members[1].name, "second");
    }
}
