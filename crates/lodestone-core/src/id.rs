//! Identity types for blocks and block-data subtypes
//!
//! Block ids are 16-bit to match the persisted block arrays.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Numeric block-type identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BlockId(pub u16);

impl BlockId {
    pub const AIR: BlockId = BlockId(0);

    #[inline]
    pub const fn new(id: u16) -> Self {
        BlockId(id)
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        BlockId(u16::from_be_bytes(bytes))
    }
}

impl fmt::Debug for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block({})", self.0)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of a block-data subtype - the first part of a canonical key
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DataTypeId(pub &'static str);

impl DataTypeId {
    pub const PLAIN: DataTypeId = DataTypeId("plain");
    pub const WOOL: DataTypeId = DataTypeId("wool");
    pub const REPEATER: DataTypeId = DataTypeId("repeater");
    pub const TORCH: DataTypeId = DataTypeId("torch");
    pub const SLAB: DataTypeId = DataTypeId("slab");
    pub const SIGN: DataTypeId = DataTypeId("sign");
    pub const DIRECTIONAL: DataTypeId = DataTypeId("directional");
    pub const CONTAINER: DataTypeId = DataTypeId("container");

    #[inline]
    pub const fn new(name: &'static str) -> Self {
        DataTypeId(name)
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for DataTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataType({})", self.0)
    }
}

impl fmt::Display for DataTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Catalog entry for a block type
///
/// Equality, hashing and ordering use the numeric id only.
#[derive(Clone, Copy)]
pub struct BlockType {
    pub id: BlockId,
    pub name: &'static str,
    /// Block-data subtype this block canonicalizes against
    pub data_type: DataTypeId,
}

impl BlockType {
    pub const fn new(id: u16, name: &'static str, data_type: DataTypeId) -> Self {
        BlockType {
            id: BlockId::new(id),
            name,
            data_type,
        }
    }
}

impl PartialEq for BlockType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BlockType {}

impl Hash for BlockType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for BlockType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BlockType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Debug for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.id.0)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
