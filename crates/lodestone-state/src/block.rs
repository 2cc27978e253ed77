//! Placed blocks - a block type paired with canonical block data

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use lodestone_core::{Axis, BlockId, BlockType, LodestoneError, LodestoneResult, Plane};
use tracing::debug;

use crate::{BlockData, CanonicalRegistry};

/// A single placement edit
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    Rotate { axis: Axis, degree: f64 },
    Mirror(Plane),
}

impl Transform {
    pub fn rotate(axis: Axis, degree: f64) -> Self {
        Transform::Rotate { axis, degree }
    }

    /// The edit that undoes this one
    pub fn inverse(self) -> Self {
        match self {
            Transform::Rotate { axis, degree } => Transform::Rotate {
                axis,
                degree: -degree,
            },
            mirror @ Transform::Mirror(_) => mirror,
        }
    }
}

/// A block type with its canonical data
///
/// Blocks order by block id first; ties break on the data so that the order
/// agrees with equality.
#[derive(Clone)]
pub struct Block {
    block_type: BlockType,
    data: Arc<BlockData>,
}

impl Block {
    /// Block in its data type's default configuration, from the global registry
    pub fn new(block_type: BlockType) -> Self {
        Self::new_in(CanonicalRegistry::global(), block_type)
    }

    /// Block in its data type's default configuration, from `registry`
    pub fn new_in(registry: &CanonicalRegistry, block_type: BlockType) -> Self {
        Block {
            block_type,
            data: registry.default_instance(block_type.data_type),
        }
    }

    /// Pair `block_type` with existing data
    ///
    /// # Panics
    /// If `data` belongs to a different data type than `block_type` names.
    pub fn with_data(block_type: BlockType, data: Arc<BlockData>) -> Self {
        assert_eq!(
            block_type.data_type,
            data.data_type(),
            "block type {block_type:?} paired with foreign data"
        );
        Block { block_type, data }
    }

    #[inline]
    pub fn block_type(&self) -> BlockType {
        self.block_type
    }

    #[inline]
    pub fn id(&self) -> BlockId {
        self.block_type.id
    }

    #[inline]
    pub fn data(&self) -> &Arc<BlockData> {
        &self.data
    }

    #[inline]
    pub fn encoded_value(&self) -> u32 {
        self.data.encoded_value()
    }

    pub fn rotate(&self, axis: Axis, degree: f64) -> LodestoneResult<Block> {
        self.data
            .rotate(axis, degree)
            .map(|data| self.replaced(data))
            .map_err(|err| self.reject(err))
    }

    pub fn mirror(&self, plane: Plane) -> LodestoneResult<Block> {
        self.data
            .mirror(plane)
            .map(|data| self.replaced(data))
            .map_err(|err| self.reject(err))
    }

    pub fn transform(&self, transform: Transform) -> LodestoneResult<Block> {
        match transform {
            Transform::Rotate { axis, degree } => self.rotate(axis, degree),
            Transform::Mirror(plane) => self.mirror(plane),
        }
    }

    /// Apply edits in order; the first rejection aborts the whole sequence
    pub fn apply(&self, transforms: &[Transform]) -> LodestoneResult<Block> {
        transforms
            .iter()
            .try_fold(self.clone(), |block, t| block.transform(*t))
    }

    fn replaced(&self, data: Arc<BlockData>) -> Block {
        Block {
            block_type: self.block_type,
            data,
        }
    }

    /// Fold unsupported edits into `PlacementInvalid`; bad arguments pass through
    fn reject(&self, err: LodestoneError) -> LodestoneError {
        if !err.is_unsupported() {
            return err;
        }
        debug!(block = self.block_type.name, error = %err, "placement edit rejected");
        LodestoneError::PlacementInvalid {
            block: self.block_type.name,
            source: Box::new(err),
        }
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.block_type == other.block_type && self.data == other.data
    }
}

impl Eq for Block {}

impl std::hash::Hash for Block {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.block_type.hash(state);
        self.data.hash(state);
    }
}

impl PartialOrd for Block {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Block {
    fn cmp(&self, other: &Self) -> Ordering {
        self.block_type
            .cmp(&other.block_type)
            .then_with(|| self.data.cmp_state(&other.data))
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("type", &self.block_type)
            .field("data", &self.data)
            .finish()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[data={}]", self.block_type.name, self.encoded_value())
    }
}
