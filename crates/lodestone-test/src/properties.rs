//! Reusable placement-state properties
//!
//! Each predicate returns `true` when the property holds, so callers can use
//! them from plain tests, proptest bodies or the fuzzers.

use std::sync::Arc;

use lodestone_core::{Axis, Orientation, Plane};
use lodestone_state::{Block, Transform};

/// Property: `next(a).next(b) == next(a + b)` and `next(a).next(-a)` is identity
pub fn next_closure<T: Orientation>(a: i32, b: i32) -> bool {
    T::VALUES
        .iter()
        .all(|v| v.next(a).next(b) == v.next(a + b) && v.next(a).next(-a) == *v)
}

/// Property: degree rotation by whole steps equals step rotation
pub fn degree_matches_steps<T: Orientation>(axis: Axis, k: i32) -> bool {
    match T::step(axis) {
        Some(step) => T::VALUES
            .iter()
            .all(|v| v.rotate_by_degree(axis, step * f64::from(k)) == v.rotate(axis, k)),
        None => T::VALUES
            .iter()
            .all(|v| v.rotate_by_degree(axis, 90.0).is_err()),
    }
}

/// Property: mirroring twice across any legal plane is the identity
pub fn mirror_involution<T: Orientation>() -> bool {
    Plane::ALL
        .into_iter()
        .filter(|p| T::legal_plane(*p))
        .all(|p| {
            T::VALUES
                .iter()
                .all(|v| v.mirror(p).and_then(|m| m.mirror(p)) == Ok(*v))
        })
}

/// Property: the encoded value fits the persisted metadata nibble
pub fn encoding_in_range(block: &Block) -> bool {
    block.encoded_value() <= 15
}

/// Property: two blocks that compare equal share their data instance
pub fn canonical_identity(a: &Block, b: &Block) -> bool {
    a != b || Arc::ptr_eq(a.data(), b.data())
}

/// Property: applying edits then their inverses in reverse restores the block
pub fn inverse_restores(block: &Block, edits: &[Transform]) -> bool {
    let inverse: Vec<Transform> = edits.iter().rev().map(|t| t.inverse()).collect();
    match block.apply(edits).and_then(|edited| edited.apply(&inverse)) {
        Ok(restored) => canonical_identity(&restored, block) && restored == *block,
        Err(_) => true,
    }
}
