//! Edit Fuzzer - Randomized placement edits through `Block`
//!
//! Tests:
//! - Canonical identity of equal results
//! - All-or-nothing sequences
//! - Inverse round-trips
//! - Encoding bounds
//! - Error classification of rejected edits

use lodestone_core::{Axis, Plane};
use lodestone_state::{catalog, Block, CanonicalRegistry, RegistryConfig, Transform};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::properties;

/// Rotation amounts drawn for valid edits; every family divides at least one
const DEGREES: [f64; 8] = [22.5, 45.0, 90.0, 180.0, 270.0, -90.0, -22.5, 360.0];

/// Fuzzer configuration
#[derive(Clone, Debug)]
pub struct FuzzerConfig {
    /// Number of starting blocks
    pub block_count: usize,
    /// Number of edit sequences to run
    pub edit_count: usize,
    /// Probability that an edit is a mirror rather than a rotation
    pub mirror_prob: f64,
    /// Probability of a degree that is not a multiple of any step
    pub invalid_degree_prob: f64,
    /// Random seed
    pub seed: u64,
}

impl Default for FuzzerConfig {
    fn default() -> Self {
        FuzzerConfig {
            block_count: 10,
            edit_count: 1000,
            mirror_prob: 0.3,
            invalid_degree_prob: 0.05,
            seed: 42,
        }
    }
}

impl FuzzerConfig {
    /// Light fuzzing for quick tests
    pub fn light() -> Self {
        FuzzerConfig {
            block_count: 5,
            edit_count: 100,
            mirror_prob: 0.2,
            invalid_degree_prob: 0.0,
            seed: 42,
        }
    }

    /// Heavy fuzzing for thorough testing
    pub fn heavy() -> Self {
        FuzzerConfig {
            block_count: 50,
            edit_count: 10000,
            mirror_prob: 0.4,
            invalid_degree_prob: 0.1,
            seed: 42,
        }
    }
}

/// Edit fuzzer over a private registry
pub struct EditFuzzer {
    config: FuzzerConfig,
    registry: CanonicalRegistry,
    blocks: Vec<Block>,
    rng: StdRng,
}

impl EditFuzzer {
    pub fn new(config: FuzzerConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        EditFuzzer {
            config,
            registry: CanonicalRegistry::new(RegistryConfig::default()),
            blocks: Vec::new(),
            rng,
        }
    }

    pub fn registry(&self) -> &CanonicalRegistry {
        &self.registry
    }

    /// Seed the block pool with random catalog types in random poses
    pub fn initialize_blocks(&mut self) {
        self.blocks.clear();
        for _ in 0..self.config.block_count {
            let block_type = catalog::BLOCK_TYPES[self.rng.gen_range(0..catalog::BLOCK_TYPES.len())];
            let block = Block::new_in(&self.registry, block_type);
            let turns = self.rng.gen_range(0..4) as f64 * 90.0;
            let posed = block.rotate(Axis::Y, turns).unwrap_or(block);
            self.blocks.push(posed);
        }
    }

    fn generate_transform(&mut self) -> Transform {
        if self.rng.gen::<f64>() < self.config.mirror_prob {
            let plane = *Plane::ALL.choose(&mut self.rng).unwrap_or(&Plane::XY);
            return Transform::Mirror(plane);
        }

        let axis = *Axis::ALL.choose(&mut self.rng).unwrap_or(&Axis::Y);
        let degree = if self.rng.gen::<f64>() < self.config.invalid_degree_prob {
            // Strictly between multiples of the smallest step
            f64::from(self.rng.gen_range(-16i32..16)) * 22.5 + self.rng.gen_range(1.0..22.0)
        } else {
            *DEGREES.choose(&mut self.rng).unwrap_or(&90.0)
        };
        Transform::rotate(axis, degree)
    }

    fn generate_sequence(&mut self) -> Vec<Transform> {
        let len = self.rng.gen_range(1..6);
        (0..len).map(|_| self.generate_transform()).collect()
    }

    /// Run the fuzzer
    pub fn run(&mut self) -> FuzzResult {
        if self.blocks.is_empty() {
            self.initialize_blocks();
        }

        let mut result = FuzzResult::new();
        for _ in 0..self.config.edit_count {
            let idx = self.rng.gen_range(0..self.blocks.len());
            let edits = self.generate_sequence();
            self.check_sequence(idx, &edits, &mut result);
        }

        info!(
            applied = result.applied,
            rejected = result.rejected,
            violations = result.violations(),
            "edit fuzz run finished"
        );
        result
    }

    fn check_sequence(&mut self, idx: usize, edits: &[Transform], result: &mut FuzzResult) {
        let block = self.blocks[idx].clone();

        // Step-by-step application must agree with the batch
        let mut stepwise = Ok(block.clone());
        for edit in edits {
            stepwise = stepwise.and_then(|b| b.transform(*edit));
        }

        match block.apply(edits) {
            Ok(edited) => {
                result.applied += 1;
                match &stepwise {
                    Ok(expected) if properties::canonical_identity(expected, &edited) && *expected == edited => {}
                    _ => result.identity_violations += 1,
                }
                if !properties::encoding_in_range(&edited) {
                    result.encoding_violations += 1;
                }
                if !properties::inverse_restores(&block, edits) {
                    result.inverse_violations += 1;
                }
                if !properties::canonical_identity(&edited, &self.rebuild(&edited)) {
                    result.identity_violations += 1;
                }
                self.blocks[idx] = edited;
            }
            Err(err) => {
                result.rejected += 1;
                if stepwise.is_ok() {
                    result.identity_violations += 1;
                }
                if !(err.is_invalid_argument() || err.is_placement_invalid()) {
                    debug!(error = %err, "unclassified edit rejection");
                    result.classification_violations += 1;
                }
            }
        }
    }

    /// Fetch the block's data again by value; must be the live canonical instance
    fn rebuild(&self, block: &Block) -> Block {
        let data = self.registry.intern(block.data().key().clone());
        Block::with_data(block.block_type(), data)
    }
}

/// Fuzzing result
#[derive(Debug, Default)]
pub struct FuzzResult {
    pub applied: u64,
    pub rejected: u64,
    pub identity_violations: u32,
    pub inverse_violations: u32,
    pub encoding_violations: u32,
    pub classification_violations: u32,
}

impl FuzzResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn violations(&self) -> u32 {
        self.identity_violations
            + self.inverse_violations
            + self.encoding_violations
            + self.classification_violations
    }

    pub fn is_valid(&self) -> bool {
        self.violations() == 0
    }
}
