//! Concurrency stress harness for the canonical registry
//!
//! Worker threads hammer a shared registry with overlapping keys and rotation
//! chains. Afterwards every thread's result for a key must be the same
//! allocation.

use std::sync::{Arc, Barrier};
use std::thread;

use lodestone_core::{
    Axis, Color, Component, Compass, DataTypeId, Delay, Facing, Orientation, SlabPosition,
    SlabTexture,
};
use lodestone_state::{BlockData, CanonicalRegistry, ComponentSet, RegistryConfig};
use tracing::info;

/// Stress configuration
#[derive(Clone, Debug)]
pub struct StressConfig {
    /// Worker threads
    pub threads: usize,
    /// Lookups per thread
    pub rounds: usize,
    /// Distinct keys the threads contend on
    pub distinct_keys: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        StressConfig {
            threads: 8,
            rounds: 2000,
            distinct_keys: 64,
        }
    }
}

impl StressConfig {
    /// Quick run for unit tests
    pub fn light() -> Self {
        StressConfig {
            threads: 4,
            rounds: 200,
            distinct_keys: 16,
        }
    }
}

/// Outcome of a stress run
#[derive(Debug, Default)]
pub struct StressResult {
    pub lookups: u64,
    /// Keys for which two threads held different live instances
    pub divergent_keys: usize,
    /// Default instances that differed between threads
    pub divergent_defaults: usize,
}

impl StressResult {
    pub fn is_converged(&self) -> bool {
        self.divergent_keys == 0 && self.divergent_defaults == 0
    }
}

/// The `i`-th key in a fixed key space of 64 repeater, sign, slab and wool keys
pub fn key_for(i: usize) -> (DataTypeId, ComponentSet) {
    let j = i / 4;
    match i % 4 {
        0 => (
            DataTypeId::REPEATER,
            ComponentSet::of([
                Component::from(Facing::VALUES[j % 4]),
                Component::from(Delay::ALL[j / 4 % 4]),
            ]),
        ),
        1 => (DataTypeId::SIGN, ComponentSet::of([Compass::VALUES[j % 16]])),
        2 => (
            DataTypeId::SLAB,
            ComponentSet::of([
                Component::from(SlabPosition::VALUES[j / 8 % 2]),
                Component::from(SlabTexture::ALL[j % 8]),
            ]),
        ),
        _ => (DataTypeId::WOOL, ComponentSet::of([Color::ALL[j % 16]])),
    }
}

pub struct RegistryStress {
    config: StressConfig,
    registry: CanonicalRegistry,
}

impl RegistryStress {
    pub fn new(config: StressConfig) -> Self {
        RegistryStress {
            config,
            registry: CanonicalRegistry::new(RegistryConfig::default()),
        }
    }

    pub fn registry(&self) -> &CanonicalRegistry {
        &self.registry
    }

    pub fn run(&self) -> StressResult {
        let barrier = Arc::new(Barrier::new(self.config.threads));
        let handles: Vec<_> = (0..self.config.threads)
            .map(|t| {
                let registry = self.registry.clone();
                let barrier = Arc::clone(&barrier);
                let config = self.config.clone();
                thread::spawn(move || worker(t, &registry, &barrier, &config))
            })
            .collect();

        let mut outputs = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.join() {
                Ok(output) => outputs.push(output),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }

        let mut result = StressResult {
            lookups: outputs.iter().map(|o| o.lookups).sum(),
            ..StressResult::default()
        };

        if let Some((first, rest)) = outputs.split_first() {
            for key in 0..self.config.distinct_keys {
                if rest
                    .iter()
                    .any(|o| !Arc::ptr_eq(&o.held[key], &first.held[key]))
                {
                    result.divergent_keys += 1;
                }
            }
            result.divergent_defaults = rest
                .iter()
                .filter(|o| !Arc::ptr_eq(&o.default, &first.default))
                .count();
        }

        info!(
            threads = self.config.threads,
            lookups = result.lookups,
            divergent = result.divergent_keys,
            "registry stress finished"
        );
        result
    }
}

struct WorkerOutput {
    lookups: u64,
    /// One live instance per key, kept until the comparison
    held: Vec<Arc<BlockData>>,
    default: Arc<BlockData>,
}

fn worker(
    thread_idx: usize,
    registry: &CanonicalRegistry,
    barrier: &Barrier,
    config: &StressConfig,
) -> WorkerOutput {
    barrier.wait();
    let default = registry.default_instance(DataTypeId::REPEATER);

    let mut lookups = 0;
    for round in 0..config.rounds {
        // Transient lookups and rotations churn construction and eviction
        let (data_type, components) = key_for((round + thread_idx) % config.distinct_keys);
        let data = registry.get(data_type, components, None);
        let _ = data.rotate(Axis::Y, 90.0);
        lookups += 1;
    }

    let held = (0..config.distinct_keys)
        .map(|i| {
            let (data_type, components) = key_for(i);
            lookups += 1;
            registry.get(data_type, components, None)
        })
        .collect::<Vec<_>>();

    // Rendezvous so every thread holds its instances while they are compared
    barrier.wait();

    WorkerOutput {
        lookups,
        held,
        default,
    }
}
