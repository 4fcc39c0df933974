#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use anyhow::Result;
use lrusim::{PageId, PageReplacementSimulator, SimulationReport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Run a reference string on a fresh simulator
pub fn simulate(frames: usize, reference: &[PageId]) -> Result<SimulationReport> {
    let mut sim = PageReplacementSimulator::new(frames)?;
    Ok(sim.run(reference))
}

// Deterministic random reference string drawn from `distinct` page numbers
pub fn random_reference(seed: u64, len: usize, distinct: i32) -> Vec<PageId> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..distinct)).collect()
}

pub fn distinct_pages(reference: &[PageId]) -> usize {
    reference.iter().collect::<HashSet<_>>().len()
}

// Recency-list model of LRU: front is most recently used
pub struct RecencyListModel {
    capacity: usize,
    list: VecDeque<PageId>,
    pub faults: usize,
}

impl RecencyListModel {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            list: VecDeque::with_capacity(capacity),
            faults: 0,
        }
    }

    pub fn access(&mut self, page: PageId) {
        if let Some(pos) = self.list.iter().position(|&p| p == page) {
            self.list.remove(pos);
        } else {
            self.faults += 1;
            if self.list.len() == self.capacity {
                self.list.pop_back();
            }
        }
        self.list.push_front(page);
    }

    pub fn resident(&self) -> HashSet<PageId> {
        self.list.iter().copied().collect()
    }
}
