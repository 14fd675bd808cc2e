//! Shared helpers for integration tests.

#![allow(dead_code)]

use range_normalizer::Endpoints;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A caller-owned range with an identity independent of its endpoints.
#[derive(Debug, Clone)]
pub struct TestRange<T> {
    pub id: usize,
    pub from: T,
    pub to: T,
}

impl<T> TestRange<T> {
    pub fn new(from: T, to: T) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            from,
            to,
        }
    }
}

impl<T> Endpoints for TestRange<T> {
    type Value = T;

    fn start(&self) -> &T {
        &self.from
    }

    fn end(&self) -> &T {
        &self.to
    }

    fn set_start(&mut self, value: T) {
        self.from = value;
    }

    fn set_end(&mut self, value: T) {
        self.to = value;
    }
}

pub fn ranges<T: Copy>(pairs: &[(T, T)]) -> Vec<TestRange<T>> {
    pairs.iter().map(|&(from, to)| TestRange::new(from, to)).collect()
}

pub fn endpoints<T: Clone>(result: &[&mut TestRange<T>]) -> Vec<(T, T)> {
    result.iter().map(|r| (r.from.clone(), r.to.clone())).collect()
}

pub fn ids<T>(result: &[&mut TestRange<T>]) -> Vec<usize> {
    result.iter().map(|r| r.id).collect()
}
