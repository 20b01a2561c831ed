//! Reload gating
//!
//! A table snapshot is only replaced while no consumer is iterating it.
//! The gate is a three-state machine (Idle → Loading → Ready, reloads via
//! Ready → Loading) guarded by a compare-and-set, plus an active-reader
//! count. Consumers hold a [`ReadGuard`] while scheduling directives; a
//! reload that finds a guard outstanding is refused before any table is
//! touched.

use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

const IDLE: u8 = 0;
const LOADING: u8 = 1;
const READY: u8 = 2;

/// Gate lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// No table has been published yet
    Idle,
    /// A load is rebuilding the table
    Loading,
    /// A table snapshot is published and readable
    Ready,
}

impl GateState {
    fn from_raw(raw: u8) -> GateState {
        match raw {
            LOADING => GateState::Loading,
            READY => GateState::Ready,
            _ => GateState::Idle,
        }
    }
}

/// Guards one category's table against reload while in use
#[derive(Debug, Default)]
pub struct ReloadGate {
    state: AtomicU8,
    readers: AtomicUsize,
    /// State to restore if the load aborts
    resume: AtomicU8,
}

impl ReloadGate {
    /// New gate in `Idle`
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> GateState {
        GateState::from_raw(self.state.load(Ordering::Acquire))
    }

    /// Number of outstanding read guards
    pub fn reader_count(&self) -> usize {
        self.readers.load(Ordering::Acquire)
    }

    /// Try to enter `Loading`
    ///
    /// Refused while any reader is active or another load is running; on
    /// refusal nothing changes. On success the pre-load state is remembered
    /// for [`abort`](Self::abort).
    pub fn try_begin(&self) -> Result<(), GateState> {
        if self.reader_count() > 0 {
            return Err(self.state());
        }
        for from in [READY, IDLE] {
            if self
                .state
                .compare_exchange(from, LOADING, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                // A guard may have been issued between the reader check and
                // the transition; back out rather than load under a reader.
                if self.reader_count() > 0 {
                    self.state.store(from, Ordering::Release);
                    return Err(GateState::from_raw(from));
                }
                self.resume.store(from, Ordering::Release);
                return Ok(());
            }
        }
        Err(self.state())
    }

    /// Publish the rebuilt table: Loading → Ready
    pub fn complete(&self) {
        self.state.store(READY, Ordering::Release);
    }

    /// Give up the load: Loading → the pre-load state
    pub fn abort(&self) {
        let resume = self.resume.load(Ordering::Acquire);
        self.state.store(resume, Ordering::Release);
    }

    /// Register a consumer; refused while a load is rebuilding the table
    ///
    /// The count is raised before the state check so that a load admitted
    /// concurrently sees this reader and backs out; a refused guard leaves
    /// the count unchanged.
    pub fn read_guard(&self) -> Option<ReadGuard<'_>> {
        self.readers.fetch_add(1, Ordering::AcqRel);
        if self.state() == GateState::Loading {
            self.readers.fetch_sub(1, Ordering::AcqRel);
            return None;
        }
        Some(ReadGuard { gate: self })
    }
}

/// RAII marker for an active consumer of a category's table
#[derive(Debug)]
pub struct ReadGuard<'a> {
    gate: &'a ReloadGate,
}

impl Drop for ReadGuard<'_> {
    fn drop(&mut self) {
        self.gate.readers.fetch_sub(1, Ordering::AcqRel);
    }
}
