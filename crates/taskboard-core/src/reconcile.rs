//! Optimistic Reconciler
//!
//! Folds pending intents, in submission order, over the last authoritative
//! task list. The fold is pure apart from temp id minting, which goes
//! through an injectable [`TempIdSource`].

use crate::intent::Intent;
use crate::task::Task;

/// Prefix of client-side placeholder ids. Server ids never start with it.
pub const TEMP_ID_PREFIX: &str = "temp-";

pub fn is_temp_id(id: &str) -> bool {
    id.starts_with(TEMP_ID_PREFIX)
}

/// Mints placeholder ids for optimistic adds.
///
/// Implementations must not hand out the same id twice.
pub trait TempIdSource {
    fn next_temp_id(&mut self) -> String;
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// `temp-<millis>-<counter>`. The counter keeps two adds minted in the
/// same millisecond apart.
#[derive(Debug, Clone)]
pub struct ClockTempIds {
    clock: fn() -> i64,
    counter: u64,
}

impl ClockTempIds {
    pub fn new() -> Self {
        Self::with_clock(now_millis)
    }

    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self { clock, counter: 0 }
    }
}

impl Default for ClockTempIds {
    fn default() -> Self {
        Self::new()
    }
}

impl TempIdSource for ClockTempIds {
    fn next_temp_id(&mut self) -> String {
        self.counter += 1;
        format!("{TEMP_ID_PREFIX}{}-{}", (self.clock)(), self.counter)
    }
}

/// `temp-1`, `temp-2`, ... Deterministic, for tests and fixtures.
#[derive(Debug, Clone, Default)]
pub struct SequentialTempIds {
    issued: u64,
}

impl SequentialTempIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TempIdSource for SequentialTempIds {
    fn next_temp_id(&mut self) -> String {
        self.issued += 1;
        format!("{TEMP_ID_PREFIX}{}", self.issued)
    }
}

/// Hands back ids minted earlier, in order, so re-folding the same intents
/// keeps the same placeholder ids. Falls back to the clock once exhausted.
#[derive(Debug)]
pub struct ReplayTempIds<I> {
    minted: I,
    fallback: ClockTempIds,
}

impl<I: Iterator<Item = String>> ReplayTempIds<I> {
    pub fn new(minted: impl IntoIterator<IntoIter = I, Item = String>) -> Self {
        Self {
            minted: minted.into_iter(),
            fallback: ClockTempIds::new(),
        }
    }
}

impl<I: Iterator<Item = String>> TempIdSource for ReplayTempIds<I> {
    fn next_temp_id(&mut self) -> String {
        self.minted
            .next()
            .unwrap_or_else(|| self.fallback.next_temp_id())
    }
}

/// Takes one id from `ids`. If it is already in use, a numeric suffix is
/// added instead of drawing again, so each add consumes exactly one id.
fn fresh_id(working: &[Task], ids: &mut impl TempIdSource) -> String {
    let taken = |candidate: &str| working.iter().any(|task| task.id == candidate);
    let id = ids.next_temp_id();
    if !taken(&id) {
        return id;
    }
    (1u64..)
        .map(|suffix| format!("{id}-{suffix}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or(id)
}

/// One reducer step.
pub fn apply(mut working: Vec<Task>, intent: &Intent, ids: &mut impl TempIdSource) -> Vec<Task> {
    match intent {
        Intent::Add(draft) => {
            let id = fresh_id(&working, ids);
            let mut task = draft.clone().into_task(id);
            task.is_pending = true;
            working.push(task);
        }
        Intent::Update { id, patch } => {
            for task in working.iter_mut().filter(|task| &task.id == id) {
                task.merge(patch);
                task.is_pending = true;
            }
        }
        Intent::Delete { id } => working.retain(|task| &task.id != id),
        Intent::Unknown(_) => {}
    }
    working
}

/// The list to render right now: `base` with every intent folded in.
pub fn reconcile<'a>(
    base: &[Task],
    intents: impl IntoIterator<Item = &'a Intent>,
    ids: &mut impl TempIdSource,
) -> Vec<Task> {
    intents
        .into_iter()
        .fold(base.to_vec(), |working, intent| apply(working, intent, ids))
}
