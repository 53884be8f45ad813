//! Sentinel-returning call surface
//!
//! Mirrors the list API the lab's client and server were written against:
//! functions take an optional list handle (`None` stands for a missing list),
//! signed indices, and report failure by returning [`SENTINEL`] or by doing
//! nothing. New code should use [`IntList`] directly.

use crate::{IntList, ListError};

/// Returned by removals and lookups that found nothing.
///
/// A stored `-1` is indistinguishable from this value. Callers that need to
/// tell them apart must use the `Result` API on [`IntList`].
pub const SENTINEL: i32 = -1;

/// Create an empty list
///
/// # Errors
///
/// Returns `ListError::Alloc` if the list cannot be allocated
pub fn create() -> Result<IntList, ListError> {
    IntList::with_capacity(0)
}

/// Release every node of `list`; a missing list is ignored
pub fn destroy(list: Option<IntList>) {
    if let Some(list) = list {
        let stats = list.into_stats();
        tracing::trace!(
            allocations = stats.allocations,
            releases = stats.releases,
            "list destroyed"
        );
    }
}

#[must_use]
pub fn length(list: Option<&IntList>) -> usize {
    list.map_or(0, IntList::len)
}

pub fn push_front(list: Option<&mut IntList>, value: i32) {
    if let Some(list) = list {
        swallow(list.push_front(value), "push_front");
    }
}

pub fn push_back(list: Option<&mut IntList>, value: i32) {
    if let Some(list) = list {
        swallow(list.push_back(value), "push_back");
    }
}

/// Insert at `index`. Negative indices are ignored and indices past the end
/// append to the back, with a warning naming both positions.
pub fn insert_at(list: Option<&mut IntList>, value: i32, index: i64) {
    let (Some(list), Ok(index)) = (list, usize::try_from(index)) else {
        return;
    };
    match list.insert_at(value, index) {
        Ok(insertion) if insertion.clamped() => tracing::warn!(
            requested = insertion.requested,
            actual = insertion.index,
            "insert index past end, appended instead"
        ),
        Ok(_) => {}
        Err(err) => swallow(Err(err), "insert_at"),
    }
}

#[must_use]
pub fn remove_front(list: Option<&mut IntList>) -> i32 {
    list.and_then(|list| list.remove_front().ok())
        .unwrap_or(SENTINEL)
}

#[must_use]
pub fn remove_back(list: Option<&mut IntList>) -> i32 {
    list.and_then(|list| list.remove_back().ok())
        .unwrap_or(SENTINEL)
}

#[must_use]
pub fn remove_at(list: Option<&mut IntList>, index: i64) -> i32 {
    let (Some(list), Ok(index)) = (list, usize::try_from(index)) else {
        return SENTINEL;
    };
    list.remove_at(index).unwrap_or(SENTINEL)
}

#[must_use]
pub fn get_at(list: Option<&IntList>, index: i64) -> i32 {
    let (Some(list), Ok(index)) = (list, usize::try_from(index)) else {
        return SENTINEL;
    };
    list.get_at(index).unwrap_or(SENTINEL)
}

/// Render `list`, or `[]` when it is missing
#[must_use]
pub fn to_display_string(list: Option<&IntList>) -> String {
    list.map_or_else(|| String::from("[]"), IntList::to_display_string)
}

fn swallow(result: Result<(), ListError>, operation: &str) {
    if let Err(err) = result {
        tracing::warn!(operation, %err, "list operation dropped");
    }
}
