//! Async debounce driver for tokio hosts.

use log::trace;
use tokio::time::{Instant, sleep_until};

use super::{Candidate, Lookup};

/// Wait until the lookup's pending search is due, then run it.
///
/// Returns false immediately when no search is pending. Hosts that also
/// wait on an input stream select on [`Lookup::next_deadline`] instead and
/// call [`Lookup::tick`] when it elapses.
pub async fn wait_for_search<C: Candidate>(lookup: &mut Lookup<C>) -> bool {
    let Some(deadline) = lookup.next_deadline() else {
        return false;
    };
    trace!("Lookup {} waiting for search deadline", lookup.id());
    sleep_until(Instant::from_std(deadline)).await;
    // the tokio clock may be paused or ahead of the std clock
    let now = Instant::now().into_std().max(deadline);
    lookup.tick(now)
}

