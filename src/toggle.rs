// Interaction toggler: pure flag+counter flips over a collection

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::{Interactive, ToggleKind};
use crate::viewer::Identity;

/// Flip one engagement flag on exactly one record, returning a new collection.
///
/// The input is never mutated, so other holders of the old collection observe
/// no change. Exactly one record's flag flips and its paired counter moves by
/// one; every other record and field is untouched. An absent `id` yields
/// `Error::NotFound` and the caller treats it as a no-op.
///
/// The `actor` parameter is the authorization seam: only a registered identity
/// can produce one, so guest sessions cannot express this call at all.
pub fn toggle<T: Interactive>(
    records: &[T],
    id: &str,
    kind: ToggleKind,
    actor: &Identity,
) -> Result<Vec<T>> {
    if !records.iter().any(|r| r.id() == id) {
        return Err(Error::NotFound { id: id.to_string() });
    }

    let mut next = records.to_vec();
    for record in &mut next {
        if record.id() == id {
            record.apply_toggle(kind);
            debug!(
                actor = %actor.id,
                id,
                kind = %kind,
                active = record.is_active(kind),
                count = record.count(kind),
                "toggled engagement flag"
            );
        }
    }
    Ok(next)
}
