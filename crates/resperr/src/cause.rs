use std::any::Any;

use crate::BoxError;

/// Box `err` as a decorator cause
///
/// `anyhow::Error`'s own conversion to a boxed error hides the wrapped
/// value behind a private type, so a decorator inside it would no longer
/// downcast. Those are reallocated so the wrapped error itself is boxed.
pub fn into_cause<E>(err: E) -> BoxError
where
    E: Into<BoxError> + 'static,
{
    let mut slot = Some(err);
    let any: &mut dyn Any = &mut slot;

    if let Some(err) = any.downcast_mut::<Option<anyhow::Error>>().and_then(Option::take) {
        return err.reallocate_into_boxed_dyn_error_without_backtrace();
    }

    slot.map_or_else(|| unreachable!("only anyhow causes are taken"), Into::into)
}
