//! Walking `Error::source` chains.

use std::error::Error;

/// The error followed by each of its causes, outermost first.
pub fn cause_chain<'a>(error: &'a (dyn Error + 'static)) -> Vec<&'a (dyn Error + 'static)> {
    let mut chain = vec![error];
    let mut current = error;
    while let Some(cause) = current.source() {
        chain.push(cause);
        current = cause;
    }
    chain
}

/// The innermost cause; the error itself when it has none.
pub fn root_cause<'a>(error: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    cause_chain(error).last().copied().unwrap_or(error)
}
