//! Replay line: a shell pipeline equivalent to the session.

/// Separator between pipeline stages.
pub const SEPARATOR: &str = " | ";

/// Join the source descriptor and the invocations in order.
///
/// With no invocations the result is the descriptor alone.
pub fn assemble<S: AsRef<str>>(descriptor: &str, invocations: &[S]) -> String {
    let capacity = invocations
        .iter()
        .map(|s| s.as_ref().len() + SEPARATOR.len())
        .sum::<usize>()
        + descriptor.len();

    let mut line = String::with_capacity(capacity);
    line.push_str(descriptor);
    for invocation in invocations {
        line.push_str(SEPARATOR);
        line.push_str(invocation.as_ref());
    }
    line
}
