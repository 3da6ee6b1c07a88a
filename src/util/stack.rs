/// Remaining stack below which [`grow`] switches to a fresh segment.
const RED_ZONE: usize = 128 * 1024;
/// Size of each additional stack segment.
const SEGMENT_SIZE: usize = 4 * 1024 * 1024;

/// Runs `f`, first moving to a new stack segment if the current one is
/// nearly exhausted.
///
/// Recursion whose depth follows the source program (parsing, evaluation,
/// printing) goes through this, so nesting depth is limited by memory and
/// not by the host thread's stack.
///
/// # Example
/// ```
/// use kaka::util::stack::grow;
///
/// fn depth(n: u32) -> u32 {
///     if n == 0 { 0 } else { grow(|| 1 + depth(n - 1)) }
/// }
///
/// assert_eq!(depth(100_000), 100_000);
/// ```
pub fn grow<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}
