//! Guards the recursive sorts against call-stack exhaustion.

// `quick_sorted` on sorted input recurses once per element.
#[cfg(feature = "stacker")]
const RED_ZONE: usize = 100 * 1024; // 100 KiB

#[cfg(feature = "stacker")]
const STACK_PER_RECURSION: usize = 1024 * 1024; // 1 MiB

/// Grows the stack on demand if the remaining stack is smaller than the red zone, then runs `f`.
///
/// Without the `stacker` feature `f` is simply called.
#[inline]
pub fn ensure_sufficient_stack<R, F>(f: F) -> R
where
	F: FnOnce() -> R,
{
	#[cfg(feature = "stacker")]
	{
		stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
	}
	#[cfg(not(feature = "stacker"))]
	{
		f()
	}
}
