//! Optional operations with a no-op fallback.
//!
//! A per-type family often only cares about some of the types of its list:
//! the trade counter handles trades and ignores everything else. Rather than
//! writing an empty handler for every uninteresting type, declare the
//! operation with [`Operation`] for the types that have it and let the probe
//! pick the fallback for the rest.
//!
//! Detection happens during method resolution on a [`Probe`] over concrete
//! types: `(&&probe).invoke(args)` resolves to [`ViaOperation`] when
//! `Op: Operation<T, Args>` holds and to [`ViaFallback`] otherwise. The choice
//! is made at compile time; no check runs at dispatch. In a generic context
//! the bound cannot be proven and the fallback always wins, which is why the
//! probe is only ever expanded by macros at concrete types
//! ([`call_or_default!`](crate::call_or_default), `optional_family!`).

use std::marker::PhantomData;

/// An operation that is defined for type `T`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not defined for type `{T}` with arguments `{Args}`",
    label = "no `Operation<{T}, {Args}>` implementation"
)]
pub trait Operation<T, Args> {
    /// The result of the operation.
    type Output;

    /// Runs the operation for `T`.
    fn call(args: Args) -> Self::Output;
}

/// Resolution point for operation `Op` on type `T`.
///
/// `Args` and `R` are the argument tuple and the result type expected at the
/// call site; `R` is what the fallback produces when the operation is absent.
pub struct Probe<T, Op, Args, R>(PhantomData<fn(Args) -> (T, Op, R)>);

impl<T, Op, Args, R> Probe<T, Op, Args, R> {
    /// Create a probe.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T, Op, Args, R> Default for Probe<T, Op, Args, R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Selected when the operation exists for the probed type.
pub trait ViaOperation {
    /// Arguments of the operation.
    type Args;
    /// Result of the operation.
    type Output;

    /// Run the operation.
    fn invoke(&self, args: Self::Args) -> Self::Output;

    /// Whether the probed type has the operation.
    fn is_present(&self) -> bool {
        true
    }
}

impl<T, Op, Args, R> ViaOperation for &Probe<T, Op, Args, R>
where
    Op: Operation<T, Args>,
{
    type Args = Args;
    type Output = Op::Output;

    #[inline]
    fn invoke(&self, args: Args) -> Op::Output {
        Op::call(args)
    }
}

/// Selected when the operation is absent: does nothing, returns `R::default()`.
pub trait ViaFallback {
    /// Arguments of the operation.
    type Args;
    /// Result of the operation.
    type Output;

    /// Skip the operation.
    fn invoke(&self, args: Self::Args) -> Self::Output;

    /// Whether the probed type has the operation.
    fn is_present(&self) -> bool {
        false
    }
}

impl<T, Op, Args, R: Default> ViaFallback for Probe<T, Op, Args, R> {
    type Args = Args;
    type Output = R;

    #[inline]
    fn invoke(&self, _args: Args) -> R {
        R::default()
    }
}

/// Run `Op` for the concrete type `T`, or produce `R::default()` when
/// `Op: Operation<T, Args>` does not hold.
///
/// # Example
/// ```rust
/// use switchboard_std::{call_or_default, detect::Operation};
///
/// struct Double;
///
/// impl Operation<u32, (u32,)> for Double {
///     type Output = u32;
///
///     fn call((x,): (u32,)) -> u32 {
///         x * 2
///     }
/// }
///
/// assert_eq!(call_or_default!(Double, u32, (u32,), u32, (21,)), 42);
/// assert_eq!(call_or_default!(Double, String, (u32,), u32, (21,)), 0);
/// ```
#[macro_export]
macro_rules! call_or_default {
    ($op:ty, $target:ty, $args_ty:ty, $ret:ty, $args:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::detect::{ViaFallback as _, ViaOperation as _};
        (&&$crate::detect::Probe::<$target, $op, $args_ty, $ret>::new()).invoke($args)
    }};
}

/// Whether `Op: Operation<T, Args>` holds for the concrete type `T`.
///
/// # Example
/// ```rust
/// use switchboard_std::{detect::Operation, has_operation};
///
/// struct Len;
///
/// impl Operation<String, (&'static str,)> for Len {
///     type Output = usize;
///
///     fn call((s,): (&'static str,)) -> usize {
///         s.len()
///     }
/// }
///
/// assert!(has_operation!(Len, String, (&'static str,)));
/// assert!(!has_operation!(Len, u8, (&'static str,)));
/// ```
#[macro_export]
macro_rules! has_operation {
    ($op:ty, $target:ty, $args_ty:ty $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::detect::{ViaFallback as _, ViaOperation as _};
        (&&$crate::detect::Probe::<$target, $op, $args_ty, ()>::new()).is_present()
    }};
}
