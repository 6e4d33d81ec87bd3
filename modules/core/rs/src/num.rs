use std::fmt::Debug;

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Default {}
impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// T values are non-negative primitive integers
pub trait PrimUInt: PrimInt + ::num::Unsigned {}

impl<T: PrimInt + ::num::Unsigned> PrimUInt for T {}

/// T values are signed primitive integers that can hold any i8 literal (i8, i16, i32, i64, ...)
pub trait PrimSInt: PrimInt + ::num::Signed + From<i8> {}

impl<T: PrimInt + ::num::Signed + From<i8>> PrimSInt for T {}
