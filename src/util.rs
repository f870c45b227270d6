/// Numeric conversion helpers.
///
/// Integer literals are read as `u64` but evaluated as `f64`. The helpers here
/// make sure a literal only reaches the evaluator when that conversion is
/// lossless.
pub mod num;
