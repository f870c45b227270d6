/// Binary arithmetic.
///
/// Maps operator tokens to arithmetic operations and applies them to the
/// running accumulator, including the division-by-zero check.
pub mod arithmetic;
/// Evaluator state and token consumption.
///
/// Holds the tokenizer and the single lookahead token, and implements `eat`,
/// the only operation that advances the parse position.
pub mod core;
/// The three precedence tiers of the grammar.
///
/// `expr`, `term` and `factor`, each a recursive-descent procedure that
/// computes its value while parsing.
pub mod precedence;
