/// The evaluator module parses and computes in a single pass.
///
/// The evaluator pulls tokens from the lexer one at a time, recognizes the
/// grammar by recursive descent over three precedence tiers, and folds each
/// operator into a running result as soon as its right operand is known. No
/// syntax tree is built.
///
/// # Responsibilities
/// - Implements `expr`, `term` and `factor` with left-associative folding.
/// - Rejects tokens that do not fit the grammar, including trailing input.
/// - Reports division by zero as a runtime error.
pub mod evaluator;
/// The lexer module tokenizes source text for the evaluator.
///
/// The lexer reads the raw source text and produces tokens on demand:
/// integer literals, the four arithmetic operators, parentheses, and a final
/// end-of-input marker. Whitespace is skipped.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, value and
///   source span.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
