/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Expression` and `Statement` families and their discriminants
/// - expressions: Composite expression nodes and operator tags
/// - statements: Composite statement nodes
/// - types: Type annotations, patterns and parameters
///
/// Every family has an `Error` variant carrying the diagnostic that stopped
/// the parse at that point.
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
