/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Visitor traits for traversing the tree
/// - expressions: The closed set of expression nodes
/// - statements: The closed set of statement nodes
/// - printer: Parenthesized rendering of a tree, for debugging and tests
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
