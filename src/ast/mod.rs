/// AST (Abstract Syntax Tree) module
/// Contains the tree produced by the parser
///
/// Submodules:
/// - ast: Node kinds, nodes and their children, plus tree queries
pub mod ast;

#[cfg(test)]
mod tests;
