use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::parser::Parser;

/// `Expr := Operand (BinOp Expr)?`
///
/// Binary operators group to the right whatever the operator, so `a == b
/// == c` becomes `a == (b == c)`. Known limitation: there is no precedence
/// or left associativity.
///
/// Each operator nests one level deeper, so very long chains are bounded by
/// the thread's stack.
pub fn parse_expr(parser: &mut Parser, parent: &mut Node) -> Result<(), Error> {
    parser.within(parent, NodeKind::Expr, |parser, node| {
        let token = parser.next_token(node)?;

        if token.is(TokenKind::Operator, "(") {
            parse_grouping_expr(parser, node, token)?;
        } else {
            parse_primary_expr(parser, node, token)?;
        }

        parse_binary_expr(parser, node)
    })
}

/// Wraps a single literal or identifier in its own `Expr` node. Any other
/// token, an operator or keyword included, is rejected rather than wrapped.
fn parse_primary_expr(parser: &mut Parser, parent: &mut Node, token: Token) -> Result<(), Error> {
    match token.kind {
        TokenKind::Number | TokenKind::String | TokenKind::Identifier => {
            let mut atom = Node::new(NodeKind::Expr);
            atom.push(token);
            parent.push(atom);
            Ok(())
        }
        _ => {
            let error = ErrorImpl::UnexpectedToken {
                expected: String::from("number, string, identifier or `(`"),
                found: token.value.clone(),
            };
            parser.fail(parent, Error::new(error, Some(token)))
        }
    }
}

/// `'(' Expr ')'`, with the already consumed `(` passed in as `open`.
fn parse_grouping_expr(parser: &mut Parser, parent: &mut Node, open: Token) -> Result<(), Error> {
    parser.within(parent, NodeKind::Expr, |parser, node| {
        node.push(open);
        parse_expr(parser, node)?;
        parser.expect(node, TokenKind::Operator, ")")?;
        Ok(())
    })
}

/// If a binary operator follows, re-roots the operand just parsed into
/// `node` under a new `Expr` holding operand, operator and the rest of the
/// expression.
fn parse_binary_expr(parser: &mut Parser, node: &mut Node) -> Result<(), Error> {
    if !parser.peek_token().is_some_and(Token::is_binary_operator) {
        return Ok(());
    }

    let operand = node.pop_node();

    parser.within(node, NodeKind::Expr, |parser, binary| {
        if let Some(operand) = operand {
            binary.push(operand);
        }

        let operator = parser.next_token(binary)?;
        binary.push(operator);
        parse_expr(parser, binary)
    })
}
