use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// Parses a nested block into a fresh `Body` node under `parent`.
pub fn parse_block(parser: &mut Parser, parent: &mut Node) -> Result<(), Error> {
    parser.within(parent, NodeKind::Body, parse_block_body)
}

/// Parses statements into `body` until end of file or a block closing
/// keyword. The closing keyword is left for the caller.
pub fn parse_block_body(parser: &mut Parser, body: &mut Node) -> Result<(), Error> {
    loop {
        let Some(token) = parser.peek_token() else {
            return Ok(());
        };

        if token.is_keyword(&["for"]) {
            parse_for_stmt(parser, body)?;
        } else if token.is_keyword(&["if"]) {
            parse_if_stmt(parser, body)?;
        } else if token.is_keyword(&["end", "elseif", "else"]) {
            return Ok(());
        } else if token.kind == TokenKind::Identifier {
            parse_function_call(parser, body)?;
        } else {
            let error = ErrorImpl::UnknownToken { found: token.value.clone() };
            return parser.fail(body, Error::new(error, Some(token.clone())));
        }
    }
}

/// `Lhs '(' Expr ')'`
pub fn parse_function_call(parser: &mut Parser, parent: &mut Node) -> Result<(), Error> {
    parser.within(parent, NodeKind::Function, |parser, node| {
        parse_lhs(parser, node)?;
        parser.expect(node, TokenKind::Operator, "(")?;
        parse_expr(parser, node)?;
        parser.expect(node, TokenKind::Operator, ")")?;
        Ok(())
    })
}

/// A bare identifier.
pub fn parse_lhs(parser: &mut Parser, parent: &mut Node) -> Result<(), Error> {
    parser.within(parent, NodeKind::Lhs, |parser, node| {
        let token = parser.next_token(node)?;

        if token.kind != TokenKind::Identifier {
            let error = ErrorImpl::UnexpectedToken {
                expected: String::from("identifier"),
                found: token.value.clone(),
            };
            return parser.fail(node, Error::new(error, Some(token)));
        }

        node.push(token);
        Ok(())
    })
}

/// `'for' Lhs '=' Expr ',' Expr ',' Expr 'do' Block 'end'`
///
/// The step expression is required.
pub fn parse_for_stmt(parser: &mut Parser, parent: &mut Node) -> Result<(), Error> {
    parser.within(parent, NodeKind::For, |parser, node| {
        parser.expect(node, TokenKind::Keyword, "for")?;
        parse_lhs(parser, node)?;
        parser.expect(node, TokenKind::Operator, "=")?;
        parse_expr(parser, node)?;
        parser.expect(node, TokenKind::Operator, ",")?;
        parse_expr(parser, node)?;
        parser.expect(node, TokenKind::Operator, ",")?;
        parse_expr(parser, node)?;
        parser.expect(node, TokenKind::Keyword, "do")?;
        parse_block(parser, node)?;
        parser.expect(node, TokenKind::Keyword, "end")?;
        Ok(())
    })
}

/// `'if' Expr 'then' Block ('elseif' Expr 'then' Block)* ('else' Block)? 'end'`
pub fn parse_if_stmt(parser: &mut Parser, parent: &mut Node) -> Result<(), Error> {
    parser.within(parent, NodeKind::If, |parser, node| {
        parser.expect(node, TokenKind::Keyword, "if")?;
        parse_expr(parser, node)?;
        parser.expect(node, TokenKind::Keyword, "then")?;
        parse_block(parser, node)?;

        while parser.peek_token().is_some_and(|token| token.is_keyword(&["elseif"])) {
            parse_else_if(parser, node)?;
        }

        if parser.peek_token().is_some_and(|token| token.is_keyword(&["else"])) {
            parser.within(node, NodeKind::Else, |parser, else_node| {
                parser.expect(else_node, TokenKind::Keyword, "else")?;
                parse_block(parser, else_node)
            })?;
        }

        parser.expect(node, TokenKind::Keyword, "end")?;
        Ok(())
    })
}

fn parse_else_if(parser: &mut Parser, parent: &mut Node) -> Result<(), Error> {
    parser.within(parent, NodeKind::ElseIf, |parser, node| {
        parser.expect(node, TokenKind::Keyword, "elseif")?;
        parse_expr(parser, node)?;
        parser.expect(node, TokenKind::Keyword, "then")?;
        parse_block(parser, node)
    })
}
