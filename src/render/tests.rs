use crate::{lexer::lexer::tokenize, parser::parser::{parse, parse_partial}};

use super::{lexemes, tree};

#[test]
fn test_render_lexemes() {
    let source = tokenize("f(1)\t# x".to_string(), None);

    assert_eq!(
        lexemes(&source),
        "Identifier \"f\"\nOperator \"(\"\nNumber \"1\"\nOperator \")\"\nSkipped tab other space\nIdentifier \"x\"\n"
    );
}

#[test]
fn test_render_tree() {
    let source = tokenize("for i = 1, 2, 1 do print(i) end".to_string(), None);
    let root = parse(&source).unwrap();

    let expected = "\
Body
  For
    Keyword \"for\"
    Lhs
      Identifier \"i\"
    Operator \"=\"
    Expr
      Expr
        Number \"1\"
    Operator \",\"
    Expr
      Expr
        Number \"2\"
    Operator \",\"
    Expr
      Expr
        Number \"1\"
    Keyword \"do\"
    Body
      Function
        Lhs
          Identifier \"print\"
        Operator \"(\"
        Expr
          Expr
            Identifier \"i\"
        Operator \")\"
    Keyword \"end\"
";
    assert_eq!(tree(&root, false), expected);
}

#[test]
fn test_render_tree_with_trivia() {
    let source = tokenize("f(1) -- hi".to_string(), None);
    let root = parse(&source).unwrap();

    assert_eq!(
        tree(&root, true),
        "Body\n  Function\n    Lhs\n      Identifier \"f\"\n    Operator \"(\"\n    Expr\n      Expr\n        Number \"1\"\n    Operator \")\"\n  Skipped space\n  Comment \"-- hi\"\n"
    );
}

#[test]
fn test_render_partial_tree() {
    let source = tokenize("f(".to_string(), None);
    let (root, error) = parse_partial(&source);

    assert!(error.is_some());
    assert_eq!(
        tree(&root, false),
        "Body\n  Function\n    Lhs\n      Identifier \"f\"\n    Operator \"(\"\n    Expr\n      Error unexpected end of file\n"
    );
}
