// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Built in file types.

use rawed_tui::{HighlightClass, SyntaxDefinition};

#[must_use]
pub fn builtin_syntaxes() -> Vec<SyntaxDefinition> {
    vec![c(), go(), javascript(), python(), html(), json()]
}

fn c() -> SyntaxDefinition {
    SyntaxDefinition::new("c")
        .with_extensions(&["c", "h", "cpp", "cc"])
        .with_keywords(
            HighlightClass::Keyword1,
            &[
                "switch", "if", "while", "for", "break", "continue", "return", "else", "struct",
                "union", "typedef", "static", "enum", "class", "case",
            ],
        )
        .with_keywords(
            HighlightClass::Keyword2,
            &["int", "long", "double", "float", "char", "unsigned", "signed", "void"],
        )
        .with_single_line_comment("//")
        .with_multi_line_comment("/*", "*/")
        .with_strings()
        .with_numbers()
}

fn go() -> SyntaxDefinition {
    SyntaxDefinition::new("go")
        .with_extensions(&["go"])
        .with_keywords(
            HighlightClass::Keyword1,
            &[
                "break", "default", "func", "interface", "select", "case", "defer", "go", "map",
                "struct", "chan", "else", "goto", "package", "switch", "const", "fallthrough",
                "if", "range", "type", "continue", "for", "import", "return", "var",
            ],
        )
        .with_keywords(
            HighlightClass::Keyword2,
            &[
                "append", "bool", "byte", "cap", "close", "complex", "complex64", "complex128",
                "error", "copy", "false", "float32", "float64", "imag", "int", "int8", "int16",
                "int32", "int64", "iota", "len", "make", "new", "nil", "panic", "print",
                "println", "real", "recover", "rune", "string", "true", "uint", "uint8",
                "uint16", "uint32", "uint64", "uintptr",
            ],
        )
        .with_single_line_comment("//")
        .with_multi_line_comment("/*", "*/")
        .with_strings()
        .with_numbers()
}

fn javascript() -> SyntaxDefinition {
    SyntaxDefinition::new("javascript")
        .with_extensions(&["js", "mjs"])
        .with_keywords(
            HighlightClass::Keyword1,
            &[
                "async", "await", "break", "case", "catch", "class", "const", "continue",
                "debugger", "default", "delete", "do", "else", "export", "extends", "finally",
                "for", "function", "if", "import", "in", "instanceof", "let", "new", "of",
                "return", "static", "super", "switch", "this", "throw", "try", "typeof",
                "var", "void", "while", "with", "yield",
            ],
        )
        .with_keywords(
            HighlightClass::Keyword2,
            &["true", "false", "null", "undefined", "NaN", "Infinity", "arguments"],
        )
        .with_single_line_comment("//")
        .with_multi_line_comment("/*", "*/")
        .with_strings()
        .with_numbers()
}

fn python() -> SyntaxDefinition {
    SyntaxDefinition::new("python")
        .with_extensions(&["py"])
        .with_keywords(
            HighlightClass::Keyword1,
            &[
                "False", "None", "True", "and", "as", "assert", "async", "await", "break",
                "class", "continue", "def", "del", "elif", "else", "except", "finally", "for",
                "from", "pass", "yield",
            ],
        )
        .with_keywords(
            HighlightClass::Keyword2,
            &[
                "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "global",
                "raise", "return", "try", "while", "with",
            ],
        )
        .with_single_line_comment("#")
        .with_multi_line_comment("\"\"\"", "\"\"\"")
        .with_strings()
        .with_numbers()
}

fn html() -> SyntaxDefinition {
    SyntaxDefinition::new("html")
        .with_extensions(&["html", "htm"])
        .with_keywords(
            HighlightClass::Keyword1,
            &[
                "!DOCTYPE", "html", "head", "meta", "link", "title", "body", "script", "style",
                "div", "span", "p", "a",
            ],
        )
        .with_keywords(
            HighlightClass::Keyword2,
            &["rel", "name", "content", "href", "src", "type", "id", "class", "charset"],
        )
        .with_multi_line_comment("<!--", "-->")
        .with_strings()
        .with_numbers()
}

fn json() -> SyntaxDefinition {
    SyntaxDefinition::new("json")
        .with_extensions(&["json"])
        .with_strings()
        .with_numbers()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rawed_tui::{SyntaxSelector, highlight_row, select_for_path};
    use std::path::Path;
    use test_case::test_case;

    #[test_case("main.c", Some("c"))]
    #[test_case("lib.h", Some("c"))]
    #[test_case("a.cc", Some("c"))]
    #[test_case("main.go", Some("go"))]
    #[test_case("app.js", Some("javascript"))]
    #[test_case("script.py", Some("python"))]
    #[test_case("index.htm", Some("html"))]
    #[test_case("package.json", Some("json"))]
    #[test_case("notes.txt", None)]
    #[test_case("Makefile", None)]
    fn test_selection_by_extension(path: &str, expected: Option<&str>) {
        let syntaxes = builtin_syntaxes();
        assert_eq!(
            select_for_path(&syntaxes, Path::new(path)).map(|it| it.filetype),
            expected
        );
    }

    #[test]
    fn test_html_has_no_single_line_comment() {
        let html = builtin_syntaxes().select("html").unwrap();
        assert_eq!(html.single_line_comment, None);
        assert_eq!(html.multi_line_comment, Some(("<!--", "-->")));
    }

    #[test]
    fn test_python_docstring_spans_rows() {
        let python = builtin_syntaxes().select("py").unwrap();
        let first: Vec<char> = "x = \"\"\"doc".chars().collect();
        let row = highlight_row(&first, false, Some(&python));
        assert!(row.continuation);
        assert_eq!(row.classes[4], HighlightClass::MlComment);
    }

    #[test]
    fn test_json_has_no_comments_or_keywords() {
        let json = builtin_syntaxes().select("json").unwrap();
        assert!(json.keywords.is_empty());
        assert_eq!(json.single_line_comment, None);
        assert_eq!(json.multi_line_comment, None);
    }
}
