//! Import declaration parser for Go source files
//!
//! Reads the package clause followed by the leading `import` declarations
//! and stops at the first other top-level declaration, so the rest of the
//! file is never looked at. Handles:
//! - `import "fmt"`
//! - `import alias "github.com/x/y"`, `import . "x/y"`, `import _ "x/y"`
//! - grouped `import ( ... )` blocks
//! - interpreted and raw (backquoted) string literals
//! - line and block comments anywhere between tokens

/// A single import specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Local name (`alias`, `.` or `_`), if any
    pub name: Option<String>,
    /// Unquoted import path
    pub path: String,
    /// 1-based line of the path literal
    pub line: usize,
}

/// Syntax error in the import section of a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSyntaxError {
    pub line: usize,
    pub message: String,
}

impl ImportSyntaxError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Parse the import declarations of a Go source file
pub fn parse_imports(source: &str) -> Result<Vec<ImportSpec>, ImportSyntaxError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut cursor = Cursor::new(source);

    cursor.skip_trivia()?;
    match cursor.identifier() {
        Some("package") => {}
        _ => return Err(ImportSyntaxError::new(cursor.line, "expected 'package'")),
    }
    cursor.skip_trivia()?;
    if cursor.identifier().is_none() {
        return Err(ImportSyntaxError::new(cursor.line, "expected package name"));
    }
    cursor.skip_semicolon()?;

    let mut imports = Vec::new();
    loop {
        cursor.skip_trivia()?;
        if cursor.peek_identifier() != Some("import") {
            break;
        }
        cursor.identifier();
        cursor.skip_trivia()?;

        if cursor.eat('(') {
            loop {
                cursor.skip_trivia()?;
                if cursor.eat(')') {
                    break;
                }
                if cursor.is_eof() {
                    return Err(ImportSyntaxError::new(cursor.line, "expected ')'"));
                }
                imports.push(cursor.import_spec()?);
                cursor.skip_semicolon()?;
            }
        } else {
            imports.push(cursor.import_spec()?);
        }
        cursor.skip_semicolon()?;
    }

    Ok(imports)
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Skip whitespace, newlines and comments
    fn skip_trivia(&mut self) -> Result<(), ImportSyntaxError> {
        loop {
            let rest = self.rest();
            if rest.starts_with("//") {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.bump();
                }
            } else if rest.starts_with("/*") {
                let start_line = self.line;
                self.pos += 2;
                loop {
                    if self.rest().starts_with("*/") {
                        self.pos += 2;
                        break;
                    }
                    if self.bump().is_none() {
                        return Err(ImportSyntaxError::new(
                            start_line,
                            "comment not terminated",
                        ));
                    }
                }
            } else {
                match self.peek() {
                    Some(c) if c.is_whitespace() => {
                        self.bump();
                    }
                    _ => return Ok(()),
                }
            }
        }
    }

    fn skip_semicolon(&mut self) -> Result<(), ImportSyntaxError> {
        self.skip_trivia()?;
        self.eat(';');
        Ok(())
    }

    fn peek_identifier(&self) -> Option<&'a str> {
        let rest = self.rest();
        let mut chars = rest.char_indices();
        match chars.next() {
            Some((_, c)) if c == '_' || c.is_alphabetic() => {}
            _ => return None,
        }
        let end = chars
            .find(|(_, c)| !(*c == '_' || c.is_alphanumeric()))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        Some(&rest[..end])
    }

    fn identifier(&mut self) -> Option<&'a str> {
        let ident = self.peek_identifier()?;
        self.pos += ident.len();
        Some(ident)
    }

    fn import_spec(&mut self) -> Result<ImportSpec, ImportSyntaxError> {
        let name = if self.eat('.') {
            Some(".".to_string())
        } else {
            self.identifier().map(str::to_string)
        };
        if name.is_some() {
            self.skip_trivia()?;
        }

        let line = self.line;
        let path = self.string_literal()?;
        if path.is_empty() {
            return Err(ImportSyntaxError::new(line, "invalid import path: \"\""));
        }
        if path.contains(char::REPLACEMENT_CHARACTER) {
            return Err(ImportSyntaxError::new(line, "invalid UTF-8 in import path"));
        }
        Ok(ImportSpec { name, path, line })
    }

    fn string_literal(&mut self) -> Result<String, ImportSyntaxError> {
        let start_line = self.line;
        match self.bump() {
            Some('"') => {
                let mut value = String::new();
                loop {
                    match self.bump() {
                        Some('"') => return Ok(value),
                        Some('\\') => match self.bump() {
                            Some('n') => value.push('\n'),
                            Some('t') => value.push('\t'),
                            Some(c) if c != '\n' => value.push(c),
                            _ => {
                                return Err(ImportSyntaxError::new(
                                    start_line,
                                    "string literal not terminated",
                                ))
                            }
                        },
                        Some('\n') | None => {
                            return Err(ImportSyntaxError::new(
                                start_line,
                                "string literal not terminated",
                            ))
                        }
                        Some(c) => value.push(c),
                    }
                }
            }
            Some('`') => {
                let mut value = String::new();
                loop {
                    match self.bump() {
                        Some('`') => return Ok(value),
                        Some(c) => value.push(c),
                        None => {
                            return Err(ImportSyntaxError::new(
                                start_line,
                                "raw string literal not terminated",
                            ))
                        }
                    }
                }
            }
            Some(c) => Err(ImportSyntaxError::new(
                start_line,
                format!("expected import path, found '{}'", c),
            )),
            None => Err(ImportSyntaxError::new(
                start_line,
                "expected import path, found EOF",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(source: &str) -> Vec<String> {
        parse_imports(source)
            .unwrap()
            .into_iter()
            .map(|spec| spec.path)
            .collect()
    }

    #[test]
    fn test_single_import() {
        assert_eq!(paths("package main\n\nimport \"fmt\"\n"), vec!["fmt"]);
    }

    #[test]
    fn test_grouped_imports() {
        let source = r#"package main

import (
	"fmt"
	"net/http"

	"github.com/gin-gonic/gin"
)

func main() {}
"#;
        assert_eq!(
            paths(source),
            vec!["fmt", "net/http", "github.com/gin-gonic/gin"]
        );
    }

    #[test]
    fn test_named_imports() {
        let source = r#"package main

import (
	log "github.com/sirupsen/logrus"
	. "github.com/onsi/ginkgo"
	_ "github.com/lib/pq"
)
"#;
        let specs = parse_imports(source).unwrap();
        assert_eq!(specs[0].name.as_deref(), Some("log"));
        assert_eq!(specs[1].name.as_deref(), Some("."));
        assert_eq!(specs[2].name.as_deref(), Some("_"));
        assert_eq!(specs[2].path, "github.com/lib/pq");
        assert_eq!(specs[2].line, 6);
    }

    #[test]
    fn test_multiple_import_declarations() {
        let source = "package a\nimport \"fmt\"\nimport \"os\"; import (\"io\"; \"strings\")\nvar x = 1\n";
        assert_eq!(paths(source), vec!["fmt", "os", "io", "strings"]);
    }

    #[test]
    fn test_comments_and_build_tags() {
        let source = r#"// +build linux

/* Package doc
   spans lines */
package sys // trailing

import (
	// the http client
	"net/http" /* inline */
)
"#;
        assert_eq!(paths(source), vec!["net/http"]);
    }

    #[test]
    fn test_raw_string_path() {
        assert_eq!(paths("package a\nimport `github.com/x/y`\n"), vec!["github.com/x/y"]);
    }

    #[test]
    fn test_stops_at_first_declaration() {
        let source = "package a\n\nfunc f() { import_ := \"not an import\" }\nimport \"late\"\n";
        assert!(paths(source).is_empty());
    }

    #[test]
    fn test_no_imports() {
        assert!(paths("package empty\n").is_empty());
    }

    #[test]
    fn test_missing_package_clause() {
        let err = parse_imports("import \"fmt\"\n").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.message.contains("package"));
    }

    #[test]
    fn test_replacement_character_in_path() {
        let err = parse_imports("package a\nimport \"x/\u{fffd}\"\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.message.contains("UTF-8"));
    }

    #[test]
    fn test_unterminated_string() {
        let err = parse_imports("package a\n\nimport \"fmt\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(err.message.contains("not terminated"));
    }

    #[test]
    fn test_unclosed_group() {
        let err = parse_imports("package a\nimport (\n\t\"fmt\"\n").unwrap_err();
        assert!(err.message.contains("')'"));
    }

    #[test]
    fn test_missing_path() {
        let err = parse_imports("package a\nimport foo\nfunc f() {}\n").unwrap_err();
        assert!(err.message.contains("expected import path"));
    }

    #[test]
    fn test_empty_path() {
        let err = parse_imports("package a\nimport \"\"\n").unwrap_err();
        assert!(err.message.contains("invalid import path"));
    }

    #[test]
    fn test_unterminated_comment() {
        let err = parse_imports("package a\n/* open\nimport \"fmt\"\n").unwrap_err();
        assert_eq!(err.line, 2);
    }
}
