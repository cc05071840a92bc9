//! Permissive literal parsing.
//!
//! Models sometimes answer with a mapping written as a scripting-language
//! literal rather than JSON: single-quoted strings, `True`/`False`/`None`,
//! trailing commas, tuples. [`parse_literal`] accepts that superset and
//! returns the equivalent [`serde_json::Value`], or `None` when the input is
//! not a single well-formed literal.

use serde_json::{Map, Number, Value};

/// Deepest container nesting accepted, matching serde_json's recursion limit
const MAX_DEPTH: usize = 128;

/// Parse a permissive literal into a JSON value.
pub fn parse_literal(input: &str) -> Option<Value> {
    let mut parser = LiteralParser::new(input);
    let value = parser.value()?;
    parser.skip_whitespace();
    if parser.peek().is_some() {
        return None;
    }
    Some(value)
}

struct LiteralParser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl LiteralParser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn value(&mut self) -> Option<Value> {
        self.skip_whitespace();
        match self.peek()? {
            '{' => self.nested(Self::mapping),
            '[' => self.nested(|p| p.sequence(']')),
            '(' => self.nested(|p| p.sequence(')')),
            '\'' | '"' => self.string().map(Value::String),
            c if c == '-' || c == '+' || c.is_ascii_digit() => self.number(),
            c if c.is_alphabetic() => self.keyword(),
            _ => None,
        }
    }

    fn nested(&mut self, parse: impl FnOnce(&mut Self) -> Option<Value>) -> Option<Value> {
        if self.depth >= MAX_DEPTH {
            return None;
        }
        self.depth += 1;
        let value = parse(self);
        self.depth -= 1;
        value
    }

    fn mapping(&mut self) -> Option<Value> {
        self.bump();
        let mut map = Map::new();
        loop {
            if self.eat('}') {
                return Some(Value::Object(map));
            }
            let key = match self.value()? {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            if !self.eat(':') {
                return None;
            }
            let value = self.value()?;
            map.insert(key, value);
            if !self.eat(',') {
                return self.eat('}').then_some(Value::Object(map));
            }
        }
    }

    fn sequence(&mut self, close: char) -> Option<Value> {
        self.bump();
        let mut items = Vec::new();
        loop {
            if self.eat(close) {
                return Some(Value::Array(items));
            }
            items.push(self.value()?);
            if !self.eat(',') {
                return self.eat(close).then_some(Value::Array(items));
            }
        }
    }

    fn string(&mut self) -> Option<String> {
        let quote = self.bump()?;
        let mut out = String::new();
        loop {
            match self.bump()? {
                c if c == quote => return Some(out),
                '\\' => match self.bump()? {
                    'n' => out.push('\n'),
                    't' => out.push('\t'),
                    'r' => out.push('\r'),
                    '0' => out.push('\0'),
                    'u' => {
                        let hex: String = (0..4).map(|_| self.bump()).collect::<Option<_>>()?;
                        let code = u32::from_str_radix(&hex, 16).ok()?;
                        out.push(char::from_u32(code)?);
                    }
                    // \\ \' \" and unknown escapes keep the escaped character
                    other => out.push(other),
                },
                c => out.push(c),
            }
        }
    }

    fn number(&mut self) -> Option<Value> {
        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.pos += 1;
        }
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '_'))
        {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos]
            .iter()
            .filter(|c| **c != '_' && **c != '+')
            .collect();
        if let Ok(i) = text.parse::<i64>() {
            return Some(Value::Number(i.into()));
        }
        let f = text.parse::<f64>().ok()?;
        Number::from_f64(f).map(Value::Number)
    }

    fn keyword(&mut self) -> Option<Value> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.pos += 1;
        }
        let word: String = self.chars[start..self.pos].iter().collect();
        match word.as_str() {
            "True" | "true" => Some(Value::Bool(true)),
            "False" | "false" => Some(Value::Bool(false)),
            "None" | "null" => Some(Value::Null),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_quoted_mapping() {
        let value = parse_literal("{'final_report': 'X', 'review_notes': 'Y'}").unwrap();
        assert_eq!(value, json!({"final_report": "X", "review_notes": "Y"}));
    }

    #[test]
    fn test_keywords_and_trailing_commas() {
        let value = parse_literal("{'ok': True, 'missing': None, 'items': (1, 2.5, -3,),}").unwrap();
        assert_eq!(value, json!({"ok": true, "missing": null, "items": [1, 2.5, -3]}));
    }

    #[test]
    fn test_escapes_inside_strings() {
        let value = parse_literal(r"{'text': 'It\'s done\nnext line'}").unwrap();
        assert_eq!(value["text"], "It's done\nnext line");
    }

    #[test]
    fn test_double_quotes_inside_single_quoted_string() {
        let value = parse_literal(r#"{'quote': 'He said "hi"'}"#).unwrap();
        assert_eq!(value["quote"], r#"He said "hi""#);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_literal("{'unterminated: 1}").is_none());
        assert!(parse_literal("{'a': 1} trailing").is_none());
        assert!(parse_literal("{'a' 1}").is_none());
        assert!(parse_literal("{'a': undefined}").is_none());
        assert!(parse_literal("").is_none());
    }

    #[test]
    fn test_nesting_depth_is_bounded() {
        let nested = |depth: usize| {
            format!("{{'final_report': {}1{}}}", "[".repeat(depth), "]".repeat(depth))
        };
        assert!(parse_literal(&nested(MAX_DEPTH - 1)).is_some());
        assert!(parse_literal(&nested(MAX_DEPTH)).is_none());
        assert!(parse_literal(&nested(10_000)).is_none());
    }
}
