use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::ParseError;

/// legacy match/fuzzy predicate pair, parsed from the compact
/// `key1=value1,key2~value2,key3=` grammar
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Condition {
    pub matches: HashMap<String, String>,
    pub fuzzy: HashMap<String, String>,
}

impl Condition {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.fuzzy.is_empty()
    }

    pub fn with_match<T: Into<String>>(mut self, key: T, value: T) -> Self {
        self.matches.insert(key.into(), value.into());
        self
    }

    pub fn with_fuzzy<T: Into<String>>(mut self, key: T, value: T) -> Self {
        self.fuzzy.insert(key.into(), value.into());
        self
    }
}

fn invalid_key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s(){}\[\]]").expect("valid regex"))
}

/// parse a condition string
///
/// exact query: `key=value`, an empty value means the value must be absent
/// or empty. fuzzy query: `key~value`. the first `=` or `~` after the key
/// delimits the operator, values may contain either character.
pub fn parse_conditions(conditions: &str) -> Result<Condition, ParseError> {
    let mut parsed = Condition::default();

    for clause in conditions.split(',') {
        if clause.is_empty() {
            continue;
        }
        let (key, value, is_fuzzy) = match clause.find(|op| op == '=' || op == '~') {
            Some(index) => (
                &clause[..index],
                &clause[index + 1..],
                clause.as_bytes()[index] == b'~',
            ),
            None => (clause, "", false),
        };
        if invalid_key_regex().is_match(key) {
            return Err(ParseError::InvalidConditions);
        }
        if is_fuzzy {
            parsed.fuzzy.insert(key.to_owned(), value.to_owned());
        } else {
            parsed.matches.insert(key.to_owned(), value.to_owned());
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod test {

    use super::parse_conditions;
    use crate::ParseError;

    #[test]
    fn test_parse_match_and_fuzzy() {
        let parsed = parse_conditions("a=1,b~2").expect("parse");
        assert_eq!(parsed.matches.len(), 1);
        assert_eq!(parsed.matches.get("a").unwrap(), "1");
        assert_eq!(parsed.fuzzy.len(), 1);
        assert_eq!(parsed.fuzzy.get("b").unwrap(), "2");
    }

    #[test]
    fn test_parse_empty_values() {
        let parsed = parse_conditions("a=,b~").expect("parse");
        assert_eq!(parsed.matches.get("a").unwrap(), "");
        assert_eq!(parsed.fuzzy.get("b").unwrap(), "");
    }

    #[test]
    fn test_parse_bare_key_is_exact() {
        let parsed = parse_conditions("paused").expect("parse");
        assert_eq!(parsed.matches.get("paused").unwrap(), "");
        assert!(parsed.fuzzy.is_empty());
    }

    #[test]
    fn test_parse_value_may_contain_operators() {
        let parsed = parse_conditions("key~a=b~c").expect("parse");
        assert_eq!(parsed.fuzzy.get("key").unwrap(), "a=b~c");

        let parsed = parse_conditions("key=a~b").expect("parse");
        assert_eq!(parsed.matches.get("key").unwrap(), "a~b");
    }

    #[test]
    fn test_parse_skips_empty_clauses() {
        let parsed = parse_conditions(",a=1,,").expect("parse");
        assert_eq!(parsed.matches.len(), 1);

        let parsed = parse_conditions("").expect("parse");
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_keys() {
        for conditions in ["bad key=1", "bad(key)=1", "bad[key]~x", "{key}=1"] {
            assert_eq!(
                parse_conditions(conditions),
                Err(ParseError::InvalidConditions)
            );
        }
    }
}
