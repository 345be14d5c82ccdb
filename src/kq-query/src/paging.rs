use std::sync::OnceLock;

use regex::Regex;

pub const DEFAULT_LIMIT: i64 = 10;

fn paging_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^limit=(-?\d+),page=(\d+)$").expect("valid regex"))
}

/// parse the legacy `limit=<int>,page=<int>` paging string into
/// (limit, offset), page is 1-based, a malformed string silently
/// falls back to `limit=10, offset=0`
pub fn parse_paging(paging: &str) -> (i64, i64) {
    if let Some(groups) = paging_regex().captures(paging) {
        if let (Ok(limit), Ok(page)) = (groups[1].parse::<i64>(), groups[2].parse::<i64>()) {
            return (limit, (page - 1) * limit);
        }
    }
    (DEFAULT_LIMIT, 0)
}

#[cfg(test)]
mod test {

    use super::parse_paging;

    #[test]
    fn test_parse_paging() {
        assert_eq!(parse_paging("limit=10,page=1"), (10, 0));
        assert_eq!(parse_paging("limit=10,page=3"), (10, 20));
        assert_eq!(parse_paging("limit=-1,page=1"), (-1, 0));
    }

    #[test]
    fn test_malformed_paging_falls_back() {
        for paging in ["", "limit=10", "page=1,limit=10", "limit=x,page=1", "limit=10,page=1,extra=2"] {
            assert_eq!(parse_paging(paging), (10, 0));
        }
    }
}
