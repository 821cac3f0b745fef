//! Query string flattening.

use crate::decode;
use crate::model::QueryParameter;
use url::Url;

/// Parses `url`'s query into ordered parameters, each value fully decoded.
///
/// Pairs keep query-string order and repeated names stay separate entries.
/// An unparseable URL yields an empty list.
pub fn extract(url: &str) -> Vec<QueryParameter> {
    let parsed = match Url::parse(url) {
        Ok(u) => u,
        Err(e) => {
            tracing::debug!(url, "cannot parse URL for parameters: {}", e);
            return Vec::new();
        }
    };
    from_url(&parsed)
}

/// Same as `extract` for an already parsed URL.
pub fn from_url(url: &Url) -> Vec<QueryParameter> {
    url.query_pairs()
        .map(|(name, value)| QueryParameter::new(name, decode::decode(&value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(params: &[QueryParameter]) -> Vec<(&str, &str)> {
        params
            .iter()
            .map(|p| (p.name.as_str(), p.value.as_str()))
            .collect()
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let params = extract("https://example.com/?a=1&b=2&a=3");
        assert_eq!(pairs(&params), vec![("a", "1"), ("b", "2"), ("a", "3")]);
    }

    #[test]
    fn url_valued_parameter() {
        let params = extract("https://example.com/?redirect=https%3A%2F%2Fother.com");
        assert_eq!(
            params,
            vec![QueryParameter {
                name: "redirect".to_string(),
                value: "https://other.com".to_string(),
                is_url: true,
            }]
        );
    }

    #[test]
    fn double_encoded_value() {
        let params = extract("https://t.example/c?u=https%253A%252F%252Fshop.example%252F%253Fid%253D7");
        assert_eq!(params[0].value, "https://shop.example/?id=7");
        assert!(params[0].is_url);
    }

    #[test]
    fn plus_decoded_as_space_once() {
        let params = extract("https://example.com/search?q=url+parser&x=a%2Bb");
        assert_eq!(pairs(&params), vec![("q", "url parser"), ("x", "a+b")]);
    }

    #[test]
    fn empty_and_valueless_pairs() {
        let params = extract("https://example.com/?flag&empty=&=v");
        assert_eq!(pairs(&params), vec![("flag", ""), ("empty", ""), ("", "v")]);
    }

    #[test]
    fn no_query() {
        assert!(extract("https://example.com").is_empty());
        assert!(extract("https://example.com/path#frag").is_empty());
    }

    #[test]
    fn malformed_url_is_empty() {
        assert!(extract("not a url").is_empty());
        assert!(extract("").is_empty());
    }
}
