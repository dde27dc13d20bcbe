//! Page URL query parameter helpers.
//!
//! The storefront carries state between pages in the query string, so both
//! the add-to-cart directive and the `user` identity are read and rewritten
//! here. Rewriting keeps the order of untouched parameters.

use url::Url;

/// First value of `key` in the query string.
pub fn query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Remove every occurrence of each key in `keys`.
pub fn remove_query_params(url: &mut Url, keys: &[&str]) {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| !keys.iter().any(|key| *k == **key))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    write_pairs(url, kept);
}

/// Set `key` to `value`, replacing the first occurrence in place and
/// dropping any repeats. Appends when absent.
pub fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let mut replaced = false;
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (k, v) in url.query_pairs() {
        if k == key {
            if !replaced {
                pairs.push((key.to_string(), value.to_string()));
                replaced = true;
            }
        } else {
            pairs.push((k.into_owned(), v.into_owned()));
        }
    }
    if !replaced {
        pairs.push((key.to_string(), value.to_string()));
    }
    write_pairs(url, pairs);
}

fn write_pairs(url: &mut Url, pairs: Vec<(String, String)>) {
    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_query_param() {
        let u = url("https://shop.test/cart.html?user=ann&id=3");
        assert_eq!(query_param(&u, "user").as_deref(), Some("ann"));
        assert_eq!(query_param(&u, "qty"), None);
    }

    #[test]
    fn test_remove_query_params_keeps_others() {
        let mut u = url("https://shop.test/cart.html?action=add&id=1&qty=3&user=ann");
        remove_query_params(&mut u, &["action", "id", "qty"]);
        assert_eq!(u.as_str(), "https://shop.test/cart.html?user=ann");
    }

    #[test]
    fn test_remove_last_param_drops_question_mark() {
        let mut u = url("https://shop.test/cart.html?user=ann");
        remove_query_params(&mut u, &["user"]);
        assert_eq!(u.as_str(), "https://shop.test/cart.html");
    }

    #[test]
    fn test_set_query_param() {
        let mut u = url("https://shop.test/dashboard.html?page=2");
        set_query_param(&mut u, "user", "Ann");
        assert_eq!(u.as_str(), "https://shop.test/dashboard.html?page=2&user=Ann");

        set_query_param(&mut u, "page", "3");
        assert_eq!(u.as_str(), "https://shop.test/dashboard.html?page=3&user=Ann");
    }
}
