//! The signed-in identity carried in page URLs.
//!
//! A user is "signed in" for a page when its URL carries a `user` query
//! parameter. Navigation keeps the identity alive by appending that
//! parameter to every same-origin link on the page.

use serde::{Deserialize, Serialize};
use shop_commerce::params::{query_param, remove_query_params, set_query_param};
use shop_commerce::Notification;
use tracing::{debug, error};
use url::Url;

/// Query parameter naming the signed-in user.
pub const USER_PARAM: &str = "user";

/// A signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub first_name: String,
}

impl UserSession {
    pub fn new(first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
        }
    }

    /// The user named by `url`, if any.
    pub fn from_url(url: &Url) -> Option<Self> {
        query_param(url, USER_PARAM)
            .filter(|name| !name.trim().is_empty())
            .map(Self::new)
    }

    /// Set the `user` parameter on `url`.
    pub fn sign_in_url(&self, url: &mut Url) {
        set_query_param(url, USER_PARAM, &self.first_name);
    }

    /// Greeting shown in the navbar.
    pub fn greeting(&self) -> String {
        format!("Hi, {}", self.first_name)
    }
}

/// Drop the `user` parameter from `url`.
pub fn logout(url: &mut Url) -> Notification {
    remove_query_params(url, &[USER_PARAM]);
    debug!("Logged out");
    logged_out()
}

/// Shown after signing out.
pub fn logged_out() -> Notification {
    Notification::info("Logged Out", "You have been logged out.")
}

/// Carry the page's `user` parameter onto every same-origin link.
///
/// Returns `hrefs` rewritten as absolute URLs. Fragment-only links,
/// cross-origin links and unparsable links come back unchanged, as does
/// every link when the page has no signed-in user.
pub fn propagate_user<I, H>(hrefs: I, page_url: &Url) -> Vec<String>
where
    I: IntoIterator<Item = H>,
    H: AsRef<str>,
{
    let user = UserSession::from_url(page_url);
    hrefs
        .into_iter()
        .map(|href| {
            let href = href.as_ref();
            match &user {
                Some(user) => with_user(href, page_url, &user.first_name)
                    .unwrap_or_else(|| href.to_string()),
                None => href.to_string(),
            }
        })
        .collect()
}

fn with_user(href: &str, page_url: &Url, user: &str) -> Option<String> {
    if href.starts_with('#') {
        return None;
    }
    let mut target = match page_url.join(href) {
        Ok(url) => url,
        Err(e) => {
            error!(href, error = %e, "Invalid URL");
            return None;
        }
    };
    if target.origin() != page_url.origin() {
        return None;
    }
    set_query_param(&mut target, USER_PARAM, user);
    Some(target.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::NotificationKind;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_from_url() {
        let page = url("https://shop.test/dashboard.html?user=Ann");
        assert_eq!(UserSession::from_url(&page), Some(UserSession::new("Ann")));
        assert_eq!(UserSession::from_url(&url("https://shop.test/?user=")), None);
        assert_eq!(UserSession::from_url(&url("https://shop.test/")), None);
    }

    #[test]
    fn test_sign_in_replaces_existing_user() {
        let mut page = url("https://shop.test/cart.html?user=Old&id=3");
        UserSession::new("Ann").sign_in_url(&mut page);
        assert_eq!(page.query(), Some("user=Ann&id=3"));
    }

    #[test]
    fn test_logout() {
        let mut page = url("https://shop.test/cart.html?user=Ann");
        let notification = logout(&mut page);
        assert_eq!(page.query(), None);
        assert_eq!(notification.kind, NotificationKind::Info);
        assert_eq!(notification.title, "Logged Out");
    }

    #[test]
    fn test_propagate_user() {
        let page = url("https://shop.test/shop/dashboard.html?user=Ann");
        let links = propagate_user(
            [
                "cart.html",
                "#top",
                "https://other.test/about.html",
                "/shop/product-view.html?id=4",
            ],
            &page,
        );
        assert_eq!(
            links,
            vec![
                "https://shop.test/shop/cart.html?user=Ann".to_string(),
                "#top".to_string(),
                "https://other.test/about.html".to_string(),
                "https://shop.test/shop/product-view.html?id=4&user=Ann".to_string(),
            ]
        );
    }

    #[test]
    fn test_propagate_without_user_is_noop() {
        let page = url("https://shop.test/index.html");
        assert_eq!(propagate_user(["cart.html"], &page), vec!["cart.html".to_string()]);
    }

    #[test]
    fn test_propagate_with_blank_user_is_noop() {
        for page in ["https://shop.test/index.html?user=", "https://shop.test/index.html?user=%20"] {
            let links = propagate_user(["cart.html", "/shop/product-view.html?id=4"], &url(page));
            assert_eq!(
                links,
                vec!["cart.html".to_string(), "/shop/product-view.html?id=4".to_string()]
            );
        }
    }

    #[test]
    fn test_propagate_rejects_other_port() {
        let page = url("http://localhost:8080/index.html?user=Ann");
        let links = propagate_user(["http://localhost:9090/cart.html"], &page);
        assert_eq!(links, vec!["http://localhost:9090/cart.html".to_string()]);
    }

    #[test]
    fn test_greeting() {
        assert_eq!(UserSession::new("Ann").greeting(), "Hi, Ann");
    }
}
