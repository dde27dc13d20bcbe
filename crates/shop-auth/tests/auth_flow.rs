//! Signup, navigation and logout across page loads.

use shop_auth::{logout, propagate_user, LoginForm, SessionStore, SignupForm, UserSession};
use shop_cache::FileStore;
use url::Url;

#[test]
fn signup_then_navigate_then_logout() {
    let form = SignupForm {
        first_name: "Maria".to_string(),
        last_name: "Clara".to_string(),
        email: "maria@shop.ph".to_string(),
        password: "Secret1!".to_string(),
        confirm_password: "Secret1!".to_string(),
    };
    let user = form.sign_up().expect("valid signup");

    let mut page = Url::parse("https://shop.test/index.html").unwrap();
    user.sign_in_url(&mut page);
    assert_eq!(UserSession::from_url(&page), Some(user.clone()));

    let links = propagate_user(["dashboard.html?category=tea"], &page);
    let next = Url::parse(&links[0]).unwrap();
    assert_eq!(UserSession::from_url(&next), Some(user));

    let mut next = next;
    logout(&mut next);
    assert_eq!(UserSession::from_url(&next), None);
    assert_eq!(next.query(), Some("category=tea"));
}

#[test]
fn session_survives_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let user = LoginForm::new("ann@shop.ph", "Secret1!").log_in().unwrap();
    SessionStore::new(FileStore::open(&path).unwrap(), "organic_shop")
        .sign_in(&user)
        .unwrap();

    let reopened = SessionStore::new(FileStore::open(&path).unwrap(), "organic_shop");
    assert_eq!(reopened.current().unwrap(), Some(UserSession::new("ann")));

    reopened.sign_out().unwrap();
    let again = SessionStore::new(FileStore::open(&path).unwrap(), "organic_shop");
    assert_eq!(again.current().unwrap(), None);
}
