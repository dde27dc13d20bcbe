//! Session commands.

use anyhow::{Context as _, Result};
use shop_auth::{propagate_user, AuthError, LoginForm, SignupForm, UserSession};
use url::Url;

use super::{LinksArgs, LoginArgs, LogoutArgs, SignupArgs};
use crate::context::Context;

/// Run the signup command.
pub fn signup(args: SignupArgs, ctx: &Context) -> Result<()> {
    let form = SignupForm {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        password: args.password,
        confirm_password: args.confirm_password,
    };
    let user = check(ctx, form.sign_up())?;
    start_session(ctx, &user, args.url.as_deref())?;
    ctx.output
        .success(&format!("Welcome to Organic Shop, {}!", user.first_name));
    Ok(())
}

/// Run the login command.
pub fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let user = check(ctx, LoginForm::new(args.email, args.password).log_in())?;
    start_session(ctx, &user, args.url.as_deref())?;
    ctx.output.success(&user.greeting());
    Ok(())
}

/// Run the logout command.
pub fn logout(args: LogoutArgs, ctx: &Context) -> Result<()> {
    let store = ctx.store()?;
    let previous = ctx
        .sessions(&store)
        .sign_out()
        .context("Failed to clear session")?;

    let mut url = args.url.as_deref().map(parse_url).transpose()?;
    let notification = match url.as_mut() {
        Some(url) => shop_auth::logout(url),
        None => shop_auth::logged_out(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "signed_out": previous.map(|user| user.first_name),
            "url": url.as_ref().map(Url::as_str),
        }));
        return Ok(());
    }

    if previous.is_none() {
        ctx.output.warn("No user was signed in");
    }
    ctx.output.notification(&notification);
    if let Some(url) = url {
        println!("{}", url);
    }
    Ok(())
}

/// Run the whoami command.
pub fn whoami(ctx: &Context) -> Result<()> {
    let store = ctx.store()?;
    let user = ctx.current_user(&store)?;

    if ctx.output.is_json() {
        ctx.output.json(&user);
        return Ok(());
    }

    match user {
        Some(user) => ctx.output.info(&user.greeting()),
        None => ctx.output.info("Not signed in"),
    }
    Ok(())
}

/// Run the links command.
pub fn links(args: LinksArgs, ctx: &Context) -> Result<()> {
    let page = parse_url(&args.page)?;
    if UserSession::from_url(&page).is_none() {
        ctx.output
            .debug("Page URL carries no user; links are left unchanged");
    }

    let rewritten = propagate_user(&args.hrefs, &page);
    if ctx.output.is_json() {
        ctx.output.json(&rewritten);
    } else {
        for href in rewritten {
            println!("{}", href);
        }
    }
    Ok(())
}

fn start_session(ctx: &Context, user: &UserSession, url: Option<&str>) -> Result<()> {
    let store = ctx.store()?;
    ctx.sessions(&store)
        .sign_in(user)
        .context("Failed to store session")?;

    let url = match url {
        Some(raw) => {
            let mut url = parse_url(raw)?;
            user.sign_in_url(&mut url);
            Some(url)
        }
        None => None,
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "user": user,
            "url": url.as_ref().map(Url::as_str),
        }));
    } else if let Some(url) = url {
        println!("{}", url);
    }
    Ok(())
}

/// Print field messages for a rejected form before failing.
fn check(ctx: &Context, result: Result<UserSession, AuthError>) -> Result<UserSession> {
    match result {
        Ok(user) => Ok(user),
        Err(e) => {
            if let Some(errors) = e.form_errors() {
                ctx.output.form_errors(errors);
            }
            Err(e.into())
        }
    }
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).with_context(|| format!("Invalid URL: {}", raw))
}
