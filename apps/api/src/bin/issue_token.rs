//! Mint a bearer token for local development.
//!
//! Usage:
//!     cargo run --bin issue_token -- <username> [user-uuid]
//!
//! The token is signed with `JWT_SECRET` (read from the environment or
//! `.env`) and is valid for seven days. Reusing the same uuid keeps the
//! same identity across tokens.

use anyhow::{Context, bail};
use api::{domain::user::entity::User, presentation::http::middleware::user::issue_user_token};
use uuid::Uuid;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let Some(username) = args.next().map(|s| s.trim().to_string()) else {
        bail!("usage: issue_token <username> [user-uuid]");
    };
    if username.is_empty() {
        bail!("username cannot be empty");
    }

    let pk = match args.next() {
        Some(raw) => Uuid::parse_str(&raw).with_context(|| format!("invalid uuid: {}", raw))?,
        None => Uuid::new_v4(),
    };

    let secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
    let user = User { pk, username };
    let token = issue_user_token(&secret, &user, chrono::Duration::days(7))?;

    println!("user:  {} ({})", user.username, user.pk);
    println!("token: {}", token);
    Ok(())
}
