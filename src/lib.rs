//! A small blocking Rust client for the GitHub REST API v3 user endpoints.
//!
//! Only three resources are covered, all fetched with plain `GET` requests:
//! `/user`, `/users/{username}` and `/user/emails`. Requests are either
//! anonymous or carry HTTP Basic credentials.
//!
//! ## Quick start
//! - Build a [`Session`] (anonymous or username/password), or let
//!   [`Client::from_env`] pick credentials up from `GITHUB_USERNAME` /
//!   `GITHUB_PASSWORD` or a `.githubrc` file.
//! - Call [`Client::get_user`] and, when authenticated, [`Client::get_emails`].
//!
//! ```no_run
//! use gogithub::{Client, Session};
//!
//! fn main() -> Result<(), gogithub::Error> {
//!     let client = Client::new(Session::basic("octocat", "password")?)?;
//!
//!     let me = client.get_user("")?;
//!     println!("{}", me);
//!
//!     let emails = client.get_emails()?;
//!     println!("{}", emails);
//!     Ok(())
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
mod config;
mod error;
mod models;
mod session;
mod util;

pub use client::Client;
pub use config::Credentials;
pub use error::{Error, ErrorKind, NetworkError, Result};
pub use models::{Emails, Plan, User};
pub use session::Session;
