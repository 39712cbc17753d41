//! # Microblog CLI
//!
//! Command-line front end for the microblog client.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --package microblog-cli --bin microblog -- login alice
//! cargo run --package microblog-cli --bin microblog -- feed 2
//! cargo run --package microblog-cli --bin microblog -- post "hello world"
//! ```
//!
//! The API URL, timeout and session file come from the environment (a `.env` file is
//! read first). The session persists between runs in the session file.

use anyhow::{bail, Context};
use chrono::Utc;
use client::services::feed::{load_feed, Feed, FeedQuery};
use client::services::social::FollowTracker;
use client::{ApiClient, ApiService, AppError};
use lib_utils::format_relative;
use shared::preview;
use std::io::{self, Write};
use std::process::ExitCode;

const USAGE: &str = "\
Usage: microblog <command> [args]

Commands:
  login <login>            Log in (password read from stdin)
  logout                   End the current session
  whoami                   Show the logged-in user
  feed [page]              Show posts with like and reply counts
  post <message>           Publish a post
  reply <post-id> <text>   Reply to a post
  like <post-id>           Like a post, or remove your like
  search-users <term>      Search users
  search-posts <term>      Search posts
  follow <login>           Follow a user
  unfollow <login>         Stop following a user";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let _log_guard = client::debug::init_logger();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        println!("{USAGE}");
        return Ok(ExitCode::SUCCESS);
    }

    let api = ApiClient::from_env().context("failed to set up the API client")?;

    // Return instead of exiting so the log guard flushes on drop.
    if let Err(err) = run(&api, &args).await {
        tracing::error!(error = %err, "Command failed");
        eprintln!("Error: {}", error_message(&err));
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

async fn run(api: &ApiClient, args: &[String]) -> anyhow::Result<()> {
    let command = args[0].as_str();
    let rest = &args[1..];

    match command {
        "login" => {
            let login = arg(rest, 0, "login")?;
            let password = prompt("Password: ")?;
            let session = api.login(login, &password).await?;
            println!("Logged in as {}.", session.user_login);
        }
        "logout" => {
            api.logout().await?;
            println!("Logged out.");
        }
        "whoami" => match api.session().user_login() {
            Some(login) => println!("{login}"),
            None => println!("Not logged in."),
        },
        "feed" => {
            let page = rest
                .first()
                .map(|p| p.parse::<u32>())
                .transpose()
                .context("page must be a number")?;
            let query = FeedQuery { search: None, page };
            show_feed(api, &query).await?;
        }
        "post" => {
            let post = api.create_post(&rest.join(" ")).await?;
            println!("Posted #{}.", post.id);
        }
        "reply" => {
            let post_id = post_id(rest)?;
            let reply = api.reply_to_post(post_id, &rest[1..].join(" ")).await?;
            println!("Replied #{} to post #{post_id}.", reply.id);
        }
        "like" => {
            let post_id = post_id(rest)?;
            let mut feed = Feed::default();
            let liked = feed.toggle_like(api, post_id).await?;
            println!(
                "{} post #{post_id} ({} likes).",
                if liked { "Liked" } else { "Unliked" },
                feed.like_count(post_id)
            );
        }
        "search-users" => {
            let users = api.search_users(&rest.join(" "), None).await?;
            if users.is_empty() {
                println!("No users found.");
            }
            for user in users {
                println!("@{:<20} {}", user.login, user.name);
            }
        }
        "search-posts" => {
            let posts = api.search_posts(&rest.join(" "), None).await?;
            if posts.is_empty() {
                println!("No posts found.");
            }
            for post in posts {
                println!("#{:<6} @{}: {}", post.id, post.user_login, preview(&post.message, 60));
            }
        }
        "follow" => {
            let login = arg(rest, 0, "login")?;
            let mut tracker = FollowTracker::new();
            if tracker.refresh(api, login).await?.is_following() {
                println!("Already following @{login}.");
            } else {
                tracker.follow(api, login).await?;
                println!("Now following @{login}.");
            }
        }
        "unfollow" => {
            let login = arg(rest, 0, "login")?;
            FollowTracker::new().unfollow(api, login).await?;
            println!("Unfollowed @{login}.");
        }
        other => bail!("unknown command '{other}'\n\n{USAGE}"),
    }

    Ok(())
}

async fn show_feed(api: &ApiClient, query: &FeedQuery) -> anyhow::Result<()> {
    let feed = load_feed(api, query, api.max_concurrent_requests()).await?;
    if feed.posts.is_empty() {
        println!("No posts.");
        return Ok(());
    }

    let now = Utc::now();
    let me = api.session().user_login();

    for post in &feed.posts {
        let when = post
            .created_at
            .map(|time| format_relative(time, now))
            .unwrap_or_default();
        let liked = me
            .as_deref()
            .is_some_and(|login| feed.liked_by(post.id, login).is_some());

        println!("#{} @{} {when}", post.id, post.user_login);
        println!("  {}", preview(&post.message, 120));
        println!(
            "  {} {} likes, {} replies",
            if liked { "♥" } else { "♡" },
            feed.like_count(post.id),
            feed.replies_for(post.id).len()
        );
    }

    for failure in &feed.failures {
        eprintln!(
            "warning: could not load {:?} for post #{}: {}",
            failure.kind, failure.post_id, failure.message
        );
    }

    Ok(())
}

/// Text shown for a failed command; field errors and validation messages as-is.
fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<AppError>() {
        Some(app_err) => app_err.user_message(),
        None => err.to_string(),
    }
}

fn arg<'a>(args: &'a [String], index: usize, name: &str) -> anyhow::Result<&'a str> {
    match args.get(index) {
        Some(value) => Ok(value.as_str()),
        None => bail!("missing <{name}>\n\n{USAGE}"),
    }
}

fn post_id(args: &[String]) -> anyhow::Result<i64> {
    arg(args, 0, "post-id")?
        .parse()
        .context("post id must be a number")
}

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
