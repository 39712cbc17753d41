//! # API Client Module
//!
//! HTTP facade over the microblog REST API. One method per remote operation,
//! session token injected per request, failures logged and returned unchanged.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct, request/response plumbing, ApiService impl
//! ├── auth.rs     - Register, login, logout
//! ├── users.rs    - Update/delete user, list/search/get users
//! ├── follow.rs   - Follow, unfollow, followers, follow status
//! └── posts.rs    - Posts, replies, likes
//! ```
//!
//! ## Routes
//!
//! ```text
//! POST   /users                            register
//! POST   /sessions                         login
//! DELETE /sessions/:id                     logout
//! PATCH  /users/:id                        update user
//! DELETE /users/:id                        delete user
//! GET    /users?search=&page=              list / search users
//! GET    /users/:login                     get user
//! POST   /users/:login/followers           follow
//! DELETE /users/:login/followers/:edge     unfollow
//! GET    /users/:login/followers           list followers
//! GET    /posts?search=&page=              list / search posts
//! POST   /posts                            create post
//! DELETE /posts/:id                        delete post
//! POST   /posts/:id/replies                reply
//! GET    /posts/:id/replies                list replies
//! POST   /posts/:id/likes                  like
//! GET    /posts/:id/likes                  list likes
//! DELETE /posts/:id/likes/:like            unlike
//! ```

pub mod auth;
pub mod client;
pub mod follow;
pub mod posts;
pub mod users;

pub use client::ApiClient;
pub use follow::FollowStatus;
