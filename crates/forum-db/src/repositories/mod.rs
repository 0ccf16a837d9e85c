//! Repository implementations
//!
//! PostgreSQL implementation of the member repository trait defined in
//! forum-core.

mod error;
mod member;

pub use member::PgMemberRepository;
