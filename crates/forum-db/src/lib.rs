//! # forum-db
//!
//! Database layer implementing the member repository trait with PostgreSQL
//! via SQLx.
//!
//! ## Overview
//!
//! This crate provides the PostgreSQL implementation for the
//! `MemberRepository` trait defined in `forum-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - The repository implementation and schema migrations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forum_db::pool::{create_pool, DatabaseConfig};
//! use forum_db::repositories::PgMemberRepository;
//! use forum_core::traits::MemberRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     forum_db::MIGRATOR.run(&pool).await?;
//!     let members = PgMemberRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

/// Embedded schema migrations for the members table
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::PgMemberRepository;
