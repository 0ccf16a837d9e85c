//! Entity to model mappers
//!
//! Conversions between domain entities (forum-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `MemberInsert`/`MemberFlush` structs: Prepare data for database operations

mod member;

pub use member::{MemberFlush, MemberInsert};
