#![forbid(unsafe_code)]

//! Validated records: typed field values, declared schemas, and a record
//! store that validates on construction and on every field write.
//!
//! This crate is the data layer underneath the LiveView view models. A
//! [`Schema`] declares the named, typed fields an object carries; a
//! [`Record`] holds values conforming to that schema and rejects any write
//! that would break conformance. The view layer binds to the [`Fields`]
//! capability rather than to `Record` directly, so applications may also
//! implement field access by hand on their own types.
//!
//! # Invariants
//!
//! 1. A `Record`'s stored values always conform to its schema.
//! 2. A failed `set` leaves the stored value and the version untouched;
//!    the error propagates to the caller.
//! 3. Field iteration order is schema declaration order.
//! 4. The version counter increments by exactly 1 per successful `set`.

pub mod record;
pub mod schema;
pub mod value;

pub use record::{Fields, Record, ValidationError};
pub use schema::{FieldSpec, Schema, SchemaBuilder};
pub use value::{FieldType, FieldValue};
