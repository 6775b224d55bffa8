//! Conversion between settings records and JSON documents.
//!
//! Three pieces cooperate here:
//! - [`read`]: merge-if-present field readers. A destination is only written when the
//!   document holds the key with a value of the expected shape.
//! - [`write`]: default-suppressing writers. A field is only emitted when it differs
//!   from its baseline.
//! - [`prune`]: removes empty containers left behind by suppression.
//!
//! Every settings record implements [`Record`], and composite records call the codec
//! of the record they embed before handling their own fields.

pub mod prune;
pub mod read;
pub mod write;

pub use prune::prune;
pub use read::{
    FromValue, read, read_array, read_map, read_record, read_records, read_records_lenient,
};
pub use write::{encode_record, put_map, put_records, write, write_record, write_records};

use crate::fonts::FontCatalog;
use serde_json::{Map, Value};

/// A JSON object.
pub type Object = Map<String, Value>;

/// A settings record with a JSON codec.
pub trait Record: Default + PartialEq {
    /// Merge the fields present in `obj` into `self`.
    ///
    /// Unknown keys are ignored and missing or mistyped keys leave the field as it was.
    fn decode(&mut self, obj: &Object, fonts: &mut FontCatalog);

    /// Write every field that differs from `baseline` into `out`.
    fn encode(&self, out: &mut Object, baseline: &Self);
}
