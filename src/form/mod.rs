/// Registration form model
///
/// The fixed field list that drives the entry tabs, and the in-progress
/// values the entry controller submits.

pub mod fields;
pub mod state;

pub use fields::{FieldDescriptor, FieldKind, MemberField, Tab, DATE_HINT};
pub use state::{FieldEntry, FormState, TextStyle};
