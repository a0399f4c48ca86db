//! Binary persistence of employee records.
//!
//! A data file is a plain concatenation of fixed-order records with no
//! header, footer or record length prefix. Decoding therefore depends on
//! reading exactly the bytes each field occupies; see [`RecordLayout`] for
//! the two supported layouts.

mod layout;
mod record;
mod store;

pub use layout::RecordLayout;
pub use record::{decode_employee, encode_employee, encode_record};
pub use store::{EmployeeReader, EmployeeStore};
