#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod error;
pub mod navigatum;
pub mod wizard;

pub use crate::error::{Error, Result};
pub use crate::navigatum::{extract_room_number, find_room_id, NavigatumClient};
pub use crate::wizard::{check_for_applicable_wizard, wizard_name, WIZARD_NAMES};
