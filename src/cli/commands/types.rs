//! List supported document types

use docval::output::{OutputMode, TypeList};

/// Print every supported document type
pub fn types(mode: OutputMode) {
    TypeList::supported().render(mode);
}
