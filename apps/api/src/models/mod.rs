// Row structs and domain enums shared across the engines. Enum-like
// columns are stored as lowercase text and parsed at the domain edge,
// with unknown values falling back to defaults instead of erroring.

pub mod event;
pub mod feedback;
pub mod lead;
pub mod preferences;
pub mod recommendation;
