//! Configuration constants for lexitree.

/// Number of synonym slots carried by every record.
///
/// The slot count is fixed: a record always stores exactly three synonym
/// strings, any of which may be empty. There is no uniqueness constraint
/// among them.
pub const SYNONYM_SLOTS: usize = 3;

/// Number of leading characters of a headword shown by the diagnostic
/// tree rendering.
///
/// The rendering is a shape-inspection aid; truncated key prefixes keep
/// the rows narrow enough to eyeball rotations.
pub const RENDER_PREFIX_LEN: usize = 3;
