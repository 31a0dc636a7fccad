//! Column names of the backing roster file.
//!
//! The spreadsheet is shared with the rest of the sales workflow and its
//! Spanish headers are the external interface: they must survive
//! load/save untouched, so every access goes through these constants.

/// Salesperson who owns the client row.
pub const VENDEDOR: &str = "VENDEDOR";

/// Client display name. This is the selection key for all per-client
/// operations and is NOT unique; operations keyed by it hit every
/// matching row.
pub const NOMBRE_TERCERO: &str = "NOMBRE TERCERO";

/// Free-form phone number.
pub const TELEFONO: &str = "TELEFONO";

pub const EMAIL: &str = "EMAIL";

pub const CIUDAD: &str = "CIUDAD";

pub const DIRECCION: &str = "DIRECCION";

/// Date of the last recorded follow-up.
pub const FECHA_GESTION: &str = "fecha gestion";

/// Planned date of the next follow-up.
pub const PROXIMA_GESTION: &str = "proxima gestion";

/// Text columns guaranteed to exist after load. Missing ones are created
/// with the empty string in every row.
pub const REQUIRED: [&str; 6] = [VENDEDOR, NOMBRE_TERCERO, TELEFONO, EMAIL, CIUDAD, DIRECCION];

/// Date-tracking columns guaranteed to exist after load. An empty cell in
/// either reads back as an absent date.
pub const DATE_COLUMNS: [&str; 2] = [FECHA_GESTION, PROXIMA_GESTION];
