//! Static catalog of known wamd subchunk tags.
//!
//! The tag set is open: hardware newer than this crate may emit tags that
//! are not listed here, and those must decode as raw byte blobs rather
//! than errors. Lookups therefore default to [`TagKind::Raw`] instead of
//! rejecting unlisted values.

/// Semantic type hint for a catalog tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Fixed 2-byte little-endian integer (version, time expansion factor)
    U16,
    /// ASCII/UTF-8 text, with or without a single trailing NUL
    Text,
    /// Embedded RIFF/WAVE blob (voice note); callers may re-run the chunk
    /// reader over it if they want the inner file parsed
    Wav,
    /// Opaque bytes with no documented layout
    Raw,
    /// Alignment filler, excluded from semantic lookups
    Padding,
}

pub const METATAG_VERSION: u16 = 0x0000;
pub const METATAG_DEV_MODEL: u16 = 0x0001;
pub const METATAG_DEV_SERIAL_NUM: u16 = 0x0002;
pub const METATAG_SW_VERSION: u16 = 0x0003;
pub const METATAG_DEV_NAME: u16 = 0x0004;
pub const METATAG_FILE_START_TIME: u16 = 0x0005;
pub const METATAG_GPS_FIRST: u16 = 0x0006;
pub const METATAG_GPS_TRACK: u16 = 0x0007;
pub const METATAG_SOFTWARE: u16 = 0x0008;
pub const METATAG_LICENSE_ID: u16 = 0x0009;
pub const METATAG_USER_NOTES: u16 = 0x000A;
pub const METATAG_AUTO_ID: u16 = 0x000B;
pub const METATAG_MANUAL_ID: u16 = 0x000C;
pub const METATAG_VOICE_NOTE: u16 = 0x000D;
pub const METATAG_AUTO_ID_STATS: u16 = 0x000E;
pub const METATAG_TIME_EXPANSION: u16 = 0x000F;
pub const METATAG_DEV_PARAMS: u16 = 0x0010;
pub const METATAG_DEV_RUNSTATE: u16 = 0x0011;
pub const METATAG_MIC_TYPE: u16 = 0x0012;
pub const METATAG_MIC_SENSITIVITY: u16 = 0x0013;
pub const METATAG_POS_LAST: u16 = 0x0014;
pub const METATAG_TEMP_INT: u16 = 0x0015;
pub const METATAG_TEMP_EXT: u16 = 0x0016;
pub const METATAG_HUMIDITY: u16 = 0x0017;
pub const METATAG_LIGHT: u16 = 0x0018;
pub const METATAG_PADDING: u16 = 0xFFFF;

/// Known tag catalog, following the wa_meta.h definitions shipped with
/// Wildlife Acoustics firmware. GPS coordinates, temperatures, humidity and
/// light readings are stored by the hardware as formatted text, so they are
/// hinted `Text` here and left to higher-level tools to interpret.
pub const TAG_CATALOG: [(u16, &str, TagKind); 26] = [
    (METATAG_VERSION, "METATAG_VERSION", TagKind::U16),
    (METATAG_DEV_MODEL, "METATAG_DEV_MODEL", TagKind::Text),
    (METATAG_DEV_SERIAL_NUM, "METATAG_DEV_SERIAL_NUM", TagKind::Text),
    (METATAG_SW_VERSION, "METATAG_SW_VERSION", TagKind::Text),
    (METATAG_DEV_NAME, "METATAG_DEV_NAME", TagKind::Text),
    (METATAG_FILE_START_TIME, "METATAG_FILE_START_TIME", TagKind::Text),
    (METATAG_GPS_FIRST, "METATAG_GPS_FIRST", TagKind::Text),
    (METATAG_GPS_TRACK, "METATAG_GPS_TRACK", TagKind::Raw),
    (METATAG_SOFTWARE, "METATAG_SOFTWARE", TagKind::Text),
    (METATAG_LICENSE_ID, "METATAG_LICENSE_ID", TagKind::Text),
    (METATAG_USER_NOTES, "METATAG_USER_NOTES", TagKind::Text),
    (METATAG_AUTO_ID, "METATAG_AUTO_ID", TagKind::Text),
    (METATAG_MANUAL_ID, "METATAG_MANUAL_ID", TagKind::Text),
    (METATAG_VOICE_NOTE, "METATAG_VOICE_NOTE", TagKind::Wav),
    (METATAG_AUTO_ID_STATS, "METATAG_AUTO_ID_STATS", TagKind::Text),
    (METATAG_TIME_EXPANSION, "METATAG_TIME_EXPANSION", TagKind::U16),
    (METATAG_DEV_PARAMS, "METATAG_DEV_PARAMS", TagKind::Raw),
    (METATAG_DEV_RUNSTATE, "METATAG_DEV_RUNSTATE", TagKind::Raw),
    (METATAG_MIC_TYPE, "METATAG_MIC_TYPE", TagKind::Text),
    (METATAG_MIC_SENSITIVITY, "METATAG_MIC_SENSITIVITY", TagKind::Text),
    (METATAG_POS_LAST, "METATAG_POS_LAST", TagKind::Text),
    (METATAG_TEMP_INT, "METATAG_TEMP_INT", TagKind::Text),
    (METATAG_TEMP_EXT, "METATAG_TEMP_EXT", TagKind::Text),
    (METATAG_HUMIDITY, "METATAG_HUMIDITY", TagKind::Text),
    (METATAG_LIGHT, "METATAG_LIGHT", TagKind::Text),
    (METATAG_PADDING, "METATAG_PADDING", TagKind::Padding),
];

/// Look up the semantic type hint for a tag. Unknown tags are `Raw`.
pub fn tag_kind(tag: u16) -> TagKind {
    TAG_CATALOG
        .iter()
        .find(|(t, _, _)| *t == tag)
        .map(|(_, _, kind)| *kind)
        .unwrap_or(TagKind::Raw)
}

/// Look up the METATAG_* name for a tag, if it is in the catalog.
pub fn tag_name(tag: u16) -> Option<&'static str> {
    TAG_CATALOG
        .iter()
        .find(|(t, _, _)| *t == tag)
        .map(|(_, name, _)| *name)
}
