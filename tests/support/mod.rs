//! Shared fixtures for the integration tests.

/// Builds a minimal little-endian TIFF (the container CR2 files use) whose
/// Exif IFD carries a single `DateTimeDigitized` entry.
pub fn tiff_with_digitized_date(date: &str) -> Vec<u8> {
    assert_eq!(date.len(), 19, "EXIF dates are 19 characters plus NUL");

    let mut bytes = Vec::with_capacity(64);
    bytes.extend_from_slice(b"II");
    bytes.extend_from_slice(&42u16.to_le_bytes());
    bytes.extend_from_slice(&8u32.to_le_bytes());

    // IFD0 at 8: ExifIFDPointer -> 26
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&0x8769u16.to_le_bytes());
    bytes.extend_from_slice(&4u16.to_le_bytes());
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend_from_slice(&26u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());

    // Exif IFD at 26: DateTimeDigitized, ASCII[20] at 44
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&0x9004u16.to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&20u32.to_le_bytes());
    bytes.extend_from_slice(&44u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());

    bytes.extend_from_slice(date.as_bytes());
    bytes.push(0);
    bytes
}
