//! Page snapshot codec
//!
//! Checksummed binary encoding of a page, for an outer layer that spills
//! pages to disk and reloads them.
//!
//! ## Frame Format
//! ```text
//! ┌─────────┬─────────┬──────────────────┐
//! │ CRC (4) │ Len (4) │ bincode payload  │
//! └─────────┴─────────┴──────────────────┘
//! ```
//!
//! CRC32 covers the payload bytes only. Both header fields are big-endian.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

use super::{Record, RecordPage};

/// Header size: 4 bytes CRC + 4 bytes payload length
pub const HEADER_SIZE: usize = 8;

/// What a snapshot carries: the fixed capacity plus the records in slot order
#[derive(Serialize, Deserialize)]
struct SnapshotPayload {
    capacity: usize,
    records: Vec<Record>,
}

/// Encode a page into a checksummed frame
pub fn encode_page(page: &RecordPage) -> Result<Vec<u8>> {
    let payload = SnapshotPayload {
        capacity: page.capacity(),
        records: page.read_all(),
    };

    let body = bincode::serialize(&payload)
        .map_err(|e| StoreError::Serialization(format!("page snapshot encode: {e}")))?;
    let crc = crc32fast::hash(&body);

    let mut frame = Vec::with_capacity(HEADER_SIZE + body.len());
    frame.extend_from_slice(&crc.to_be_bytes());
    frame.extend_from_slice(&(body.len() as u32).to_be_bytes());
    frame.extend_from_slice(&body);

    tracing::debug!(records = payload.records.len(), bytes = frame.len(), "encoded page snapshot");
    Ok(frame)
}

/// Decode a page from a checksummed frame
///
/// Validates the frame structure and CRC before touching the payload, so a
/// truncated or bit-flipped snapshot surfaces as `SnapshotCorruption` rather
/// than a garbage page.
pub fn decode_page(bytes: &[u8]) -> Result<RecordPage> {
    if bytes.len() < HEADER_SIZE {
        return Err(StoreError::SnapshotCorruption(format!(
            "incomplete header: expected {} bytes, got {}",
            HEADER_SIZE,
            bytes.len()
        )));
    }

    let expected_crc = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let body_len = u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize;

    let total_len = HEADER_SIZE + body_len;
    if bytes.len() < total_len {
        return Err(StoreError::SnapshotCorruption(format!(
            "incomplete payload: expected {} bytes, got {}",
            total_len,
            bytes.len()
        )));
    }

    let body = &bytes[HEADER_SIZE..total_len];
    let actual_crc = crc32fast::hash(body);
    if actual_crc != expected_crc {
        return Err(StoreError::SnapshotCorruption(format!(
            "CRC mismatch: expected 0x{expected_crc:08x}, got 0x{actual_crc:08x}"
        )));
    }

    let payload: SnapshotPayload = bincode::deserialize(body)
        .map_err(|e| StoreError::Serialization(format!("page snapshot decode: {e}")))?;

    if payload.records.len() > payload.capacity {
        return Err(StoreError::SnapshotCorruption(format!(
            "snapshot holds {} records but declares capacity {}",
            payload.records.len(),
            payload.capacity
        )));
    }

    Ok(RecordPage::from_parts(payload.capacity, payload.records))
}
