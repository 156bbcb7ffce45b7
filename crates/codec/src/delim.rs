//! Length-delimited buffers: a [`crate::varint`] uvarint length followed by
//! that many raw bytes.

use crate::errors::CodecError;
use crate::item::{Item, take};
use crate::varint::{put_uvarint, read_uvarint, uvarint_len};

fn delim_len(payload: usize) -> usize {
    uvarint_len(payload as u64) + payload
}

fn put_delim(payload: &[u8], buf: &mut [u8]) {
    let n = put_uvarint(payload.len() as u64, buf);
    buf[n..n + payload.len()].copy_from_slice(payload);
}

/// Reads the length tag and returns the payload slice along with the total
/// bytes consumed.
fn read_delim(buf: &[u8]) -> Result<(&[u8], usize), CodecError> {
    let (len, n) = read_uvarint(buf)?;
    let len = usize::try_from(len).map_err(|_| CodecError::OverrunInput)?;
    let payload = take(&buf[n..], len)?;
    Ok((payload, n + len))
}

/// Byte vec with a uvarint length tag.
#[derive(Debug)]
pub struct LengthDelimBytes<'a>(pub &'a mut Vec<u8>);

impl Item for LengthDelimBytes<'_> {
    fn size(&self) -> usize {
        delim_len(self.0.len())
    }

    fn encode(&self, buf: &mut [u8]) {
        put_delim(self.0.as_slice(), buf);
    }

    fn decode(&mut self, buf: &[u8]) -> Result<usize, CodecError> {
        let (payload, n) = read_delim(buf)?;
        self.0.clear();
        self.0.extend_from_slice(payload);
        Ok(n)
    }
}

/// UTF-8 string with a uvarint length tag.
#[derive(Debug)]
pub struct LengthDelimString<'a>(pub &'a mut String);

impl Item for LengthDelimString<'_> {
    fn size(&self) -> usize {
        delim_len(self.0.len())
    }

    fn encode(&self, buf: &mut [u8]) {
        put_delim(self.0.as_bytes(), buf);
    }

    fn decode(&mut self, buf: &[u8]) -> Result<usize, CodecError> {
        let (payload, n) = read_delim(buf)?;
        let s = std::str::from_utf8(payload).map_err(|_| CodecError::Malformed("string"))?;
        self.0.clear();
        self.0.push_str(s);
        Ok(n)
    }
}
