//! Binary file format of the stack.
//!
//! * 8 bytes: number of elements `N` as a little endian `u64`,
//! * `N` elements from the top to the bottom of the stack, each taking
//!   [`FixedWidth::WIDTH`] bytes in little endian.
//!
//! Bytes following the last element are ignored.

use crate::ContainerError;
use std::io::{ErrorKind, Read, Write};

/// Number of bytes of the element count header.
pub const HEADER_WIDTH: usize = core::mem::size_of::<u64>();

/// An element type with a fixed width binary representation.
///
/// Only fixed width elements can be persisted; text is not.
pub trait FixedWidth: Sized {
    /// Number of bytes of an encoded element.
    const WIDTH: usize;

    /// Appends the encoded element to `bytes`.
    fn encode(&self, bytes: &mut Vec<u8>);

    /// Decodes an element from exactly `WIDTH` bytes.
    fn decode(bytes: &[u8]) -> Result<Self, ContainerError>;
}

fn array<const N: usize>(bytes: &[u8]) -> Result<[u8; N], ContainerError> {
    bytes
        .try_into()
        .map_err(|_| ContainerError::IoFailure(ErrorKind::UnexpectedEof))
}

impl FixedWidth for i32 {
    const WIDTH: usize = 4;

    fn encode(&self, bytes: &mut Vec<u8>) {
        bytes.extend_from_slice(&self.to_le_bytes());
    }

    fn decode(bytes: &[u8]) -> Result<Self, ContainerError> {
        array(bytes).map(i32::from_le_bytes)
    }
}

impl FixedWidth for f32 {
    const WIDTH: usize = 4;

    fn encode(&self, bytes: &mut Vec<u8>) {
        bytes.extend_from_slice(&self.to_bits().to_le_bytes());
    }

    fn decode(bytes: &[u8]) -> Result<Self, ContainerError> {
        array(bytes).map(|x| f32::from_bits(u32::from_le_bytes(x)))
    }
}

impl FixedWidth for char {
    const WIDTH: usize = 4;

    fn encode(&self, bytes: &mut Vec<u8>) {
        bytes.extend_from_slice(&u32::from(*self).to_le_bytes());
    }

    fn decode(bytes: &[u8]) -> Result<Self, ContainerError> {
        let code = u32::from_le_bytes(array(bytes)?);
        char::from_u32(code).ok_or(ContainerError::IoFailure(ErrorKind::InvalidData))
    }
}

/// Writes the `elements`, given from top to bottom, in the stack file format.
pub fn write_elements<'a, T, W, I>(writer: &mut W, elements: I) -> Result<(), ContainerError>
where
    T: FixedWidth + 'a,
    W: Write,
    I: ExactSizeIterator<Item = &'a T>,
{
    let mut bytes = Vec::with_capacity(HEADER_WIDTH + elements.len() * T::WIDTH);
    bytes.extend_from_slice(&(elements.len() as u64).to_le_bytes());
    for x in elements {
        x.encode(&mut bytes);
    }
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Reads all elements of a stack file, from top to bottom.
///
/// Nothing is returned unless the entire payload could be decoded.
pub fn read_elements<T, R>(reader: &mut R) -> Result<Vec<T>, ContainerError>
where
    T: FixedWidth,
    R: Read,
{
    let mut header = [0u8; HEADER_WIDTH];
    reader.read_exact(&mut header)?;
    let len = u64::from_le_bytes(header);
    let len = usize::try_from(len).map_err(|_| ContainerError::IoFailure(ErrorKind::InvalidData))?;

    let num_bytes = len
        .checked_mul(T::WIDTH)
        .ok_or(ContainerError::IoFailure(ErrorKind::InvalidData))?;
    let mut payload = Vec::new();
    reader
        .take(num_bytes as u64)
        .read_to_end(&mut payload)?;
    if payload.len() < num_bytes {
        return Err(ContainerError::IoFailure(ErrorKind::UnexpectedEof));
    }

    payload.chunks_exact(T::WIDTH).map(T::decode).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_little_endian_with_count_header() {
        let mut bytes = vec![];
        write_elements(&mut bytes, [1i32, -2].iter()).unwrap();

        assert_eq!(
            bytes,
            vec![2, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0xfe, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn truncated_payload_is_rejected() {
        let mut bytes = vec![];
        write_elements(&mut bytes, ['a', 'b', 'c'].iter()).unwrap();
        bytes.truncate(bytes.len() - 1);

        let result = read_elements::<char, _>(&mut bytes.as_slice());
        assert_eq!(result, Err(ContainerError::IoFailure(ErrorKind::UnexpectedEof)));
    }

    #[test]
    fn missing_header_is_rejected() {
        let bytes = [1u8, 0, 0];
        let result = read_elements::<i32, _>(&mut bytes.as_slice());
        assert_eq!(result, Err(ContainerError::IoFailure(ErrorKind::UnexpectedEof)));
    }

    #[test]
    fn invalid_char_is_rejected() {
        let mut bytes = 1u64.to_le_bytes().to_vec();
        bytes.extend_from_slice(&0xD800u32.to_le_bytes());

        let result = read_elements::<char, _>(&mut bytes.as_slice());
        assert_eq!(result, Err(ContainerError::IoFailure(ErrorKind::InvalidData)));
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut bytes = vec![];
        write_elements(&mut bytes, [0.5f32].iter()).unwrap();
        bytes.extend_from_slice(&[9, 9]);

        let result = read_elements::<f32, _>(&mut bytes.as_slice()).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].to_bits(), 0.5f32.to_bits());
    }
}
