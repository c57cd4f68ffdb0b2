//! VarInt encoding (LEB128) for compact code serialization.
//!
//! Variable-length encoding where small values use fewer bytes:
//! - 0-127: 1 byte
//! - 128-16383: 2 bytes
//! - 16384-2097151: 3 bytes
//! - etc.
//!
//! Vocabulary codes are dense and start at 1, so most subtitle vocabularies
//! fit in one or two bytes per token.

/// Write a variable-length integer to a Vec<u8>
pub fn write_varint_vec(buf: &mut Vec<u8>, mut value: u64) {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80; // Set continuation bit
        }
        buf.push(byte);
        if value == 0 {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_varint_encoding() {
        let mut buf = Vec::new();
        write_varint_vec(&mut buf, 1);
        assert_eq!(buf, vec![1]);

        buf.clear();
        write_varint_vec(&mut buf, 300);
        assert_eq!(buf, vec![0xAC, 0x02]);
    }

    #[test]
    fn test_varint_byte_lengths() {
        let len = |value| {
            let mut buf = Vec::new();
            write_varint_vec(&mut buf, value);
            buf.len()
        };
        assert_eq!(len(0), 1);
        assert_eq!(len(127), 1);
        assert_eq!(len(128), 2);
        assert_eq!(len(16384), 3);
    }

    #[test]
    fn test_varint_continuation_bits() {
        let mut buf = Vec::new();
        for value in [5, 200, 70000] {
            write_varint_vec(&mut buf, value);
        }
        // Only the last byte of each value has the high bit clear
        let terminators = buf.iter().filter(|&&b| b & 0x80 == 0).count();
        assert_eq!(terminators, 3);
        assert_eq!(buf.len(), 1 + 2 + 3);
    }
}
