//! Minimal TLV encoding (Appendix A) for command payload fields.
//!
//! Only the element types that cluster command payloads need are
//! implemented; full protocol TLV lives in the transport layer and is not
//! this crate's concern.

use crate::TlvAnyData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementSize {
    Byte1,
    Byte2,
    Byte4,
    Byte8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlvType {
    UnsignedInt(ElementSize),
    Boolean,
    Structure,
    EndOfContainer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagControl {
    Anonymous,
    ContextSpecific(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagLengthValue {
    Unsigned8(u8),
    Unsigned16(u16),
    Unsigned32(u32),
    Unsigned64(u64),
    Boolean(bool),
    None,
}

#[derive(Default)]
pub struct Encoder {
    buf: TlvAnyData,
}

impl Encoder {
    pub fn write(&mut self, r#type: TlvType, tag: TagControl, value: TagLengthValue) {
        let control = match r#type {
            TlvType::UnsignedInt(ElementSize::Byte1) => 0x04,
            TlvType::UnsignedInt(ElementSize::Byte2) => 0x05,
            TlvType::UnsignedInt(ElementSize::Byte4) => 0x06,
            TlvType::UnsignedInt(ElementSize::Byte8) => 0x07,
            TlvType::Boolean => match value {
                TagLengthValue::Boolean(true) => 0x09,
                _ => 0x08,
            },
            TlvType::Structure => 0x15,
            TlvType::EndOfContainer => 0x18,
        };
        match tag {
            TagControl::Anonymous => self.push(control),
            TagControl::ContextSpecific(t) => {
                self.push(control | 0x20);
                self.push(t);
            }
        }
        match value {
            TagLengthValue::Unsigned8(v) => self.extend(&v.to_le_bytes()),
            TagLengthValue::Unsigned16(v) => self.extend(&v.to_le_bytes()),
            TagLengthValue::Unsigned32(v) => self.extend(&v.to_le_bytes()),
            TagLengthValue::Unsigned64(v) => self.extend(&v.to_le_bytes()),
            // Booleans encode in the control byte, containers have no value
            TagLengthValue::Boolean(_) | TagLengthValue::None => {}
        }
    }

    /// Write a context-tagged unsigned 8-bit field.
    pub fn write_u8(&mut self, tag: u8, value: u8) {
        self.write(
            TlvType::UnsignedInt(ElementSize::Byte1),
            TagControl::ContextSpecific(tag),
            TagLengthValue::Unsigned8(value),
        );
    }

    /// Write a context-tagged unsigned 16-bit field.
    pub fn write_u16(&mut self, tag: u8, value: u16) {
        self.write(
            TlvType::UnsignedInt(ElementSize::Byte2),
            TagControl::ContextSpecific(tag),
            TagLengthValue::Unsigned16(value),
        );
    }

    pub fn start_structure(&mut self) {
        self.write(TlvType::Structure, TagControl::Anonymous, TagLengthValue::None);
    }

    pub fn end_container(&mut self) {
        self.write(
            TlvType::EndOfContainer,
            TagControl::Anonymous,
            TagLengthValue::None,
        );
    }

    pub fn inner(self) -> TlvAnyData {
        self.buf
    }

    fn push(&mut self, byte: u8) {
        // The buffer bound covers the largest command payload many times over
        let _ = self.buf.push(byte);
    }

    fn extend(&mut self, bytes: &[u8]) {
        let _ = self.buf.extend_from_slice(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_tagged_fields() {
        let mut encoder = Encoder::default();
        encoder.start_structure();
        encoder.write_u8(0, 0x2A);
        encoder.write_u16(1, 0x1234);
        encoder.end_container();
        assert_eq!(
            encoder.inner().as_slice(),
            &[0x15, 0x24, 0x00, 0x2A, 0x25, 0x01, 0x34, 0x12, 0x18]
        );
    }
}
