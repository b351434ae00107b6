use bitpack::{BitReader, BitWriter, ByteReader, ByteWriter, PackError};

const BYTE: u8 = 0b1111_0000;
const SHORT: u16 = 0b1111_0000_0000_1111;
const INT: u32 = 0b1010_1010_0101_0101_1111_0000_0000_1111;
const LONG: u64 =
    0b1111_1111_0000_0000_1100_1100_0011_0011_1010_1010_0101_0101_1111_0000_0000_1111;

#[test]
fn primitive_sequence_roundtrip() {
    let mut writer = ByteWriter::with_storage(vec![0; 15]);

    writer.write_u8(BYTE).unwrap(); // 1
    writer.write_u16(SHORT).unwrap(); // 2
    writer.write_u32(INT).unwrap(); // 4
    writer.write_u64(LONG).unwrap(); // 8

    assert_eq!(writer.count(), 15);

    let mut reader = ByteReader::new(writer.as_slice());
    assert_eq!(reader.read_u8().unwrap(), BYTE);
    assert_eq!(reader.read_u16().unwrap(), SHORT);
    assert_eq!(reader.read_u32().unwrap(), INT);
    assert_eq!(reader.read_u64().unwrap(), LONG);
}

#[test]
fn packed_bits_roundtrip_all_widths() {
    for bits in 1..=32u8 {
        let max = if bits == 32 {
            u32::MAX
        } else {
            (1u32 << bits) - 1
        };
        let samples = [0, 1, max / 2, max.saturating_sub(1), max];

        let mut writer = BitWriter::new(64);
        for value in samples {
            writer.write_bits(value, bits).unwrap();
        }
        writer.flush().unwrap();

        let mut reader = BitReader::new(writer.as_bytes().unwrap());
        for value in samples {
            assert_eq!(
                reader.read_bits(bits).unwrap(),
                value,
                "roundtrip failed for {bits}-bit value {value}"
            );
        }
    }
}

#[test]
fn packed_and_whole_width_mix_roundtrip() {
    let mut writer = BitWriter::new(64);
    writer.write_bool(true).unwrap();
    writer.write_u8(BYTE).unwrap();
    writer.write_bits(0b11_0011, 6).unwrap();
    writer.write_u16(SHORT).unwrap();
    writer.write_u32(INT).unwrap();
    writer.write_bits(7, 3).unwrap();
    writer.flush().unwrap();

    let mut reader = BitReader::new(writer.as_bytes().unwrap());
    assert!(reader.read_bool().unwrap());
    assert_eq!(reader.read_u8().unwrap(), BYTE);
    assert_eq!(reader.read_bits(6).unwrap(), 0b11_0011);
    assert_eq!(reader.read_u16().unwrap(), SHORT);
    assert_eq!(reader.read_u32().unwrap(), INT);
    assert_eq!(reader.read_bits(3).unwrap(), 7);
}

#[test]
fn flush_when_nothing_pending_is_a_noop() {
    let mut writer = BitWriter::new(16);
    writer.write_u16(SHORT).unwrap();
    let before = writer.as_bytes().unwrap().to_vec();

    writer.flush().unwrap();
    assert_eq!(writer.as_bytes().unwrap(), before.as_slice());
    writer.flush().unwrap();
    assert_eq!(writer.as_bytes().unwrap(), before.as_slice());
}

#[test]
fn backpatch_toggles_only_the_target_bit() {
    // 48 bits: the first 32 are flushed eagerly, the rest stay pending.
    let pattern: u64 = 0xB1A5_ED_C0DE;
    let write_all = |patch: Option<(usize, bool)>| -> Vec<u8> {
        let mut writer = BitWriter::new(16);
        writer.write_bits((pattern & 0xFFFF_FFFF) as u32, 32).unwrap();
        writer.write_bits((pattern >> 32) as u32, 16).unwrap();
        if let Some((position, value)) = patch {
            writer.set_at(position, value).unwrap();
        }
        writer.flush().unwrap();
        writer.as_bytes().unwrap().to_vec()
    };

    let unpatched = write_all(None);

    for position in [0usize, 9, 31, 32, 40, 47] {
        let original = pattern >> position & 1 == 1;
        let patched = write_all(Some((position, !original)));

        for bit in 0..48 {
            let expected = if bit == position {
                !original
            } else {
                pattern >> bit & 1 == 1
            };
            let actual = patched[bit / 8] >> (bit % 8) & 1 == 1;
            assert_eq!(actual, expected, "bit {bit} after patching {position}");
        }
        assert_ne!(patched, unpatched);
    }
}

#[test]
fn backpatch_after_flush_still_works() {
    let mut writer = BitWriter::new(16);
    writer.write_bits(0, 10).unwrap();
    writer.flush().unwrap();
    writer.set_at(9, true).unwrap();
    assert_eq!(writer.as_bytes().unwrap(), &[0x00, 0b0000_0010]);
}

#[test]
fn writer_reuse_across_passes() {
    let mut writer = BitWriter::new(32);

    writer.write_bits(0x5A, 8).unwrap();
    writer.flush().unwrap();
    assert_eq!(writer.as_bytes().unwrap(), &[0x5A]);

    writer.clear();
    writer.write_bits(0xA5, 8).unwrap();
    writer.flush().unwrap();
    assert_eq!(writer.as_bytes().unwrap(), &[0xA5]);
}

#[test]
fn reading_before_flush_is_rejected() {
    let mut writer = BitWriter::new(16);
    writer.write_bits(0b101, 3).unwrap();
    assert!(matches!(
        writer.as_bytes(),
        Err(PackError::UnflushedBits { pending_bits: 3 })
    ));
}

#[test]
fn stream_is_dense() {
    // 7 three-bit values pack into 21 bits, flushed into 3 bytes.
    let mut writer = BitWriter::new(16);
    for value in 0..7 {
        writer.write_bits(value, 3).unwrap();
    }
    assert_eq!(writer.bits_written(), 21);
    writer.flush().unwrap();
    assert_eq!(writer.as_bytes().unwrap().len(), 3);
}
