#![no_main]

use bitpack::{BitReader, BitWriter};
use delta::{Limit, ReadDelta, WriteDelta};
use libfuzzer_sys::fuzz_target;

const LIMIT: Limit<i16> = Limit::new(-10_000, 10_000);
const DIFF_LIMIT: Limit<i16> = Limit::new(-64, 64);

fn clamp(raw: i16) -> i16 {
    raw.clamp(LIMIT.min(), LIMIT.max())
}

fuzz_target!(|data: &[u8]| {
    // Interpret the input as (baseline, updated) pairs and require every
    // policy to decode back to the encoded value.
    let pairs: Vec<(i16, i16)> = data
        .chunks_exact(4)
        .take(256)
        .map(|chunk| {
            let baseline = clamp(i16::from_le_bytes([chunk[0], chunk[1]]));
            let updated = clamp(i16::from_le_bytes([chunk[2], chunk[3]]));
            (baseline, updated)
        })
        .collect();

    let mut writer = BitWriter::new(4096);
    for (baseline, updated) in &pairs {
        writer
            .write_diff_if_changed(*baseline, *updated, &LIMIT, &DIFF_LIMIT)
            .unwrap();
        writer
            .write_limited_if_changed(*baseline, *updated, &LIMIT)
            .unwrap();
        writer.write_value_if_changed(*baseline, *updated).unwrap();
    }
    writer.flush().unwrap();

    let mut reader = BitReader::new(writer.as_bytes().unwrap());
    for (baseline, updated) in &pairs {
        assert_eq!(
            reader
                .read_diff_if_changed(*baseline, &LIMIT, &DIFF_LIMIT)
                .unwrap(),
            *updated
        );
        assert_eq!(
            reader.read_limited_if_changed(*baseline, &LIMIT).unwrap(),
            *updated
        );
        assert_eq!(reader.read_value_if_changed(*baseline).unwrap(), *updated);
    }
});
