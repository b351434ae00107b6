#![no_main]

use bitpack::BitReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = BitReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 6;
        idx += 1;

        match op {
            0 => {
                let _ = reader.read_bool();
            }
            1 => {
                let bits = data[idx.saturating_sub(1)] % 33;
                let _ = reader.read_bits(bits);
            }
            2 => {
                let _ = reader.read_u8();
            }
            3 => {
                let _ = reader.read_u16();
            }
            4 => {
                let _ = reader.read_u32();
            }
            _ => {
                let _ = reader.read_i32();
            }
        }
    }
});
