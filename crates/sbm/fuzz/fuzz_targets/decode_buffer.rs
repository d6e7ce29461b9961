#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = sbm::SbmDecoder::new(data);
    if let Ok(image) = decoder.decode() {
        // anything we accept must encode back
        let mut out = Vec::new();
        let _ = sbm::SbmEncoder::new(&image).encode(&mut out);
    }
});
