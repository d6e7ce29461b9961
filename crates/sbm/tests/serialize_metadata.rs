#![cfg(feature = "serde")]

use sbm::sbm_core::bits::Bit;
use sbm::SbmImage;

#[test]
fn serialize_metadata() {
    let image = SbmImage::from_bits(vec![Bit::Zero; 6], 2, 3).unwrap();
    let value = serde_json::to_value(&image).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "version": 1,
            "width": 2,
            "height": 3,
            "area": 6,
            "mime_type": "image/x-portable-bitmap"
        })
    );
}
