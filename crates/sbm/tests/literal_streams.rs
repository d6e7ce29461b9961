use sbm::sbm_core::bits::Bit;
use sbm::sbm_core::bytestream::ByteIoError;
use sbm::sbm_core::options::DecoderOptions;
use sbm::{SbmDecoder, SbmErrors, SbmField, SbmImage};

const TOP: &[u8] = b"SBM (SIMPLE BIT MAP)\r\nVERSION 1\r\n\
WIDTH 3 (2 + 1)\r\nHEIGHT 4 (3 + 1)\r\nAREA 12 (11 + 1)\r\n";
const BOTTOM: &[u8] = b"WIDTH 3 (0 + 3)\r\nHEIGHT 4 (0 + 4)\r\nAREA 12 (10 + 2)\r\n";

fn stream(top: &[u8], payload: &[u8], separator: &[u8], bottom: &[u8]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(top);
    data.extend_from_slice(payload);
    data.extend_from_slice(separator);
    data.extend_from_slice(bottom);
    data
}

#[test]
fn padding_bits_are_cleared() {
    let data = stream(TOP, &[0xFF, 0xFF], b"\r\n", BOTTOM);
    let image = SbmDecoder::new(data.as_slice()).decode().unwrap();

    assert_eq!(image.width(), 3);
    assert_eq!(image.height(), 4);
    assert_eq!(image.area(), 12);
    assert_eq!(image.bits(), &[Bit::One; 12]);
    assert_eq!(image.bytes(), &[0xFF, 0x0F]);

    let header = image.header();
    assert_eq!((header.width().top_left(), header.width().top_right()), (2, 1));
    assert_eq!((header.area().bottom_left(), header.area().bottom_right()), (10, 2));
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut data = stream(TOP, &[0xFF, 0x0F], b"\r\n", BOTTOM);
    data.extend_from_slice(b"not part of the image");

    let image = SbmDecoder::new(data.as_slice()).decode().unwrap();
    assert_eq!(image.bytes(), &[0xFF, 0x0F]);
}

#[test]
fn wrong_banner() {
    let data = b"SBM (SIMPLE BITMAP)\r\nVERSION 1\r\n";
    let err = SbmImage::read_from(&data[..]).unwrap_err();

    assert!(matches!(err, SbmErrors::WrongFormatBanner));
}

#[test]
fn unsupported_version() {
    let data = b"SBM (SIMPLE BIT MAP)\r\nVERSION 2\r\n";
    let err = SbmImage::read_from(&data[..]).unwrap_err();

    assert!(matches!(err, SbmErrors::UnsupportedVersion(2)));
}

#[test]
fn version_overflow() {
    let data = b"SBM (SIMPLE BIT MAP)\r\nVERSION 256\r\n";
    let err = SbmImage::read_from(&data[..]).unwrap_err();

    assert!(matches!(err, SbmErrors::VersionOverflow(256)));
}

#[test]
fn area_mismatch() {
    // the area line is self consistent but isn't width*height
    let top = b"SBM (SIMPLE BIT MAP)\r\nVERSION 1\r\n\
    WIDTH 3 (2 + 1)\r\nHEIGHT 4 (3 + 1)\r\nAREA 13 (12 + 1)\r\n";
    let err = SbmImage::read_from(&top[..]).unwrap_err();

    assert!(matches!(
        err,
        SbmErrors::AreaMismatch {
            width:  3,
            height: 4,
            area:   13
        }
    ));
}

#[test]
fn area_overflow_is_a_mismatch() {
    let top = format!(
        "SBM (SIMPLE BIT MAP)\r\nVERSION 1\r\nWIDTH {0} ({0} + 0)\r\nHEIGHT {0} (0 + {0})\r\nAREA 1 (1 + 0)\r\n",
        usize::MAX
    );
    let options = DecoderOptions::default()
        .set_max_width(usize::MAX)
        .set_max_height(usize::MAX);
    let err = SbmDecoder::new_with_options(top.as_bytes(), options)
        .decode()
        .unwrap_err();

    assert!(matches!(err, SbmErrors::AreaMismatch { .. }));
}

#[test]
fn bottom_width_mismatch() {
    let bottom = b"WIDTH 4 (0 + 4)\r\nHEIGHT 4 (0 + 4)\r\nAREA 12 (10 + 2)\r\n";
    let data = stream(TOP, &[0xFF, 0x0F], b"\r\n", bottom);

    let mut decoder = SbmDecoder::new(data.as_slice());
    let err = decoder.decode().unwrap_err();

    assert!(matches!(
        err,
        SbmErrors::BottomHeaderMismatch {
            field:  SbmField::Width,
            top:    3,
            bottom: 4
        }
    ));
    assert_eq!(decoder.dimensions(), Some((3, 4)));
}

#[test]
fn bottom_area_mismatch() {
    let bottom = b"WIDTH 3 (0 + 3)\r\nHEIGHT 4 (0 + 4)\r\nAREA 11 (10 + 1)\r\n";
    let data = stream(TOP, &[0xFF, 0x0F], b"\r\n", bottom);
    let err = SbmImage::read_from(data.as_slice()).unwrap_err();

    assert!(matches!(
        err,
        SbmErrors::BottomHeaderMismatch {
            field: SbmField::Area,
            ..
        }
    ));
}

#[test]
fn bottom_integrity_failure() {
    let bottom = b"WIDTH 3 (1 + 3)\r\nHEIGHT 4 (0 + 4)\r\nAREA 12 (10 + 2)\r\n";
    let data = stream(TOP, &[0xFF, 0x0F], b"\r\n", bottom);
    let err = SbmImage::read_from(data.as_slice()).unwrap_err();

    assert!(matches!(
        err,
        SbmErrors::Integrity {
            name: "WIDTH",
            fixed: 3,
            left: 1,
            right: 3
        }
    ));
}

#[test]
fn bad_separator() {
    let data = stream(TOP, &[0xFF, 0x0F], b"\n\r", BOTTOM);
    let err = SbmImage::read_from(data.as_slice()).unwrap_err();

    assert!(matches!(err, SbmErrors::BadSeparator([b'\n', b'\r'])));
}

#[test]
fn short_payload() {
    let data = stream(TOP, &[0xFF], b"", b"");
    let err = SbmImage::read_from(data.as_slice()).unwrap_err();

    assert!(matches!(
        err,
        SbmErrors::IoErrors(ByteIoError::NotEnoughBytes(2, 1))
    ));
}

#[test]
fn truncated_header_line() {
    let data = b"SBM (SIMPLE BIT MAP)\r\nVERSION 1\r\nWIDTH 3 (2 + 1)";
    let err = SbmImage::read_from(&data[..]).unwrap_err();

    assert!(matches!(err, SbmErrors::IoErrors(_)));
}

#[test]
fn headers_out_of_order() {
    let data = b"SBM (SIMPLE BIT MAP)\r\nVERSION 1\r\nHEIGHT 4 (3 + 1)\r\n";
    let err = SbmImage::read_from(&data[..]).unwrap_err();

    assert!(matches!(
        err,
        SbmErrors::UnexpectedHeader { expected: "WIDTH", found } if found == "HEIGHT"
    ));
}

#[test]
fn width_above_limit() {
    let options = DecoderOptions::default().set_max_width(2);
    let err = SbmDecoder::new_with_options(TOP, options)
        .decode_headers()
        .unwrap_err();

    assert!(matches!(err, SbmErrors::TooLargeDimensions("width", 2, 3)));
}

#[test]
fn height_above_limit() {
    let options = DecoderOptions::default().set_max_height(3);
    let err = SbmDecoder::new_with_options(TOP, options)
        .decode_headers()
        .unwrap_err();

    assert!(matches!(err, SbmErrors::TooLargeDimensions("height", 3, 4)));
}

#[test]
fn header_line_above_limit() {
    let options = DecoderOptions::default().set_max_header_size(8);
    let err = SbmDecoder::new_with_options(TOP, options)
        .decode_headers()
        .unwrap_err();

    assert!(matches!(
        err,
        SbmErrors::IoErrors(ByteIoError::LineTooLong(8))
    ));
}
