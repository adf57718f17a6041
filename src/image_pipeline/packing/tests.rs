#[cfg(test)]
mod tests {
    use crate::image_pipeline::archive;
    use crate::image_pipeline::common::error::ArchiveError;
    use crate::image_pipeline::packing::constants::{TAG_BLACK, TAG_OTHER, TAG_WHITE};
    use crate::image_pipeline::packing::{ChunkTag, PackedImage, classify, pack, unpack, unpack_into};
    use crate::image_pipeline::raw::RawImageData;

    const W: u8 = TAG_WHITE;
    const B: u8 = TAG_BLACK;
    const O: u8 = TAG_OTHER;

    fn image(width: usize, height: usize, data: Vec<u8>) -> RawImageData {
        RawImageData::new(width, height, data).unwrap()
    }

    fn scanned_page() -> RawImageData {
        let mut data = vec![0xFF; 12];
        data.extend(vec![0x00; 12]);
        data.extend([0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x01, 0x01]);
        image(12, 3, data)
    }

    #[test]
    fn test_tag_values() {
        assert_eq!(ChunkTag::White as u8, 0);
        assert_eq!(ChunkTag::Black as u8, 2);
        assert_eq!(ChunkTag::Other as u8, 3);
        assert_eq!(ChunkTag::try_from(1u8), Err(1));
        assert_eq!(ChunkTag::try_from(3u8), Ok(ChunkTag::Other));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(&[0xFF, 0xFF, 0xFF, 0xFF]), ChunkTag::White);
        assert_eq!(classify(&[0x00, 0x00]), ChunkTag::Black);
        assert_eq!(classify(&[0x00, 0xFF]), ChunkTag::Other);
        assert_eq!(classify(&[0x7F]), ChunkTag::Other);
    }

    #[test]
    fn test_pack_scanned_page() {
        let packed = pack(&scanned_page(), "png");

        assert_eq!(packed.extension, "png");
        assert_eq!(packed.width, 12);
        assert_eq!(packed.height, 3);
        assert_eq!(packed.empty_rows, vec![true, false, false]);
        assert_eq!(
            packed.rows,
            vec![vec![B, B, B], vec![W, B, O, 0x01, 0x01, 0x01, 0x01]]
        );
    }

    #[test]
    fn test_unpack_scanned_page() {
        let original = scanned_page();
        let restored = unpack(&pack(&original, "png")).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_white_row_is_not_stored() {
        let packed = pack(&RawImageData::filled(9, 2, 0xFF).unwrap(), "png");
        assert_eq!(packed.empty_rows, vec![true, true]);
        assert!(packed.rows.is_empty());
    }

    #[test]
    fn test_black_row_is_one_tag_per_chunk() {
        let packed = pack(&RawImageData::filled(9, 1, 0x00).unwrap(), "png");
        assert_eq!(packed.empty_rows, vec![false]);
        assert_eq!(packed.rows, vec![vec![B, B, B]]);
    }

    #[test]
    fn test_mixed_row_keeps_payload() {
        let row = vec![0x00, 0x10, 0xFF, 0x20, 0xFF, 0xFF, 0xFF, 0xFF];
        let packed = pack(&image(8, 1, row), "png");
        assert_eq!(packed.rows, vec![vec![O, 0x00, 0x10, 0xFF, 0x20, W]]);
    }

    #[test]
    fn test_short_last_chunk_payload_is_short() {
        let row = vec![0x00, 0x00, 0x00, 0x00, 0x05, 0x06];
        let packed = pack(&image(6, 1, row), "pgm");
        assert_eq!(packed.rows, vec![vec![B, O, 0x05, 0x06]]);
    }

    #[test]
    fn test_round_trip_width_not_multiple_of_step() {
        // each row ends in a short mixed chunk followed by another stored row
        let data: Vec<u8> = vec![
            0x00, 0x00, 0x00, 0x00, 0x11, 0x22, 0x33, //
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, //
            0x01, 0x02, 0x03, 0x04, 0x00, 0xFF, 0x00, //
            0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, //
        ];
        let original = image(7, 4, data);
        let packed = pack(&original, "pgm");

        assert_eq!(packed.empty_rows, vec![false, true, false, false]);
        assert_eq!(packed.rows[0], vec![B, O, 0x11, 0x22, 0x33]);
        assert_eq!(unpack(&packed).unwrap(), original);
    }

    #[test]
    fn test_round_trip_widths_below_and_around_step() {
        for width in 1..=9 {
            let data: Vec<u8> = (0..width * 3).map(|i| (i * 37 % 256) as u8).collect();
            let original = image(width, 3, data);
            let restored = unpack(&pack(&original, "pgm")).unwrap();
            assert_eq!(restored, original, "width {}", width);
        }
    }

    #[test]
    fn test_round_trip_document_sample() {
        let data = vec![
            0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x01, //
            0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, //
            0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, //
            0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, //
            0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x0A, 0x00, //
        ];
        let original = image(8, 5, data);
        assert_eq!(unpack(&pack(&original, "png")).unwrap(), original);
    }

    #[test]
    fn test_unpack_into_caller_buffer() {
        let packed = pack(&scanned_page(), "png");
        let mut buffer = vec![0u8; 36];
        unpack_into(&packed, &mut buffer).unwrap();
        assert_eq!(buffer, scanned_page().into_data());
    }

    #[test]
    fn test_unpack_into_rejects_wrong_buffer_size() {
        let packed = pack(&scanned_page(), "png");
        let mut buffer = vec![0u8; 35];
        let result = unpack_into(&packed, &mut buffer);
        assert!(matches!(
            result.unwrap_err(),
            ArchiveError::BufferSizeMismatch { expected: 36, actual: 35 }
        ));
    }

    fn one_row(width: usize, tagged: Vec<u8>) -> PackedImage {
        PackedImage {
            extension: "png".to_string(),
            width,
            height: 1,
            empty_rows: vec![false],
            rows: vec![tagged],
        }
    }

    #[test]
    fn test_unknown_tag_fails() {
        let result = unpack(&one_row(8, vec![W, 0b01]));
        assert!(matches!(
            result.unwrap_err(),
            ArchiveError::UnknownTag { row: 0, offset: 1, tag: 1 }
        ));
    }

    #[test]
    fn test_missing_payload_fails() {
        let result = unpack(&one_row(8, vec![W, O, 0x01, 0x02]));
        assert!(matches!(result.unwrap_err(), ArchiveError::RowLayout { row: 0, .. }));
    }

    #[test]
    fn test_row_overrun_fails() {
        let result = unpack(&one_row(4, vec![B, B]));
        assert!(matches!(result.unwrap_err(), ArchiveError::RowLayout { row: 0, .. }));
    }

    #[test]
    fn test_row_underrun_fails() {
        let result = unpack(&one_row(8, vec![B]));
        assert!(matches!(result.unwrap_err(), ArchiveError::RowLayout { row: 0, .. }));
    }

    #[test]
    fn test_flag_count_mismatch_fails() {
        let mut packed = pack(&scanned_page(), "png");
        packed.empty_rows.pop();
        assert!(matches!(
            unpack(&packed).unwrap_err(),
            ArchiveError::FlagCountMismatch { expected: 3, actual: 2 }
        ));
    }

    #[test]
    fn test_row_count_mismatch_fails() {
        let mut packed = pack(&scanned_page(), "png");
        packed.rows.pop();
        assert!(matches!(
            unpack(&packed).unwrap_err(),
            ArchiveError::RowCountMismatch { expected: 2, actual: 1 }
        ));
    }

    #[test]
    fn test_unpack_rejects_zero_dimensions() {
        let packed = PackedImage::default();
        assert!(matches!(unpack(&packed).unwrap_err(), ArchiveError::InvalidDimensions(0, 0)));
    }

    #[test]
    fn test_unpack_oversized_archive_returns_error() {
        // extension "", width u64::MAX, height 1, flags [true], no rows
        let mut bytes = vec![0];
        bytes.extend([0xFF; 9]);
        bytes.extend([0x01, 1, 1, 1, 0]);
        let packed = archive::from_bytes(&bytes).unwrap();
        assert_eq!(packed.width, usize::MAX);

        let result = unpack(&packed);
        assert!(matches!(
            result.unwrap_err(),
            ArchiveError::InvalidDimensions(usize::MAX, 1)
        ));
    }

    #[test]
    fn test_unpack_checks_flags_before_allocating() {
        let packed = PackedImage {
            extension: "png".to_string(),
            width: 1 << 20,
            height: 1 << 20,
            empty_rows: vec![true],
            rows: Vec::new(),
        };
        assert!(matches!(
            unpack(&packed).unwrap_err(),
            ArchiveError::FlagCountMismatch { expected, actual: 1 } if expected == 1 << 20
        ));
    }

    #[test]
    fn test_packed_len_and_non_empty_rows() {
        let packed = pack(&scanned_page(), "png");
        assert_eq!(packed.non_empty_rows(), 2);
        assert_eq!(packed.packed_len(), 10);
    }
}
