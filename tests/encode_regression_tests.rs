//! Integration tests for QR code encoding regression testing
//!
//! These tests pin the public encoding API to known symbol sizes, capacity
//! limits and codeword layouts, and check that rendering and batch
//! encoding stay consistent with single-symbol encoding.

use image::Rgb;
use qr_forge::encoder::bch::version_bits;
use qr_forge::encoder::bitstream::extract_codewords;
use qr_forge::encoder::format::FormatInfo;
use qr_forge::encoder::function_mask::FunctionPatterns;
use qr_forge::encoder::mask::apply_mask;
use qr_forge::encoder::tables::{data_codewords, ecc_per_block, num_blocks, total_codewords};
use qr_forge::encoder::version::read_version_info;
use qr_forge::{
    Color, ECLevel, EncodeOptions, EncodingError, MaskPattern, Mode, SegmentMode, Symbol,
    Version, encode, encode_batch, encode_symbol, encode_text,
};

/// HELLO WORLD, alphanumeric, version 1-M, mask 0
const HELLO_WORLD_1M: [&str; 21] = [
    "#######...#.#.#######",
    "#.....#.###...#.....#",
    "#.###.#...#.#.#.###.#",
    "#.###.#...#.#.#.###.#",
    "#.###.#.#.###.#.###.#",
    "#.....#..###..#.....#",
    "#######.#.#.#.#######",
    ".....................",
    "#.#.#.#..#..#...#..#.",
    ".####...#..#....#...#",
    "...#######.#..#.##...",
    "####.#.##..###.#.###.",
    ".#..####.#.#..###.#.#",
    "........#.#...#...#.#",
    "#######.....#..#.##..",
    "#.....#..##...##.#...",
    "#.###.#.##..#.#######",
    "#.###.#...##.#.#...#.",
    "#.###.#.####.###.#..#",
    "#.....#....###...#.##",
    "#######.##.#.###....#",
];

/// 136 lowercase bytes, version 7-L, mask 2
const PANGRAM_7L_TEXT: &[u8] = b"the quick brown fox jumps over the lazy dog, then naps in the warm \
afternoon sun while the farmer counts sheep and the hens argue loudly";

const PANGRAM_7L: [&str; 45] = [
    "#######......#.#.#.#.....#.#.###.#..#.#######",
    "#.....#.#....#....#...#.#.##.#.#...#..#.....#",
    "#.###.#..####.##..###....#.##...##.#..#.###.#",
    "#.###.#.#.#..#.####.#.##.#....##...##.#.###.#",
    "#.###.#....#.##..#..#####..#.####.###.#.###.#",
    "#.....#.##.#.##.....#...#.###.........#.....#",
    "#######.#.#.#.#.#.#.#.#.#.#.#.#.#.#.#.#######",
    ".........##.#.##.##.#...##.##.#.#####........",
    "#####.#####..###..#######..#...#.#.#.#.#.#.#.",
    "#.##.#.##.#.#...#.####...#....#.##.###.##.#.#",
    ".#...##..#...#.####.##.##.###..#.###.###..#..",
    ".#.....#.#.##...#.##.......#######.#..######.",
    "#######.##.###.####..##.#....###.##......#.#.",
    "#.####.######.#....#.....#.#.##..#.###.#..#.#",
    "...#.###.###...#.#..#..##.#......####.#...#..",
    ".###.#.#.....#.#...#...####.#.####.#...####.#",
    ".#.#..#.##.#.....#.#.######...##.#....#..#.##",
    ".#..#..###...#.#..#.#.##.#.######..###.#.##.#",
    "####.##....#.#......#####.####.####...##.#.#.",
    "###.#..#.....#.#..##...##.#.###.##.###..###..",
    "############.#.##########....##..#..#####...#",
    "#..##...########....#...##.#.####..##...#.#.#",
    "...##.#.#.##.##...###.#.#.##.#...####.#.####.",
    ".#.##...#.....#.###.#...##..###.###.#...####.",
    "#..#######.#####..#.#######...##.##.######.#.",
    "##..#..#..#.#...#######.#....##....###......#",
    "..#####.#.###..####.......##......#.#..#..##.",
    "#####..#.#..#.#.###....###.##.####.#..##.##..",
    "..#.#######..#.##.#.##..##.#..##..#.#####..#.",
    "#.####.#..#.#.#....####..#.#..#.....####.####",
    "#.##..#.###....###..##....#....#.##..#..####.",
    ".....#.#.#.#.#.#...##..######...#..#.########",
    ".######.#...#....#.#....#.....#........##....",
    "##..##..#.##.#.#..##..#.#..#.####...#..#...##",
    "....#.#..##..##...#.##....#.#....##.##...###.",
    ".####..#...#..##..##.#.######.###.###.#..##..",
    "#..##.####...#..###.#####.#...##..#.#####...#",
    "........##.##.#..#..#...##.####.#...#...#..##",
    "#######.#.##.##...###.#.###.#..##.###.#.####.",
    "#.....#..###..##.####...#..######.###...###..",
    "#.###.#.#.######..#.#####....###...######....",
    "#.###.#.###.#...###.....##.#..#......#.###...",
    "#.###.#.#.##################......#####...#.#",
    "#.....#.#...###.##.###.....##.#.#....#..###..",
    "#######.###..#.#####.#..###..###...##.##...#.",
];

fn render_options(options: EncodeOptions) -> EncodeOptions {
    options.with_module_size(10).with_border(4)
}

fn ascii_rows(symbol: &Symbol) -> Vec<String> {
    symbol
        .to_bool_rows()
        .iter()
        .map(|row| row.iter().map(|&dark| if dark { '#' } else { '.' }).collect())
        .collect()
}

fn assert_grid(symbol: &Symbol, expected: &[&str]) {
    let actual = ascii_rows(symbol);
    assert_eq!(actual.len(), expected.len());
    for (y, (got, want)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(got, want, "row {y}");
    }
}

#[test]
fn test_hello_world_version_1_m() {
    let options = EncodeOptions::default().with_ec_level(ECLevel::M);
    let symbol = encode_symbol(b"HELLO WORLD", &options).unwrap();
    assert_eq!(symbol.version(), Version::MIN);
    assert_eq!(symbol.size(), 21);

    let info = FormatInfo::read(symbol.grid()).expect("format info should decode");
    assert_eq!(info.ec_level, ECLevel::M);
    assert_eq!(info.mask_pattern, symbol.mask());

    let mut grid = symbol.grid().clone();
    apply_mask(&mut grid, symbol.mask());
    let codewords = extract_codewords(&grid);
    assert_eq!(
        &codewords[..16],
        &[32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17]
    );
    assert_eq!(
        &codewords[16..],
        &[196, 35, 39, 119, 235, 215, 231, 226, 93, 23]
    );
}

#[test]
fn test_hello_world_full_grid() {
    let options = EncodeOptions::default().with_ec_level(ECLevel::M);
    let symbol = encode_symbol(b"HELLO WORLD", &options).unwrap();
    assert_eq!(symbol.mask(), MaskPattern::Pattern0);
    assert_grid(&symbol, &HELLO_WORLD_1M);
}

#[test]
fn test_byte_mode_version_7_full_grid() {
    assert_eq!(PANGRAM_7L_TEXT.len(), 136);
    let options = EncodeOptions::default().with_ec_level(ECLevel::L);
    let symbol = encode_symbol(PANGRAM_7L_TEXT, &options).unwrap();
    assert_eq!(symbol.version().number(), 7);
    assert_eq!(symbol.mask(), MaskPattern::Pattern2);
    assert_grid(&symbol, &PANGRAM_7L);
}

#[test]
fn test_byte_mode_version_and_mask_selection() {
    // (length, [(version, mask)] for L, M, Q, H)
    let expected: [(usize, [(u8, u8); 4]); 8] = [
        (0, [(1, 0), (1, 3), (1, 0), (1, 6)]),
        (1, [(1, 0), (1, 5), (1, 0), (1, 6)]),
        (5, [(1, 0), (1, 2), (1, 1), (1, 7)]),
        (17, [(1, 1), (2, 0), (2, 0), (3, 5)]),
        (32, [(2, 6), (3, 2), (3, 0), (4, 7)]),
        (61, [(4, 2), (4, 2), (6, 7), (7, 2)]),
        (100, [(5, 2), (6, 2), (8, 2), (10, 2)]),
        (119, [(6, 2), (7, 2), (9, 4), (10, 1)]),
    ];
    for (len, per_level) in expected {
        let data: Vec<u8> = (0..len).map(|i| b'a' + (i * 7 % 26) as u8).collect();
        for (level, (version, mask)) in ECLevel::ALL.into_iter().zip(per_level) {
            let options = EncodeOptions::default()
                .with_ec_level(level)
                .with_segment_mode(SegmentMode::Fixed(Mode::Byte));
            let symbol = encode_symbol(&data, &options).unwrap();
            assert_eq!(symbol.version().number(), version, "len {len} {level:?}");
            assert_eq!(symbol.mask().bits(), mask, "len {len} {level:?}");
        }
    }
}

#[test]
fn test_every_version_and_level_encodes() {
    for version in Version::MIN.up_to_max() {
        for level in ECLevel::ALL {
            let options = EncodeOptions::default()
                .with_ec_level(level)
                .with_exact_version(version);
            let symbol = encode_symbol(b"0123456789", &options).unwrap();
            let label = format!("version {} {level:?}", version.number());
            assert_eq!(symbol.version(), version, "{label}");
            assert_eq!(symbol.size(), version.number() as usize * 4 + 17, "{label}");

            let info = FormatInfo::read(symbol.grid()).expect("format info should decode");
            assert_eq!(info.ec_level, level, "{label}");
            assert_eq!(info.mask_pattern, symbol.mask(), "{label}");
            if version.has_version_info() {
                assert_eq!(read_version_info(symbol.grid()), version_bits(version), "{label}");
            }

            let mut grid = symbol.grid().clone();
            apply_mask(&mut grid, symbol.mask());
            assert_eq!(extract_codewords(&grid).len(), total_codewords(version), "{label}");
        }
    }
}

#[test]
fn test_example_url_high_ecc_dimensions() {
    let options = render_options(EncodeOptions::default().with_ec_level(ECLevel::H));
    let symbol = encode_symbol(b"HTTPS://EXAMPLE.COM", &options).unwrap();
    assert_eq!(symbol.version().number(), 2);

    let img = encode_text("HTTPS://EXAMPLE.COM", &options).unwrap();
    let side = (symbol.size() as u32 + 8) * 10;
    assert_eq!(side, 330);
    assert_eq!(img.dimensions(), (side, side));
}

#[test]
fn test_encoding_is_deterministic() {
    let options = render_options(EncodeOptions::default().with_ec_level(ECLevel::L));
    for input in [&b""[..], b"0", b"12345678901234567", b"hello, world"] {
        let a = encode_symbol(input, &options).unwrap();
        let b = encode_symbol(input, &options).unwrap();
        assert_eq!(a.version(), Version::MIN);
        assert_eq!(a, b);
        assert_eq!(encode(input, &options).unwrap(), encode(input, &options).unwrap());
    }
}

#[test]
fn test_data_too_long_at_every_level() {
    let too_long = vec![b'a'; 2954];
    for level in ECLevel::ALL {
        let options = EncodeOptions::default().with_ec_level(level);
        assert!(
            matches!(
                encode_symbol(&too_long, &options),
                Err(EncodingError::DataTooLong { ec_level, .. }) if ec_level == level
            ),
            "level {level:?}"
        );
    }

    let max = vec![b'a'; 2953];
    let options = EncodeOptions::default().with_ec_level(ECLevel::L);
    let symbol = encode_symbol(&max, &options).unwrap();
    assert_eq!(symbol.version(), Version::MAX);
    assert_eq!(read_version_info(symbol.grid()), 0x28C69);
}

#[test]
fn test_forced_version_too_small() {
    let options = EncodeOptions::default()
        .with_ec_level(ECLevel::Q)
        .with_exact_version(Version::new(2).unwrap());
    let err = encode_symbol(&[b'z'; 100], &options).unwrap_err();
    assert!(matches!(
        err,
        EncodingError::ForcedVersionTooSmall { version, .. } if version.number() == 2
    ));

    // As a minimum, the same version grows to fit
    let options = options.with_min_version(Version::new(2).unwrap());
    assert!(encode_symbol(&[b'z'; 100], &options).unwrap().version().number() > 2);
}

#[test]
fn test_color_swap_inverts_pixels() {
    let options = render_options(EncodeOptions::default());
    let normal = encode(b"swap", &options).unwrap();
    let swapped = encode(
        b"swap",
        &options.with_colors(Color::WHITE, Color::BLACK),
    )
    .unwrap();
    assert_eq!(normal.dimensions(), swapped.dimensions());
    for (a, b) in normal.pixels().zip(swapped.pixels()) {
        assert_eq!(*a == Rgb([0, 0, 0]), *b == Rgb([255, 255, 255]));
        assert_ne!(a, b);
    }
}

#[test]
fn test_custom_colors() {
    let fg = Color::from_hex("#1E3A8A").unwrap();
    let bg = Color::from_hex("#FDE68A").unwrap();
    let options = render_options(EncodeOptions::default()).with_colors(fg, bg);
    let img = encode(b"colors", &options).unwrap();
    assert_eq!(*img.get_pixel(0, 0), Rgb([0xFD, 0xE6, 0x8A]));
    assert_eq!(*img.get_pixel(40, 40), Rgb([0x1E, 0x3A, 0x8A]));
    let (fg_px, bg_px): (Rgb<u8>, Rgb<u8>) = (fg.into(), bg.into());
    assert!(img.pixels().all(|p| *p == fg_px || *p == bg_px));
}

#[test]
fn test_capacity_matches_grid_for_all_versions() {
    for version in Version::MIN.up_to_max() {
        let modules = FunctionPatterns::data_modules_count(version);
        assert_eq!(modules / 8, total_codewords(version), "version {}", version.number());
        for level in ECLevel::ALL {
            let ecc = num_blocks(version, level) * ecc_per_block(version, level);
            assert_eq!(data_codewords(version, level) + ecc, total_codewords(version));
        }
    }
}

#[test]
fn test_version_monotonic_in_length() {
    for level in ECLevel::ALL {
        let options = EncodeOptions::default().with_ec_level(level);
        let mut previous = Version::MIN;
        for len in (0..1200).step_by(37) {
            let data = vec![b'x'; len];
            let version = encode_symbol(&data, &options).unwrap().version();
            assert!(version >= previous, "len {len} at {level:?}");
            previous = version;
        }
    }
}

#[test]
fn test_mixed_input_segments() {
    // Long digit run surrounded by bytes: still encodes and stays compact
    let data = b"order#123456789012345678901234567890/ok";
    let options = EncodeOptions::default().with_ec_level(ECLevel::L);
    let symbol = encode_symbol(data, &options).unwrap();
    assert!(symbol.version().number() <= 3);
}

#[test]
fn test_batch_matches_sequential() {
    let payloads: Vec<Vec<u8>> = (0..16).map(|i| format!("item-{i:04}").into_bytes()).collect();
    let refs: Vec<&[u8]> = payloads.iter().map(|p| p.as_slice()).collect();
    let options = render_options(EncodeOptions::default());
    let batch = encode_batch(&refs, &options);
    assert_eq!(batch.len(), refs.len());
    for (data, result) in refs.iter().zip(batch) {
        assert_eq!(result.unwrap(), encode(data, &options).unwrap());
    }
}
