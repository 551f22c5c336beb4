use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use pdf_grid::*;
use std::io::Cursor;

fn sample(width: u32, height: u32) -> LoadedImage {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([1, 2, 3, 255])))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    decode_image("s.png", "image/png", bytes).unwrap()
}

#[test]
fn test_default_statistics() {
    let stats = calculate_statistics(&GridConfig::default(), None).unwrap();

    assert_eq!(stats.total_images, 20);
    assert_eq!((stats.columns, stats.rows), (4, 5));
    assert_eq!(stats.cell_size_label(), "47.5 × 55.4");
    assert_eq!(stats.page_label(), "A4 (210 × 297 mm)");
    assert_eq!(stats.orientation, Orientation::Portrait);
    assert_eq!(stats.vertical_cut_lines, 3);
    assert_eq!(stats.horizontal_cut_lines, 4);
    assert_eq!(stats.output_filename, "grid_4x5_20pcs.pdf");
    assert!(stats.draw_size.is_none());
}

#[test]
fn test_statistics_with_image() {
    let image = sample(800, 600);
    let stats = calculate_statistics(&GridConfig::default(), Some(&image)).unwrap();

    let size = stats.draw_size.unwrap();
    assert!((size.width - 45.125).abs() < 1e-3);
    assert!((size.height - 33.84375).abs() < 1e-3);
}

#[test]
fn test_custom_landscape_statistics() {
    let mut config = GridConfig::default();
    config.set_option(ConfigKey::PageWidth, "300");
    config.set_option(ConfigKey::PageHeight, "200");
    config.set_option(ConfigKey::Columns, "1");
    config.set_option(ConfigKey::Rows, "1");

    let stats = calculate_statistics(&config, None).unwrap();
    assert_eq!(stats.page_label(), "Custom (300 × 200 mm)");
    assert_eq!(stats.orientation, Orientation::Landscape);
    assert_eq!(stats.vertical_cut_lines, 0);
    assert_eq!(stats.horizontal_cut_lines, 0);
    assert_eq!(stats.cell_size_label(), "280.0 × 180.0");
    assert_eq!(stats.output_filename, "grid_1x1_1pcs.pdf");
}

#[test]
fn test_statistics_reject_invalid_config() {
    let config = GridConfig {
        columns: 0,
        ..Default::default()
    };
    assert!(calculate_statistics(&config, None).is_err());
}
