use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use lopdf::{Document, Object, Stream};
use pdf_grid::constants::mm_to_pt;
use pdf_grid::layout::{create_grid_layout, place_image};
use pdf_grid::*;
use std::io::Cursor;
use tempfile::tempdir;

fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
    bytes
}

fn png_image(width: u32, height: u32) -> LoadedImage {
    let pixels = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 10) as u8, (y * 10) as u8, 128, if x == 0 { 0 } else { 255 }])
    });
    let bytes = encode(DynamicImage::ImageRgba8(pixels), ImageFormat::Png);
    decode_image("photo.png", "image/png", bytes).unwrap()
}

fn jpeg_image(width: u32, height: u32) -> LoadedImage {
    let pixels = RgbImage::from_fn(width, height, |x, _| Rgb([(x * 20) as u8, 64, 200]));
    let bytes = encode(DynamicImage::ImageRgb8(pixels), ImageFormat::Jpeg);
    decode_image("photo.jpg", "image/jpeg", bytes).unwrap()
}

fn page_content(doc: &Document) -> String {
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1);
    let page_id = *pages.values().next().unwrap();
    String::from_utf8(doc.get_page_content(page_id).unwrap()).unwrap()
}

fn media_box(doc: &Document) -> (f32, f32) {
    let page_id = *doc.get_pages().values().next().unwrap();
    let page = doc.get_dictionary(page_id).unwrap();
    let mb = page.get(b"MediaBox").unwrap().as_array().unwrap();
    (mb[2].as_float().unwrap(), mb[3].as_float().unwrap())
}

fn image_streams(doc: &Document) -> Vec<&Stream> {
    doc.objects
        .values()
        .filter_map(|obj| match obj {
            Object::Stream(stream) => Some(stream),
            _ => None,
        })
        .filter(|stream| {
            stream
                .dict
                .get(b"Subtype")
                .and_then(|s| s.as_name())
                .is_ok_and(|name| name == b"Image")
        })
        .collect()
}

fn filter_name(stream: &Stream) -> Vec<u8> {
    stream
        .dict
        .get(b"Filter")
        .unwrap()
        .as_name()
        .unwrap()
        .to_vec()
}

/// Numeric operands of one content-stream line, ignoring operators and brackets
fn operands(line: &str) -> Vec<f32> {
    line.split_whitespace()
        .map(|token| token.trim_matches(|c| c == '[' || c == ']'))
        .filter_map(|token| token.parse().ok())
        .collect()
}

fn assert_close(actual: f32, expected: f32, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-2,
        "{what}: expected {expected}, got {actual}"
    );
}

#[test]
fn test_output_filename() {
    assert_eq!(output_filename(&GridConfig::default()), "grid_4x5_20pcs.pdf");

    let config = GridConfig {
        columns: 3,
        rows: 7,
        ..Default::default()
    };
    assert_eq!(output_filename(&config), "grid_3x7_21pcs.pdf");
}

#[test]
fn test_default_grid_document() {
    let doc = build_document(&png_image(16, 12), &GridConfig::default()).unwrap();

    let (w, h) = media_box(&doc);
    assert!((w - mm_to_pt(210.0)).abs() < 1e-2);
    assert!((h - mm_to_pt(297.0)).abs() < 1e-2);

    let content = page_content(&doc);
    assert_eq!(content.matches(" Do Q").count(), 20);
    assert_eq!(content.matches(" l S").count(), 7);
    // Images are painted before the cut lines
    let last_image = content.rfind(" Do Q").unwrap();
    let first_line = content.find(" m ").unwrap();
    assert!(last_image < first_line);

    let images = image_streams(&doc);
    assert_eq!(images.len(), 1, "the image is embedded once");
    assert_eq!(filter_name(images[0]), b"FlateDecode");
    assert_eq!(
        images[0].dict.get(b"ColorSpace").unwrap().as_name().unwrap(),
        b"DeviceRGB"
    );
}

#[test]
fn test_jpeg_embedded_unchanged() {
    let image = jpeg_image(20, 10);
    let doc = build_document(&image, &GridConfig::default()).unwrap();

    let images = image_streams(&doc);
    assert_eq!(images.len(), 1);
    assert_eq!(filter_name(images[0]), b"DCTDecode");
    assert_eq!(images[0].content, *image.bytes);
    assert_eq!(
        images[0].dict.get(b"Width").unwrap().as_i64().unwrap(),
        20
    );
}

#[test]
fn test_single_cell_has_no_cut_lines() {
    let config = GridConfig {
        columns: 1,
        rows: 1,
        ..Default::default()
    };
    let doc = build_document(&png_image(8, 8), &config).unwrap();

    let content = page_content(&doc);
    assert_eq!(content.matches(" Do Q").count(), 1);
    assert!(!content.contains(" l S"));
    assert!(!content.contains(" d\n"));
}

#[test]
fn test_cut_line_stroke_style() {
    let config = GridConfig {
        columns: 2,
        rows: 1,
        ..Default::default()
    };
    let doc = build_document(&png_image(8, 8), &config).unwrap();
    let content = page_content(&doc);

    let color = content.lines().find(|l| l.ends_with(" RG")).unwrap();
    let gray = operands(color);
    assert_eq!(gray.len(), 3);
    for component in gray {
        assert_close(component, 150.0 / 255.0, "stroke gray");
    }

    let width = content.lines().find(|l| l.ends_with(" w")).unwrap();
    assert_close(operands(width)[0], 0.5669, "line width");

    let dash = content.lines().find(|l| l.ends_with(" d")).unwrap();
    assert!(dash.starts_with('['));
    let pattern = operands(dash);
    assert_eq!(pattern.len(), 3, "two dash lengths and the phase");
    assert_close(pattern[0], 5.669, "dash");
    assert_close(pattern[1], 5.669, "gap");
    assert_eq!(pattern[2], 0.0);

    // One vertical separator at 10 mm + 95 mm
    let lines: Vec<&str> = content.lines().filter(|l| l.ends_with(" l S")).collect();
    assert_eq!(lines.len(), 1);
    let coords = operands(lines[0]);
    assert_close(coords[0], 297.64, "x1");
    assert_close(coords[2], 297.64, "x2");
    assert_close(coords[1], mm_to_pt(287.0), "top");
    assert_close(coords[3], mm_to_pt(10.0), "bottom");
}

#[test]
fn test_image_matrices_match_placements() {
    let config = GridConfig {
        columns: 3,
        rows: 2,
        ..Default::default()
    };
    let image = png_image(40, 10);
    let doc = build_document(&image, &config).unwrap();
    let content = page_content(&doc);

    let layout = create_grid_layout(&config).unwrap();
    let placements = place_image(&layout, image.width, image.height);
    let matrices: Vec<Vec<f32>> = content
        .lines()
        .filter(|l| l.ends_with(" cm /Im0 Do Q"))
        .map(operands)
        .collect();
    assert_eq!(matrices.len(), placements.len());

    for (matrix, placement) in matrices.iter().zip(&placements) {
        let draw = placement.draw;
        let expected = [
            mm_to_pt(draw.width),
            0.0,
            0.0,
            mm_to_pt(draw.height),
            mm_to_pt(draw.x),
            mm_to_pt(config.page_height_mm - draw.bottom()),
        ];
        assert_eq!(matrix.len(), 6);
        for (actual, expected) in matrix.iter().zip(expected) {
            assert_close(*actual, expected, "cm operand");
        }
    }
}

#[test]
fn test_landscape_page() {
    let mut config = GridConfig::default();
    config.set_page_width(297.0);
    config.set_page_height(210.0);
    assert_eq!(config.orientation(), Orientation::Landscape);

    let doc = build_document(&png_image(8, 8), &config).unwrap();
    let (w, h) = media_box(&doc);
    assert!(w > h);
    assert!((w - mm_to_pt(297.0)).abs() < 1e-2);
}

#[test]
fn test_invalid_config_builds_nothing() {
    let config = GridConfig {
        rows: 0,
        ..Default::default()
    };
    let result = build_document(&png_image(8, 8), &config);
    assert!(matches!(result, Err(GridError::InvalidGeometry(_))));
}

#[tokio::test]
async fn test_export_to_directory_uses_default_name() {
    let dir = tempdir().unwrap();
    let image = png_image(30, 40);
    let config = GridConfig::default();

    let path = export_to_file(&image, &config, dir.path()).await.unwrap();
    assert_eq!(path, dir.path().join("grid_4x5_20pcs.pdf"));
    assert!(!dir.path().join("grid_4x5_20pcs.pdf.part").exists());

    let doc = Document::load(&path).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
    assert_eq!(page_content(&doc).matches(" Do Q").count(), 20);
}

#[tokio::test]
async fn test_export_to_explicit_path() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("sheet.pdf");
    let config = GridConfig {
        columns: 2,
        rows: 2,
        ..Default::default()
    };

    let path = export_to_file(&jpeg_image(10, 10), &config, &target)
        .await
        .unwrap();
    assert_eq!(path, target);

    let bytes = std::fs::read(&target).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.7"));
}

#[tokio::test]
async fn test_failed_export_writes_no_file() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("out.pdf");
    let config = GridConfig {
        image_scale: 5,
        ..Default::default()
    };

    let result = export_to_file(&png_image(8, 8), &config, &target).await;
    assert!(result.is_err());
    assert!(!target.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_export_returns_document() {
    let doc = export(&png_image(8, 4), &GridConfig::default()).await.unwrap();
    let bytes = document_to_bytes(doc).unwrap();
    let reloaded = Document::load_mem(&bytes).unwrap();
    assert_eq!(page_content(&reloaded).matches(" l S").count(), 7);
}
