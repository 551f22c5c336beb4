use pdf_grid::layout::*;
use pdf_grid::*;

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn config(columns: u32, rows: u32, margin_mm: f32, image_scale: u32) -> GridConfig {
    GridConfig {
        columns,
        rows,
        margin_mm,
        image_scale,
        ..Default::default()
    }
}

#[test]
fn test_a4_four_by_five() {
    let layout = create_grid_layout(&config(4, 5, 10.0, 95)).unwrap();

    assert_eq!(layout.usable_width_mm, 190.0);
    assert_eq!(layout.usable_height_mm, 277.0);
    assert_eq!(layout.cell_width_mm, 47.5);
    assert!(approx_eq(layout.cell_height_mm, 55.4));
    assert_eq!(layout.cell_count(), 20);
}

#[test]
fn test_wide_image_limited_by_width() {
    let layout = create_grid_layout(&config(4, 5, 10.0, 95)).unwrap();
    let size = image_draw_size(&layout, 800, 600);

    assert!(approx_eq(size.width, 45.125), "width {}", size.width);
    assert!(approx_eq(size.height, 33.84375), "height {}", size.height);
}

#[test]
fn test_tall_image_limited_by_height() {
    let size = fit_draw_size(50.0, 50.0, 300, 600, 0.8);
    assert!(approx_eq(size.height, 40.0));
    assert!(approx_eq(size.width, 20.0));
}

#[test]
fn test_equal_aspect_uses_height_branch() {
    // Same aspect as the cell: both sides hit the bound
    let size = fit_draw_size(40.0, 20.0, 200, 100, 1.0);
    assert!(approx_eq(size.width, 40.0));
    assert!(approx_eq(size.height, 20.0));
}

#[test]
fn test_cells_and_draw_rects_hold_for_many_configs() {
    let image_sizes = [(800, 600), (600, 800), (100, 100), (1920, 200), (37, 1001)];

    for columns in 1..=6 {
        for rows in 1..=6 {
            for margin in [0.0, 5.0, 17.0] {
                for scale in [10, 55, 95, 100] {
                    let cfg = config(columns, rows, margin, scale);
                    let layout = create_grid_layout(&cfg).unwrap();

                    let expected_w = (cfg.page_width_mm - 2.0 * margin) / columns as f32;
                    let expected_h = (cfg.page_height_mm - 2.0 * margin) / rows as f32;
                    assert_eq!(layout.cell_width_mm, expected_w);
                    assert_eq!(layout.cell_height_mm, expected_h);

                    let max_w = expected_w * scale as f32 / 100.0;
                    let max_h = expected_h * scale as f32 / 100.0;

                    for (px_w, px_h) in image_sizes {
                        let placements = place_image(&layout, px_w, px_h);
                        assert_eq!(placements.len(), (columns * rows) as usize);

                        for p in &placements {
                            assert_eq!(p.cell.width, expected_w);
                            assert_eq!(p.cell.height, expected_h);

                            let aspect = p.draw.width / p.draw.height;
                            let image_aspect = px_w as f32 / px_h as f32;
                            assert!(
                                ((aspect - image_aspect) / image_aspect).abs() < 1e-4,
                                "aspect {} vs {}",
                                aspect,
                                image_aspect
                            );

                            assert!(p.draw.width <= max_w + EPSILON);
                            assert!(p.draw.height <= max_h + EPSILON);
                            assert!(
                                approx_eq(p.draw.width, max_w) || approx_eq(p.draw.height, max_h)
                            );

                            assert!(approx_eq(p.draw.center_x(), p.cell.center_x()));
                            assert!(approx_eq(p.draw.center_y(), p.cell.center_y()));
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_placements_are_row_major() {
    let layout = create_grid_layout(&config(3, 2, 10.0, 95)).unwrap();
    let placements = place_image(&layout, 100, 100);

    let order: Vec<(usize, usize)> = placements
        .iter()
        .map(|p| (p.position.row, p.position.col))
        .collect();
    assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);

    let second_row_first = &placements[3];
    assert_eq!(second_row_first.cell.x, 10.0);
    assert!(approx_eq(second_row_first.cell.y, 10.0 + layout.cell_height_mm));
}

#[test]
fn test_cell_origins() {
    let layout = create_grid_layout(&config(4, 5, 10.0, 95)).unwrap();
    let cell = layout.cell_rect(GridPosition::new(2, 3));

    assert!(approx_eq(cell.x, 10.0 + 3.0 * 47.5));
    assert!(approx_eq(cell.y, 10.0 + 2.0 * 55.4));
    assert!(approx_eq(cell.right(), 200.0));
}

#[test]
fn test_single_cell_has_no_separators() {
    let layout = create_grid_layout(&config(1, 1, 10.0, 95)).unwrap();
    assert!(separator_lines(&layout).is_empty());
}

#[test]
fn test_separators_between_cells_only() {
    let layout = create_grid_layout(&config(4, 5, 10.0, 95)).unwrap();
    let lines = separator_lines(&layout);

    let vertical: Vec<_> = lines
        .iter()
        .filter(|l| l.axis == LineAxis::Vertical)
        .collect();
    let horizontal: Vec<_> = lines
        .iter()
        .filter(|l| l.axis == LineAxis::Horizontal)
        .collect();
    assert_eq!(vertical.len(), 3);
    assert_eq!(horizontal.len(), 4);

    for line in &vertical {
        assert_eq!(line.x1, line.x2);
        assert!(line.x1 > 10.0 && line.x1 < 200.0);
        assert_eq!(line.y1, 10.0);
        assert!(approx_eq(line.y2, 287.0));
    }
    assert!(approx_eq(vertical[0].x1, 57.5));

    for line in &horizontal {
        assert_eq!(line.y1, line.y2);
        assert!(line.y1 > 10.0 && line.y1 < 287.0);
        assert_eq!(line.x1, 10.0);
        assert!(approx_eq(line.x2, 200.0));
    }
}

#[test]
fn test_invalid_config_has_no_layout() {
    let result = create_grid_layout(&config(0, 5, 10.0, 95));
    assert!(matches!(result, Err(GridError::InvalidGeometry(_))));

    let result = create_grid_layout(&config(4, 5, 200.0, 95));
    assert!(matches!(result, Err(GridError::InvalidGeometry(_))));
}
