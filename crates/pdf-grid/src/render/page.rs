//! Output page rendering
//!
//! Builds the single output page: one image placement per cell followed by
//! the dashed cut lines.

use crate::constants::{IMAGE_RESOURCE_NAME, mm_to_pt};
use crate::layout::{CellPlacement, GridLayout, Rect, SeparatorLine};
use crate::marks::{CutLineStyle, generate_cut_lines};
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

// =============================================================================
// Public API
// =============================================================================

/// Render the grid page into `output`.
///
/// # Arguments
/// * `output` - The output document
/// * `parent_pages_id` - The parent Pages object ID
/// * `layout` - Grid geometry (page size in mm)
/// * `placements` - Where each copy of the image goes
/// * `separators` - Cut lines drawn after all images
/// * `image_id` - The embedded image XObject
pub fn render_grid_page(
    output: &mut Document,
    parent_pages_id: ObjectId,
    layout: &GridLayout,
    placements: &[CellPlacement],
    separators: &[SeparatorLine],
    image_id: ObjectId,
) -> Result<ObjectId> {
    let page_width_pt = mm_to_pt(layout.page_width_mm);
    let page_height_pt = mm_to_pt(layout.page_height_mm);

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(page_width_pt),
            Object::Real(page_height_pt),
        ]),
    );

    let mut content = String::new();
    for placement in placements {
        content.push_str(&generate_placement_command(
            IMAGE_RESOURCE_NAME,
            &placement.draw,
            layout.page_height_mm,
        ));
    }
    content.push_str(&generate_cut_lines(
        separators,
        layout.page_height_mm,
        &CutLineStyle::default(),
    ));

    let mut xobjects = Dictionary::new();
    xobjects.set(IMAGE_RESOURCE_NAME, Object::Reference(image_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Generate the content stream command that paints the image into `rect`.
///
/// Image XObjects occupy the unit square, so the transform scales it to the
/// draw size and moves its bottom-left corner into place.
fn generate_placement_command(xobject_name: &str, rect: &Rect, page_height_mm: f32) -> String {
    format!(
        "q {} 0 0 {} {} {} cm /{} Do Q\n",
        mm_to_pt(rect.width),
        mm_to_pt(rect.height),
        mm_to_pt(rect.x),
        mm_to_pt(page_height_mm - rect.bottom()),
        xobject_name
    )
}
