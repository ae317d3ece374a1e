//! Rendering rectangles as SVG, for looking at what the sweep did.

use svg::{
    node::element::{Group, Rectangle},
    Document,
};

use crate::{measure::bounding_box, Coord, Rect};

const COLORS: [&str; 9] = [
    "#005F73", "#0A9396", "#94D2BD", "#E9D8A6", "#EE9B00", "#CA6702", "#BB3E03", "#AE2012",
    "#9B2226",
];

fn rect_group(rects: &[Rect<impl Coord>], x_off: f64, stroke_width: f64, fill: bool) -> Group {
    let mut group = Group::new();
    for (idx, r) in rects.iter().enumerate() {
        let k = r.to_kurbo();
        let mut elt = Rectangle::new()
            .set("x", k.x0 + x_off)
            .set("y", k.y0)
            .set("width", k.width())
            .set("height", k.height())
            .set("stroke", "black")
            .set("stroke-width", stroke_width);
        elt = if fill {
            elt.set("fill", COLORS[idx % COLORS.len()])
        } else {
            elt.set("fill", "none").set("opacity", 0.5)
        };
        group = group.add(elt);
    }
    group
}

/// Draws `input` and `output` side by side.
///
/// The input rectangles are drawn as outlines on the left; the output
/// rectangles are filled with alternating colors on the right, so that the
/// pieces are easy to tell apart.
pub fn dump_svg<T: Coord>(input: &[Rect<T>], output: &[Rect<T>]) -> Document {
    let Some(bbox) = bounding_box(input.iter().chain(output)) else {
        return Document::new();
    };
    let bbox = bbox.to_kurbo();

    let pad = 1.0 + bbox.width().max(bbox.height()) / 32.0;
    let one_width = bbox.width() + 2.0 * pad;
    let stroke_width = bbox.width().max(bbox.height()).max(1.0) / 512.0;

    Document::new()
        .set(
            "viewBox",
            (
                bbox.x0 - pad,
                bbox.y0 - pad,
                one_width * 2.0,
                bbox.height() + 2.0 * pad,
            ),
        )
        .add(rect_group(input, 0.0, stroke_width, false))
        .add(rect_group(output, one_width, stroke_width, true))
}
