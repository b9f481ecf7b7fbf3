//! Axis drawing: a domain line plus one `g.tick` per tick.

use super::svg::{SvgWriter, num};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

/// A positioned axis; tick positions are already in pixels.
#[derive(Debug, Clone)]
pub struct Axis<'a> {
    pub id: &'a str,
    pub orient: Orient,
    pub translate: (f64, f64),
    /// Pixel extent of the domain line along the axis.
    pub range: (f64, f64),
    pub ticks: Vec<(f64, String)>,
}

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

pub fn write_axis(w: &mut SvgWriter, axis: &Axis<'_>) {
    let (tx, ty) = axis.translate;
    w.open(
        "g",
        &[
            ("id", axis.id.to_string()),
            ("class", "axis".to_string()),
            ("transform", format!("translate({}, {})", num(tx), num(ty))),
        ],
    );

    let (r0, r1) = axis.range;
    let domain_path = match axis.orient {
        Orient::Bottom => format!("M{},0H{}", num(r0), num(r1)),
        Orient::Left => format!("M0,{}V{}", num(r0), num(r1)),
    };
    w.empty(
        "path",
        &[
            ("class", "domain".to_string()),
            ("stroke", "currentColor".to_string()),
            ("d", domain_path),
        ],
    );

    for (pos, label) in &axis.ticks {
        let transform = match axis.orient {
            Orient::Bottom => format!("translate({}, 0)", num(*pos)),
            Orient::Left => format!("translate(0, {})", num(*pos)),
        };
        w.open("g", &[("class", "tick".to_string()), ("transform", transform)]);
        match axis.orient {
            Orient::Bottom => {
                w.empty("line", &[("stroke", "currentColor".to_string()), ("y2", num(TICK_SIZE))]);
                w.text(
                    "text",
                    &[
                        ("fill", "currentColor".to_string()),
                        ("y", num(TICK_SIZE + TICK_PADDING)),
                        ("dy", "0.71em".to_string()),
                        ("text-anchor", "middle".to_string()),
                    ],
                    label,
                );
            }
            Orient::Left => {
                w.empty("line", &[("stroke", "currentColor".to_string()), ("x2", num(-TICK_SIZE))]);
                w.text(
                    "text",
                    &[
                        ("fill", "currentColor".to_string()),
                        ("x", num(-(TICK_SIZE + TICK_PADDING))),
                        ("dy", "0.32em".to_string()),
                        ("text-anchor", "end".to_string()),
                    ],
                    label,
                );
            }
        }
        w.close("g");
    }

    w.close("g");
}
