//! Eye styles, body patterns, accessories, and iris colors.
//!
//! List order matters: the first entry of each list is what an all-zero
//! seed selects, so `none` leads both the pattern and accessory lists.

use crate::color::parse_color_lenient;
use crate::grid::Cell;
use crate::models::{Accessory, BodyPattern, EyeCell, EyeStyle, PatternShape, NONE_TRAIT};

const O: EyeCell = EyeCell::Clear;
const W: EyeCell = EyeCell::White;
const B: EyeCell = EyeCell::Black;
const C: EyeCell = EyeCell::Iris;

/// Eye templates, 4x4 each.
pub const EYE_STYLES: &[EyeStyle] = &[
    EyeStyle { name: "round", pattern: &[&[O, W, W, O], &[W, W, B, W], &[W, W, B, W], &[O, W, W, O]] },
    EyeStyle { name: "wide", pattern: &[&[W, W, W, W], &[W, C, B, W], &[W, C, B, W], &[W, W, W, W]] },
    EyeStyle { name: "angry", pattern: &[&[O, O, O, O], &[O, W, W, O], &[W, C, B, W], &[W, W, W, W]] },
    EyeStyle { name: "cute", pattern: &[&[O, W, W, O], &[W, B, B, W], &[W, B, W, W], &[O, W, W, O]] },
    EyeStyle { name: "sleepy", pattern: &[&[O, O, O, O], &[O, O, O, O], &[W, W, B, W], &[W, W, W, W]] },
];

/// Body markings tinted with the palette accent.
pub const BODY_PATTERNS: &[BodyPattern] = &[
    BodyPattern { name: NONE_TRAIT, shape: PatternShape::Plain },
    BodyPattern {
        name: "spots",
        shape: PatternShape::Spots(&[(3, 5), (7, 4), (5, 8), (9, 6), (4, 10), (8, 9)]),
    },
    BodyPattern {
        name: "stripes",
        shape: PatternShape::Bands { rows: &[4, 7, 10, 13], start_x: 2, width: 8 },
    },
    BodyPattern {
        name: "diamond",
        shape: PatternShape::Spots(&[
            (6, 5),
            (5, 6),
            (7, 6),
            (4, 7),
            (8, 7),
            (5, 8),
            (7, 8),
            (6, 9),
        ]),
    },
    BodyPattern {
        name: "zigzag",
        shape: PatternShape::Spots(&[
            (2, 6),
            (3, 5),
            (4, 6),
            (5, 5),
            (6, 6),
            (7, 5),
            (8, 6),
            (9, 5),
        ]),
    },
];

/// Raw accessory definition with literal hex colors.
struct AccessoryDef {
    name: &'static str,
    template: &'static [&'static [Option<&'static str>]],
    offset_x: i32,
    offset_y: i32,
}

const GOLD: Option<&str> = Some("#ffd700");
const SHINE: Option<&str> = Some("#fff44f");
const PATCH: Option<&str> = Some("#333");
const PATCH_DARK: Option<&str> = Some("#1a1a1a");
const CLOTH: Option<&str> = Some("#cc0000");
const CLOTH_DARK: Option<&str> = Some("#990000");
const FILM: Option<&str> = Some("#aaddff");
const GLINT: Option<&str> = Some("#ffffff");
const SCAR: Option<&str> = Some("#aa3333");

const ACCESSORY_DEFS: &[AccessoryDef] = &[
    AccessoryDef { name: NONE_TRAIT, template: &[], offset_x: 0, offset_y: 0 },
    AccessoryDef {
        name: "crown",
        template: &[
            &[None, GOLD, None, GOLD, None],
            &[GOLD, GOLD, GOLD, GOLD, GOLD],
            &[GOLD, SHINE, GOLD, SHINE, GOLD],
        ],
        offset_x: -2,
        offset_y: -3,
    },
    AccessoryDef {
        name: "eyepatch",
        template: &[
            &[None, PATCH, PATCH, None],
            &[PATCH, PATCH_DARK, PATCH_DARK, PATCH],
            &[None, PATCH, PATCH, None],
        ],
        offset_x: 6,
        offset_y: 0,
    },
    AccessoryDef {
        name: "bandana",
        template: &[
            &[CLOTH, CLOTH, CLOTH, CLOTH, CLOTH, CLOTH],
            &[CLOTH_DARK, CLOTH, CLOTH, CLOTH, CLOTH, CLOTH_DARK],
            &[None, None, None, None, CLOTH, CLOTH],
        ],
        offset_x: -2,
        offset_y: -2,
    },
    AccessoryDef {
        name: "bubble",
        template: &[&[None, FILM, None], &[FILM, GLINT, FILM], &[None, FILM, None]],
        offset_x: 10,
        offset_y: -3,
    },
    AccessoryDef {
        name: "scar",
        template: &[&[SCAR, None, None], &[None, SCAR, None], &[None, None, SCAR]],
        offset_x: 2,
        offset_y: 1,
    },
];

/// Iris colors substituted for the `C` eye code.
pub const IRIS_COLORS: &[&str] = &[
    "#2ecc71", // green
    "#3498db", // blue
    "#e74c3c", // red
    "#f39c12", // amber
    "#9b59b6", // purple
    "#1abc9c", // teal
    "#e67e22", // orange
];

/// Parse the accessory table into drawable templates.
pub fn accessories() -> Vec<Accessory> {
    ACCESSORY_DEFS
        .iter()
        .map(|def| Accessory {
            name: def.name,
            template: def
                .template
                .iter()
                .map(|row| row.iter().map(|hex| hex.map(parse_color_lenient)).collect::<Vec<Cell>>())
                .collect(),
            offset_x: def.offset_x,
            offset_y: def.offset_y,
        })
        .collect()
}
