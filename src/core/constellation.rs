use crate::core::constants::*;
use glam::DVec2;

/// A letter of the constellation and its star offsets from the layout center.
///
/// Offsets are in unscaled CSS pixels; y grows downward.
#[derive(Debug)]
pub struct Glyph {
    pub letter: char,
    pub points: &'static [[f64; 2]],
}

/// "HIMANI", left to right. Point indices used by `NAME_LINKS` count through
/// the glyphs in this order.
pub const NAME_GLYPHS: [Glyph; 6] = [
    Glyph {
        letter: 'H',
        points: &[
            // left stem
            [-250.0, -50.0],
            [-250.0, -35.0],
            [-250.0, -20.0],
            [-250.0, -5.0],
            [-250.0, 10.0],
            [-250.0, 25.0],
            [-250.0, 40.0],
            [-250.0, 50.0],
            // bar
            [-240.0, 0.0],
            [-230.0, 0.0],
            [-220.0, 0.0],
            [-210.0, 0.0],
            // right stem
            [-200.0, -50.0],
            [-200.0, -35.0],
            [-200.0, -20.0],
            [-200.0, -5.0],
            [-200.0, 10.0],
            [-200.0, 25.0],
            [-200.0, 40.0],
            [-200.0, 50.0],
        ],
    },
    Glyph {
        letter: 'I',
        points: &[
            [-150.0, -50.0],
            [-150.0, -35.0],
            [-150.0, -20.0],
            [-150.0, -5.0],
            [-150.0, 10.0],
            [-150.0, 25.0],
            [-150.0, 40.0],
            [-150.0, 50.0],
        ],
    },
    Glyph {
        letter: 'M',
        points: &[
            // left stem, bottom up
            [-100.0, 50.0],
            [-100.0, 35.0],
            [-100.0, 20.0],
            [-100.0, 5.0],
            [-100.0, -10.0],
            [-100.0, -25.0],
            [-100.0, -40.0],
            [-100.0, -50.0],
            // down to the middle
            [-92.0, -35.0],
            [-84.0, -20.0],
            [-76.0, -5.0],
            [-75.0, 0.0],
            // back up
            [-68.0, -5.0],
            [-60.0, -20.0],
            [-52.0, -35.0],
            // right stem, top down
            [-50.0, -50.0],
            [-50.0, -40.0],
            [-50.0, -25.0],
            [-50.0, -10.0],
            [-50.0, 5.0],
            [-50.0, 20.0],
            [-50.0, 35.0],
            [-50.0, 50.0],
        ],
    },
    Glyph {
        letter: 'A',
        points: &[
            // left leg, bottom up
            [20.0, 50.0],
            [22.0, 35.0],
            [24.0, 20.0],
            [26.0, 5.0],
            [28.0, -10.0],
            [30.0, -25.0],
            [32.0, -40.0],
            [35.0, -50.0],
            // bar
            [25.0, 10.0],
            [30.0, 10.0],
            [35.0, 10.0],
            [40.0, 10.0],
            [45.0, 10.0],
            // right leg, top down
            [38.0, -40.0],
            [40.0, -25.0],
            [42.0, -10.0],
            [44.0, 5.0],
            [46.0, 20.0],
            [48.0, 35.0],
            [50.0, 50.0],
        ],
    },
    Glyph {
        letter: 'N',
        points: &[
            // left stem, bottom up
            [100.0, 50.0],
            [100.0, 35.0],
            [100.0, 20.0],
            [100.0, 5.0],
            [100.0, -10.0],
            [100.0, -25.0],
            [100.0, -40.0],
            [100.0, -50.0],
            // diagonal
            [110.0, -35.0],
            [120.0, -20.0],
            [125.0, -5.0],
            [130.0, 5.0],
            [140.0, 20.0],
            // right stem
            [150.0, 35.0],
            [150.0, 50.0],
            [150.0, 20.0],
            [150.0, 5.0],
            [150.0, -10.0],
            [150.0, -25.0],
            [150.0, -40.0],
            [150.0, -50.0],
        ],
    },
    Glyph {
        letter: 'I',
        points: &[
            [200.0, -50.0],
            [200.0, -35.0],
            [200.0, -20.0],
            [200.0, -5.0],
            [200.0, 10.0],
            [200.0, 25.0],
            [200.0, 40.0],
            [200.0, 50.0],
        ],
    },
];

/// Star-to-star links drawn after all stars are placed, in reveal order.
pub const NAME_LINKS: &[(usize, usize)] = &[
    // H
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (4, 5),
    (5, 6),
    (6, 7),
    (4, 8),
    (8, 9),
    (9, 10),
    (10, 11),
    (12, 13),
    (13, 14),
    (14, 15),
    (15, 16),
    (16, 17),
    (17, 18),
    (18, 19),
    (11, 16),
    // I
    (20, 21),
    (21, 22),
    (22, 23),
    (23, 24),
    (24, 25),
    (25, 26),
    (26, 27),
    // M
    (28, 29),
    (29, 30),
    (30, 31),
    (31, 32),
    (32, 33),
    (33, 34),
    (34, 35),
    (35, 36),
    (36, 37),
    (37, 38),
    (38, 39),
    (39, 40),
    (40, 41),
    (41, 42),
    (42, 43),
    (43, 44),
    (44, 45),
    (45, 46),
    (46, 47),
    (47, 48),
    (48, 49),
    (49, 50),
    // A
    (51, 52),
    (52, 53),
    (53, 54),
    (54, 55),
    (55, 56),
    (56, 57),
    (57, 58),
    (59, 60),
    (60, 61),
    (61, 62),
    (62, 63),
    (58, 64),
    (64, 65),
    (65, 66),
    (66, 67),
    (67, 68),
    (68, 69),
    (69, 70),
    (59, 63),
    // N
    (71, 72),
    (72, 73),
    (73, 74),
    (74, 75),
    (75, 76),
    (76, 77),
    (77, 78),
    (78, 79),
    (79, 80),
    (80, 81),
    (81, 82),
    (82, 83),
    (83, 84),
    (84, 85),
    (85, 86),
    (86, 87),
    (87, 88),
    (88, 89),
    (89, 90),
    (90, 91),
    // I
    (92, 93),
    (93, 94),
    (94, 95),
    (95, 96),
    (96, 97),
    (97, 98),
    (98, 99),
];

/// Layout scale for the viewport width; narrow screens get a smaller name.
#[inline]
pub fn viewport_scale(viewport_width: f64) -> f64 {
    if viewport_width < SMALL_VIEWPORT_WIDTH {
        SMALL_VIEWPORT_SCALE
    } else {
        1.0
    }
}

/// Flatten the glyphs into screen-space points around `center`.
pub fn layout(glyphs: &[Glyph], center: DVec2, scale: f64) -> Vec<DVec2> {
    glyphs
        .iter()
        .flat_map(|g| g.points.iter())
        .map(|&[x, y]| center + DVec2::new(x, y) * scale)
        .collect()
}

/// Placement of a line element joining two stars.
///
/// The element is anchored at `origin` (its left/top), stretched to `length`
/// pixels and rotated by `angle_deg` about that anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineGeometry {
    pub origin: DVec2,
    pub length: f64,
    pub angle_deg: f64,
}

impl LineGeometry {
    pub fn between(from: DVec2, to: DVec2) -> Self {
        let d = to - from;
        Self {
            origin: from,
            length: d.length(),
            angle_deg: d.y.atan2(d.x).to_degrees(),
        }
    }
}

/// Geometry for link `(a, b)`, or `None` when either index has no star.
pub fn link_geometry(points: &[DVec2], link: (usize, usize)) -> Option<LineGeometry> {
    let from = points.get(link.0)?;
    let to = points.get(link.1)?;
    Some(LineGeometry::between(*from, *to))
}

/// A prepared name constellation: star positions plus the links between them.
pub struct Constellation {
    pub points: Vec<DVec2>,
    pub links: Vec<(usize, usize)>,
}

impl Constellation {
    pub fn new(points: Vec<DVec2>, links: &[(usize, usize)]) -> Self {
        Self {
            points,
            links: links.to_vec(),
        }
    }

    /// Delay after the build starts before the first line appears.
    pub fn lines_start(&self) -> std::time::Duration {
        DOT_STAGGER * self.points.len() as u32 + LINES_AFTER_DOTS
    }

    /// Geometry of the `i`-th link; `None` for unknown links or dangling indices.
    pub fn line(&self, i: usize) -> Option<LineGeometry> {
        let link = *self.links.get(i)?;
        link_geometry(&self.points, link)
    }
}
