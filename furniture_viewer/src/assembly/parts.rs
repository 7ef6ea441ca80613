/// Cut list shown next to the model: the boards needed for each piece of
/// furniture, as `length x width`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Part {
    pub name: &'static str,
    pub length: f32,
    pub width: f32,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} x {}", self.name, self.length, self.width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartGroup {
    pub name: &'static str,
    pub parts: &'static [Part],
}

const TABLE_PARTS: &[Part] = &[
    Part { name: "top", length: 95.0, width: 40.0 },
    Part { name: "legs (2)", length: 26.5, width: 20.0 },
    Part { name: "leg bases (2)", length: 29.0, width: 4.5 },
    Part { name: "spanners (2)", length: 45.5, width: 6.0 },
];

const BENCH_PARTS: &[Part] = &[
    Part { name: "top", length: 95.0, width: 15.0 },
    Part { name: "spanner", length: 68.0, width: 6.0 },
    Part { name: "legs (2)", length: 16.5, width: 15.0 },
];

/// Every group, in display order.
pub const PART_CATALOG: &[PartGroup] = &[
    PartGroup { name: "table", parts: TABLE_PARTS },
    PartGroup { name: "bench", parts: BENCH_PARTS },
];

pub fn find_group(name: &str) -> Option<&'static PartGroup> {
    PART_CATALOG.iter().find(|group| group.name == name)
}

/// Plain-text rendering: each group name followed by one line per part.
pub fn render_catalog(catalog: &[PartGroup]) -> String {
    let mut out = String::new();
    for group in catalog {
        out.push_str(group.name);
        out.push('\n');
        for part in group.parts {
            out.push_str(&format!("  {}\n", part));
        }
    }
    out
}

#[cfg(test)]
#[path = "parts_tests.rs"]
mod tests;
