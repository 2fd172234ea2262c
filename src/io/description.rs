//! Human-readable folding instructions
//!
//! A pure formatter over the pattern's read surface: the ordered fold list,
//! the seed triangle's clockwise flag, the layer count, and a palette. The
//! output is the instruction sheet a player folds their strip of triangles
//! from; it never inspects the occupancy map.

use std::fmt::Write as _;

use crate::algorithm::folding::{FoldDirection, FoldResult};
use crate::io::palette::Palette;

/// Render folding instructions for a generated pattern
///
/// Triangles past the palette's end are labelled with their sequence number
/// only; the CLI caps the target length to the palette, so that case only
/// arises for callers driving the library directly.
pub fn describe_pattern(
    folds: &[FoldResult],
    start_clockwise: bool,
    layers_count: usize,
    palette: &Palette,
) -> String {
    let mut text = String::new();

    let plural = if layers_count == 1 { "layer" } else { "layers" };
    let _ = writeln!(
        text,
        "Pattern of {} triangles across {layers_count} {plural}.",
        folds.len()
    );
    let direction = if start_clockwise {
        "clockwise"
    } else {
        "counter-clockwise"
    };
    let _ = writeln!(text, "The strip starts folding {direction}.");

    for (step, fold) in folds.iter().enumerate() {
        let color = palette
            .color(fold.triangle.index)
            .map_or("uncolored", |c| c.name);
        let action = if step == 0 {
            "starts at the center"
        } else {
            fold_phrase(fold.fold)
        };
        let _ = writeln!(text, "{:>3}. {color} {action}", step + 1);
    }

    text
}

/// Instruction phrase for one fold direction
const fn fold_phrase(fold: FoldDirection) -> &'static str {
    match fold {
        FoldDirection::Flat => "unfolds flat alongside the previous triangle",
        FoldDirection::LayerUp => "folds up onto the layer above",
        FoldDirection::LayerDown => "folds down onto the layer below",
    }
}

#[cfg(test)]
mod tests {
    use super::describe_pattern;
    use crate::algorithm::folding::{FoldDirection, FoldResult, Rotation, Triangle};
    use crate::io::palette::palette_by_tag;
    use crate::spatial::coordinates::GridPos;

    fn chain() -> Vec<FoldResult> {
        let folds = [
            FoldDirection::Flat,
            FoldDirection::Flat,
            FoldDirection::LayerUp,
            FoldDirection::LayerDown,
        ];
        folds
            .iter()
            .enumerate()
            .map(|(index, &fold)| FoldResult {
                position: GridPos::new(0, 2, 2),
                triangle: Triangle {
                    rotation: Rotation::TopRight,
                    clockwise: false,
                    index,
                },
                fold,
            })
            .collect()
    }

    #[test]
    fn test_description_lists_every_triangle() {
        let Ok(palette) = palette_by_tag("pink-blue-purple-green") else {
            unreachable!("shipped tag must resolve");
        };
        let text = describe_pattern(&chain(), true, 2, &palette);

        assert!(text.contains("Pattern of 4 triangles across 2 layers."));
        assert!(text.contains("starts folding clockwise"));
        assert!(text.contains("1. pink starts at the center"));
        assert!(text.contains("3. pink folds up onto the layer above"));
        assert!(text.contains("4. pink folds down onto the layer below"));
        assert_eq!(text.lines().count(), 2 + 4);
    }

    #[test]
    fn test_indices_past_palette_fall_back() {
        let Ok(palette) = palette_by_tag("pink-blue-purple-green") else {
            unreachable!("shipped tag must resolve");
        };
        let mut folds = chain();
        if let Some(last) = folds.last_mut() {
            last.triangle.index = 25;
        }
        let text = describe_pattern(&folds, false, 1, &palette);
        assert!(text.contains("counter-clockwise"));
        assert!(text.contains("uncolored"));
    }
}
