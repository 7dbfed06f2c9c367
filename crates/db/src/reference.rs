//! Static reference data reported alongside every todos result

use crate::models::{Colour, PriorityLevel};
use crate::view::{ColourDto, PriorityLevelDto};

/// One descriptor per priority level, in declaration order
pub fn priority_levels() -> Vec<PriorityLevelDto> {
    PriorityLevel::ALL
        .iter()
        .map(|level| PriorityLevelDto {
            value: level.code(),
            name: level.as_str().to_string(),
        })
        .collect()
}

/// The fixed colour palette
pub fn colours() -> Vec<ColourDto> {
    Colour::ALL
        .iter()
        .map(|colour| ColourDto {
            colour: colour.as_str().to_string(),
            color_code: colour.hex_code().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_levels_cover_enumeration() {
        let levels = priority_levels();
        let pairs: Vec<(i64, &str)> = levels.iter().map(|l| (l.value, l.name.as_str())).collect();
        assert_eq!(
            pairs,
            vec![(0, "None"), (1, "Low"), (2, "Medium"), (3, "High")]
        );
    }

    #[test]
    fn test_colours_fixed_palette() {
        let palette = colours();
        let pairs: Vec<(&str, &str)> = palette
            .iter()
            .map(|c| (c.colour.as_str(), c.color_code.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("White", "#FFFFFF"),
                ("Red", "#FF5733"),
                ("Orange", "#FFC300"),
                ("Yellow", "#FFFF66"),
                ("Green", "#CCFF99"),
                ("Blue", "#6666FF"),
                ("Purple", "#9966CC"),
                ("Grey", "#999999"),
            ]
        );
    }

    #[test]
    fn test_reference_data_is_reproducible() {
        assert_eq!(priority_levels(), priority_levels());
        assert_eq!(colours(), colours());
    }
}
