/// Color used for any type label without a dedicated entry.
pub const DEFAULT_TYPE_COLOR: &str = "#A8A878";

/// Map a capitalized type label to its display color.
///
/// Matching is case-sensitive against the capitalized form produced by
/// [`crate::capitalize`], so `"water"` falls through to the default.
pub fn color_for(type_label: &str) -> &'static str {
    match type_label {
        "Steel" => "#B8B8D0",
        "Fighting" => "#C03028",
        "Dragon" => "#7038F8",
        "Water" => "#6890F0",
        "Electric" => "#F8D030",
        "Fairy" => "#EE99AC",
        "Fire" => "#F08030",
        "Ice" => "#98D8D8",
        "Bug" => "#A8B820",
        "Normal" => "#A8A878",
        "Grass" => "#78C850",
        "Poison" => "#A040A0",
        "Psychic" => "#F85888",
        "Rock" => "#B8A038",
        "Ground" => "#E0C068",
        "Ghost" => "#705898",
        "Dark" => "#705848",
        "Flying" => "#A890F0",
        _ => DEFAULT_TYPE_COLOR,
    }
}

#[cfg(test)]
#[path = "tests/colors_tests.rs"]
mod tests;
