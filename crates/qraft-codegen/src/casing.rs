//! Identifier-casing conversions between GraphQL names (`camelCase`,
//! `snake_case`, `SCREAMING_SNAKE`) and the Rust identifier forms used in
//! emitted code.

/// Converts a GraphQL name to `PascalCase`.
///
/// Word boundaries are `_` separators and lower-to-upper transitions;
/// runs of uppercase (`NEWHOPE`, `IDValue`) are treated as one word.
pub fn to_pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for word in split_words(name) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(|ch| ch.to_lowercase()));
        }
    }
    out
}

/// Converts a GraphQL name to `snake_case`.
pub fn to_snake_case(name: &str) -> String {
    let words = split_words(name);
    let mut out = String::with_capacity(name.len() + words.len());
    for (idx, word) in words.iter().enumerate() {
        if idx > 0 {
            out.push('_');
        }
        out.extend(word.chars().flat_map(|ch| ch.to_lowercase()));
    }
    out
}

/// Converts a GraphQL name to `SCREAMING_SNAKE_CASE`.
pub fn to_screaming_snake_case(name: &str) -> String {
    let words = split_words(name);
    let mut out = String::with_capacity(name.len() + words.len());
    for (idx, word) in words.iter().enumerate() {
        if idx > 0 {
            out.push('_');
        }
        out.extend(word.chars().flat_map(|ch| ch.to_uppercase()));
    }
    out
}

fn split_words(name: &str) -> Vec<String> {
    let mut words: Vec<String> = vec![];
    let mut current = String::new();
    let mut prev_was_lower = false;
    for ch in name.chars() {
        if ch == '_' || ch == '-' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_was_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_was_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_was_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_from_camel() {
        assert_eq!(to_pascal_case("getRocketResults"), "GetRocketResults");
    }

    #[test]
    fn pascal_case_from_snake() {
        assert_eq!(to_pascal_case("cost_per_launch"), "CostPerLaunch");
    }

    #[test]
    fn pascal_case_from_screaming() {
        assert_eq!(to_pascal_case("NEW_HOPE"), "NewHope");
        assert_eq!(to_pascal_case("NEWHOPE"), "Newhope");
    }

    #[test]
    fn pascal_case_preserves_pascal() {
        assert_eq!(to_pascal_case("RocketsResult"), "RocketsResult");
    }

    #[test]
    fn snake_case_from_camel() {
        assert_eq!(to_snake_case("costPerLaunch"), "cost_per_launch");
        assert_eq!(to_snake_case("homePlanet"), "home_planet");
    }

    #[test]
    fn snake_case_preserves_snake() {
        assert_eq!(to_snake_case("cost_per_launch"), "cost_per_launch");
    }

    #[test]
    fn snake_case_from_pascal() {
        assert_eq!(to_snake_case("RocketsResult"), "rockets_result");
    }

    #[test]
    fn screaming_snake_from_camel() {
        assert_eq!(
            to_screaming_snake_case("getRocketResults"),
            "GET_ROCKET_RESULTS",
        );
    }

    #[test]
    fn single_word_round_trips() {
        assert_eq!(to_pascal_case("name"), "Name");
        assert_eq!(to_snake_case("name"), "name");
        assert_eq!(to_screaming_snake_case("name"), "NAME");
    }
}
