//! Name search over already-fetched lists.

/// Shorter terms return nothing rather than the whole list.
pub const MIN_SEARCH_LEN: usize = 3;

/// Case-insensitive substring match on a person's name.
///
/// Returns `false` for terms shorter than [`MIN_SEARCH_LEN`] characters
/// (after trimming).
pub fn name_matches(name: &str, term: &str) -> bool {
    let term = term.trim();
    if term.chars().count() < MIN_SEARCH_LEN {
        return false;
    }
    name.to_lowercase().contains(&term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_terms_never_match() {
        assert!(!name_matches("Ana Souza", "an"));
        assert!(!name_matches("Ana Souza", "  an "));
    }

    #[test]
    fn match_ignores_case() {
        assert!(name_matches("Ana Souza", "SOU"));
        assert!(name_matches("João Pereira", "joão"));
        assert!(!name_matches("Ana Souza", "silva"));
    }
}
