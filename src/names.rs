//! Small deterministic text algorithms used by consumers of the graph:
//! deriving identifiers from route paths, the singular/plural heuristic,
//! and the resolver-method naming convention.

/// Derives a capitalized, concatenated identifier from a route path.
///
/// The path is split on `/` and empty segments are dropped. Literal
/// segments are capitalized and appended. A `:param` segment appends
/// `By` + the capitalized parameter name, unless the next segment is also a
/// parameter, in which case the current one is a filtering parent and is
/// skipped.
pub fn api_name(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
    let mut name = String::new();

    for (i, part) in parts.iter().enumerate() {
        match part.strip_prefix(':') {
            Some(param) => {
                let next_is_param = parts.get(i + 1).map_or(false, |p| p.starts_with(':'));
                if next_is_param {
                    continue;
                }
                name.push_str("By");
                name.push_str(&capitalize(param));
            }
            None => name.push_str(&capitalize(part)),
        }
    }

    name
}

/// Suffix-based guess at whether a word is singular. Used by generators to
/// pick identifier pluralization; it is a heuristic, not linguistics.
pub fn is_singular(word: &str) -> bool {
    let word = word.to_lowercase();

    if word.ends_with("ss") {
        return true;
    }

    if word.ends_with("us") || word.ends_with("is") {
        return true;
    }

    if word.ends_with("ies") || word.ends_with("es") {
        return false;
    }

    if word.ends_with("id") {
        return true;
    }

    if word.ends_with("ids") {
        return false;
    }

    if let Some(stem) = word.strip_suffix('s') {
        if let Some(second_last) = stem.chars().last() {
            return "aeiou".contains(second_last);
        }
    }

    true
}

/// Uppercases the first character of `word`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The method name a relationship field resolves through:
/// `Resolve<Type><Field>`. This convention is the only coupling between the
/// graph and the downstream runtime resolver.
pub fn resolver_method_name(type_name: &str, field_name: &str) -> String {
    format!("Resolve{}{}", capitalize(type_name), capitalize(field_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_name_literal_segments() {
        assert_eq!(api_name("/api/v1/comments"), "ApiV1Comments");
    }

    #[test]
    fn api_name_trailing_param() {
        assert_eq!(api_name("/api/v1/comments/:commentID"), "ApiV1CommentsByCommentID");
    }

    #[test]
    fn api_name_param_in_middle() {
        assert_eq!(
            api_name("/api/v1/users/:userID/comments"),
            "ApiV1UsersByUserIDComments"
        );
    }

    #[test]
    fn api_name_skips_param_followed_by_param() {
        assert_eq!(api_name("/posts/:postID/:commentID"), "PostsByCommentID");
    }

    #[test]
    fn api_name_empty_segments_dropped() {
        assert_eq!(api_name("//api//comments/"), "ApiComments");
        assert_eq!(api_name(""), "");
    }

    #[test]
    fn singular_double_s() {
        assert!(is_singular("boss"));
        assert!(is_singular("address"));
    }

    #[test]
    fn singular_us_is_suffixes() {
        assert!(is_singular("status"));
        assert!(is_singular("analysis"));
    }

    #[test]
    fn plural_ies_es_suffixes() {
        assert!(!is_singular("stories"));
        assert!(!is_singular("boxes"));
    }

    #[test]
    fn id_and_ids() {
        assert!(is_singular("id"));
        assert!(is_singular("userid"));
        assert!(!is_singular("ids"));
        assert!(!is_singular("userids"));
    }

    #[test]
    fn trailing_s_vowel_vs_consonant() {
        // vowel before the s reads as singular
        assert!(is_singular("gas"));
        // consonant before the s reads as plural
        assert!(!is_singular("comments"));
        assert!(!is_singular("users"));
    }

    #[test]
    fn default_is_singular() {
        assert!(is_singular("comment"));
        assert!(is_singular("user"));
        assert!(is_singular(""));
    }

    #[test]
    fn capitalize_basic() {
        assert_eq!(capitalize("comments"), "Comments");
        assert_eq!(capitalize("userID"), "UserID");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("v1"), "V1");
    }

    #[test]
    fn resolver_method_names() {
        assert_eq!(resolver_method_name("post", "comments"), "ResolvePostComments");
        assert_eq!(resolver_method_name("Comment", "author"), "ResolveCommentAuthor");
    }
}
