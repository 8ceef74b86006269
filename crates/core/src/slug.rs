//! URL slug generation for meal titles.

/// Generate a URL-safe slug from a meal title.
///
/// Transliterates non-ASCII text (`é` becomes `e`, `ß` becomes `ss`), then
/// lower-cases, spells `&` as `and`, drops apostrophes, replaces every other
/// run of non-alphanumeric characters with a single hyphen, and trims
/// hyphens at both ends.
///
/// ```
/// use mealshare_core::slug::slugify;
///
/// assert_eq!(slugify("Juicy Cheese Burger"), "juicy-cheese-burger");
/// assert_eq!(slugify("Mac & Cheese"), "mac-and-cheese");
/// assert_eq!(slugify("Grandma's Pie!"), "grandmas-pie");
/// assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in deunicode::deunicode(title).chars() {
        match c {
            '\'' => {}
            '&' => {
                push_word(&mut slug, &mut pending_hyphen, "and");
                pending_hyphen = true;
            }
            c if c.is_ascii_alphanumeric() => {
                let lower = c.to_ascii_lowercase();
                push_word(&mut slug, &mut pending_hyphen, lower.encode_utf8(&mut [0; 4]));
            }
            _ => pending_hyphen = true,
        }
    }

    slug
}

/// Append `word`, emitting a single hyphen first if a separator is pending
/// and the slug is not empty. Leading separators are swallowed.
fn push_word(slug: &mut String, pending_hyphen: &mut bool, word: &str) {
    if *pending_hyphen && !slug.is_empty() {
        slug.push('-');
    }
    *pending_hyphen = false;
    slug.push_str(word);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_title() {
        assert_eq!(slugify("Juicy Cheese Burger"), "juicy-cheese-burger");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(slugify("  Spicy   Curry \t Deluxe  "), "spicy-curry-deluxe");
    }

    #[test]
    fn punctuation_becomes_single_hyphen() {
        assert_eq!(slugify("Pizza -- (Margherita)!"), "pizza-margherita");
    }

    #[test]
    fn ampersand_spelled_out() {
        assert_eq!(slugify("Fish & Chips"), "fish-and-chips");
        assert_eq!(slugify("&Co"), "and-co");
    }

    #[test]
    fn apostrophes_dropped() {
        assert_eq!(slugify("Mom's Best Pancakes"), "moms-best-pancakes");
        assert_eq!(slugify("Chef\u{2019}s Special"), "chefs-special");
    }

    #[test]
    fn digits_kept() {
        assert_eq!(slugify("5 Minute Eggs"), "5-minute-eggs");
    }

    #[test]
    fn accented_letters_transliterated() {
        assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
        assert_eq!(slugify("Jalapeño Poppers"), "jalapeno-poppers");
        assert_eq!(slugify("Käsespätzle"), "kasespatzle");
    }

    #[test]
    fn accented_title_does_not_collide_with_stripped_one() {
        assert_eq!(slugify("Café"), "cafe");
        assert_ne!(slugify("Café"), slugify("Caf!"));
    }

    #[test]
    fn only_symbols_yields_empty() {
        assert_eq!(slugify("!!! ???"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn output_is_lowercase_without_whitespace() {
        let titles = [
            "Hearty Tomato SOUP",
            "Wiener Schnitzel\nwith Fries",
            "Thai Green Curry\u{00a0}(hot)",
            "   ",
        ];
        for title in titles {
            let slug = slugify(title);
            assert_eq!(slug, slug.to_lowercase(), "slug for {title:?} not lowercase");
            assert!(
                !slug.chars().any(char::is_whitespace),
                "slug for {title:?} contains whitespace: {slug:?}"
            );
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            assert!(!slug.contains("--"));
        }
    }

    #[test]
    fn deterministic() {
        let title = "Delicious Dumplings & Dips";
        assert_eq!(slugify(title), slugify(title));
    }
}
