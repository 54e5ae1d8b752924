//! The fixed set of greeting phrasings.
//!
//! Every greeting is one of three templates with the name substituted in.
//! The set is ordered and never changes at runtime; random selection picks an
//! index into [`TEMPLATES`].

use std::fmt;

use rand::Rng;

/// A single greeting phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// `Hi, {name}. Welcome!`
    Welcome,
    /// `Great to see you, {name}!`
    GreatToSeeYou,
    /// `Hail, {name}! Well met!`
    Hail,
}

/// All templates, in selection order.
pub const TEMPLATES: [Template; 3] = [Template::Welcome, Template::GreatToSeeYou, Template::Hail];

impl Template {
    /// The raw pattern, with `{name}` marking where the name goes.
    pub const fn pattern(self) -> &'static str {
        match self {
            Template::Welcome => "Hi, {name}. Welcome!",
            Template::GreatToSeeYou => "Great to see you, {name}!",
            Template::Hail => "Hail, {name}! Well met!",
        }
    }

    /// Substitutes `name` into this template.
    ///
    /// No validation happens here; callers check the name first.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use greetings::Template;
    ///
    /// assert_eq!(Template::Hail.render("Gladys"), "Hail, Gladys! Well met!");
    /// ```
    pub fn render(self, name: &str) -> String {
        match self {
            Template::Welcome => format!("Hi, {name}. Welcome!"),
            Template::GreatToSeeYou => format!("Great to see you, {name}!"),
            Template::Hail => format!("Hail, {name}! Well met!"),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// Picks one template uniformly at random.
pub fn random_template<R: Rng + ?Sized>(rng: &mut R) -> Template {
    TEMPLATES[rng.gen_range(0..TEMPLATES.len())]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_render_matches_pattern() {
        for template in TEMPLATES {
            let expected = template.pattern().replace("{name}", "Darrin");
            assert_eq!(template.render("Darrin"), expected);
        }
    }

    #[test]
    fn test_render_each_template() {
        assert_eq!(Template::Welcome.render("Gladys"), "Hi, Gladys. Welcome!");
        assert_eq!(
            Template::GreatToSeeYou.render("Gladys"),
            "Great to see you, Gladys!"
        );
        assert_eq!(Template::Hail.render("Gladys"), "Hail, Gladys! Well met!");
    }

    #[test]
    fn test_display_is_pattern() {
        assert_eq!(Template::Hail.to_string(), "Hail, {name}! Well met!");
    }

    #[test]
    fn test_random_template_reaches_every_template() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<Template> = (0..300).map(|_| random_template(&mut rng)).collect();
        assert_eq!(seen.len(), TEMPLATES.len());
    }

    #[test]
    fn test_random_template_is_reproducible_with_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first: Vec<Template> = (0..20).map(|_| random_template(&mut a)).collect();
        let second: Vec<Template> = (0..20).map(|_| random_template(&mut b)).collect();
        assert_eq!(first, second);
    }
}
