//! Greeting generation for single names and batches of names.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::{debug, warn};

use crate::error::{GreetingError, Result};
use crate::template::{Template, random_template};

/// Greetings keyed by the name they were generated for.
pub type Greetings = BTreeMap<String, String>;

fn ensure_name(name: &str) -> Result<()> {
    if name.is_empty() {
        warn!("rejected greeting request: empty name");
        return Err(GreetingError::EmptyName);
    }
    Ok(())
}

/// Returns the fixed welcome greeting for `name`.
///
/// ## Examples
///
/// ```rust
/// use greetings::hello;
///
/// assert_eq!(hello("Gladys").unwrap(), "Hi, Gladys. Welcome!");
/// ```
///
/// ## Errors
///
/// Returns `GreetingError::EmptyName` if `name` is empty.
pub fn hello(name: &str) -> Result<String> {
    ensure_name(name)?;
    Ok(Template::Welcome.render(name))
}

/// Returns a greeting for `name` using a randomly chosen template.
///
/// Uses the thread-local RNG. See [`greeting_with_rng`] for reproducible output.
///
/// ## Errors
///
/// Returns `GreetingError::EmptyName` if `name` is empty.
pub fn greeting(name: &str) -> Result<String> {
    greeting_with_rng(name, &mut rand::thread_rng())
}

/// Returns a greeting for `name`, drawing the template from `rng`.
///
/// ## Examples
///
/// ```rust
/// use greetings::greeting_with_rng;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let message = greeting_with_rng("Samantha", &mut rng).unwrap();
/// assert!(message.contains("Samantha"));
/// ```
///
/// ## Errors
///
/// Returns `GreetingError::EmptyName` if `name` is empty. No randomness is
/// consumed in that case.
pub fn greeting_with_rng<R: Rng + ?Sized>(name: &str, rng: &mut R) -> Result<String> {
    ensure_name(name)?;
    let template = random_template(rng);
    debug!(name, template = %template, "generated greeting");
    Ok(template.render(name))
}

/// Returns a greeting for each name, keyed by name.
///
/// Uses the thread-local RNG. See [`greetings_with_rng`].
///
/// ## Errors
///
/// Returns `GreetingError::EmptyName` if any name is empty.
pub fn greetings<I, S>(names: I) -> Result<Greetings>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    greetings_with_rng(names, &mut rand::thread_rng())
}

/// Returns a greeting for each name, keyed by name, drawing templates from `rng`.
///
/// Names are processed in order. A repeated name keeps the greeting generated
/// for its last occurrence. The first empty name aborts the batch; names after
/// it are not visited and nothing generated so far is returned.
///
/// ## Examples
///
/// ```rust
/// use greetings::greetings_with_rng;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let messages = greetings_with_rng(["Gladys", "Samantha", "Darrin"], &mut rng).unwrap();
/// assert_eq!(messages.len(), 3);
///
/// assert!(greetings_with_rng(["Gladys", ""], &mut rng).is_err());
/// ```
///
/// ## Errors
///
/// Returns `GreetingError::EmptyName` on the first empty name.
pub fn greetings_with_rng<I, S, R>(names: I, rng: &mut R) -> Result<Greetings>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let messages = names
        .into_iter()
        .try_fold(Greetings::new(), |mut acc, name| {
            let name = name.as_ref();
            let message = greeting_with_rng(name, &mut *rng)?;
            acc.insert(name.to_string(), message);
            Ok::<_, GreetingError>(acc)
        })?;

    debug!(count = messages.len(), "generated greetings");
    Ok(messages)
}
