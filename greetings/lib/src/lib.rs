//! Greeting generation for one or many names.
//!
//! A greeting is one of a small fixed set of phrasings with a name substituted
//! in. The phrasing is picked uniformly at random on every call.
//!
//! - [`greeting`] greets a single name
//! - [`greetings`] greets a batch of names and returns them keyed by name
//! - [`hello`] always uses the plain welcome phrasing
//!
//! Empty names are rejected with [`GreetingError::EmptyName`]. In a batch the
//! first empty name aborts the whole call.
//!
//! ## Examples
//!
//! ```rust
//! use greetings::{greeting, greetings};
//!
//! let message = greeting("Gladys").unwrap();
//! assert!(message.contains("Gladys"));
//!
//! let messages = greetings(["Gladys", "Samantha", "Darrin"]).unwrap();
//! assert_eq!(messages.len(), 3);
//!
//! assert!(greeting("").is_err());
//! ```
//!
//! The `*_with_rng` variants accept any [`rand::Rng`] for reproducible output.

pub mod error;
pub mod greet;
pub mod template;

pub use error::{GreetingError, Result};
pub use greet::{Greetings, greeting, greeting_with_rng, greetings, greetings_with_rng, hello};
pub use template::{TEMPLATES, Template, random_template};
