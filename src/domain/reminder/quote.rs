//! Inspirational quote value object and the local fallback list.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CalendarDate;

/// A quote and its author, as shown at the end of a reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

impl Quote {
    pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
        }
    }

    /// A quote from the built-in list, rotating once per day.
    pub fn fallback_for(date: CalendarDate) -> Self {
        let index = date.ordinal() as usize % FALLBACK_QUOTES.len();
        let (quote, author) = FALLBACK_QUOTES[index];
        Self::new(quote, author)
    }
}

/// Used whenever the remote quote service is unavailable.
pub const FALLBACK_QUOTES: &[(&str, &str)] = &[
    (
        "La educación es el arma más poderosa que puedes usar para cambiar el mundo.",
        "Nelson Mandela",
    ),
    (
        "El aprendizaje es un tesoro que seguirá a su dueño en todas partes.",
        "Proverbio chino",
    ),
    (
        "Dime y lo olvido, enséñame y lo recuerdo, involúcrame y lo aprendo.",
        "Benjamin Franklin",
    ),
    (
        "Educar la mente sin educar el corazón no es educar en absoluto.",
        "Aristóteles",
    ),
    (
        "El propósito de la educación es reemplazar una mente vacía con una mente abierta.",
        "Malcolm Forbes",
    ),
    ("El aprendizaje nunca agota la mente.", "Leonardo da Vinci"),
    (
        "La educación no es preparación para la vida; la educación es la vida en sí misma.",
        "John Dewey",
    ),
];
