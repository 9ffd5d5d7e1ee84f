//! Reminder message composition and share link.

use serde::Serialize;

use crate::domain::foundation::WeekdayLocale;
use crate::domain::schedule::Session;

use super::Quote;

const SHARE_BASE_URL: &str = "https://wa.me/";

/// A ready-to-send class reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderMessage {
    text: String,
}

impl ReminderMessage {
    /// Builds the reminder text for `session`, closing with `quote`.
    pub fn compose(session: &Session, quote: &Quote, locale: WeekdayLocale) -> Self {
        let text = match locale {
            WeekdayLocale::Spanish => format!(
                "Estimados estudiantes,\n\
                 Les remito el enlace para la clase de: *{}*\n\
                 *Horario:* {}\n\
                 *Enlace:* {}\n\
                 \n\
                 *\"{}\"*\n\
                 _- {}_\n\
                 \n\
                 ¡Ánimos!",
                session.name(),
                session.time_label(),
                session.link(),
                quote.quote,
                quote.author
            ),
            WeekdayLocale::English => format!(
                "Dear students,\n\
                 Here is the link for the class: *{}*\n\
                 *Time:* {}\n\
                 *Link:* {}\n\
                 \n\
                 *\"{}\"*\n\
                 _- {}_\n\
                 \n\
                 Keep it up!",
                session.name(),
                session.time_label(),
                session.link(),
                quote.quote,
                quote.author
            ),
        };
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Share link that opens the messenger with the text prefilled.
    pub fn share_link(&self) -> String {
        format!("{}?text={}", SHARE_BASE_URL, urlencoding::encode(&self.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schedule::test_support::session;

    #[test]
    fn spanish_message_lists_class_details_and_quote() {
        let s = session("2024-01-01", "2024-01-31", &["monday"]);
        let quote = Quote::new("Saber es poder.", "Francis Bacon");

        let message = ReminderMessage::compose(&s, &quote, WeekdayLocale::Spanish);

        assert!(message.text().starts_with("Estimados estudiantes,\n"));
        assert!(message.text().contains("*Clase*"));
        assert!(message.text().contains("*Horario:* 18:00"));
        assert!(message.text().contains("*Enlace:* https://meet.example.com/clase"));
        assert!(message.text().contains("*\"Saber es poder.\"*\n_- Francis Bacon_"));
        assert!(message.text().ends_with("¡Ánimos!"));
    }

    #[test]
    fn english_message_uses_english_labels() {
        let s = session("2024-01-01", "2024-01-31", &["monday"]);
        let quote = Quote::new("Knowledge is power.", "Francis Bacon");

        let message = ReminderMessage::compose(&s, &quote, WeekdayLocale::English);

        assert!(message.text().contains("*Time:* 18:00"));
        assert!(message.text().ends_with("Keep it up!"));
    }

    #[test]
    fn share_link_percent_encodes_text() {
        let s = session("2024-01-01", "2024-01-31", &["monday"]);
        let message =
            ReminderMessage::compose(&s, &Quote::new("a b", "c"), WeekdayLocale::Spanish);

        let link = message.share_link();
        assert!(link.starts_with("https://wa.me/?text=Estimados%20estudiantes%2C%0A"));
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
    }
}
