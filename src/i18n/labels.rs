use crate::i18n::Locale;

/// Fixed localized strings for the contact form and site chrome.
///
/// These are not discovered from the page; they are applied by identifier to
/// a known set of form fields.
#[derive(Debug, Clone)]
pub struct FormLabelSet {
    // ==================== Field Labels ====================
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub subject: &'static str,
    pub message: &'static str,

    /// Visible text of the submit control
    pub submit: &'static str,

    // ==================== Placeholders ====================
    pub name_placeholder: &'static str,
    pub email_placeholder: &'static str,

    /// Shows the phone mask of the locale
    pub phone_placeholder: &'static str,
    pub subject_placeholder: &'static str,
    pub message_placeholder: &'static str,

    // ==================== Banners ====================
    /// Banner shown after a valid submission
    pub success_banner: &'static str,

    /// Banner shown after a rejected submission
    pub error_banner: &'static str,

    // ==================== Other ====================
    /// Notice shown when a donate button is clicked (payments are not implemented)
    pub donate_notice: &'static str,
}

impl FormLabelSet {
    /// Get the label set for a locale.
    pub fn for_locale(locale: Locale) -> &'static FormLabelSet {
        match locale {
            Locale::Ru => &RUSSIAN_LABELS,
            Locale::En => &ENGLISH_LABELS,
        }
    }

    /// Placeholder for a form field by its element id.
    ///
    /// # Returns
    /// `None` for ids outside the five known fields.
    pub fn placeholder_for(&self, field_id: &str) -> Option<&'static str> {
        match field_id {
            "name" => Some(self.name_placeholder),
            "email" => Some(self.email_placeholder),
            "phone" => Some(self.phone_placeholder),
            "subject" => Some(self.subject_placeholder),
            "message" => Some(self.message_placeholder),
            _ => None,
        }
    }
}

// ==================== Russian Labels ====================

pub const RUSSIAN_LABELS: FormLabelSet = FormLabelSet {
    name: "Имя",
    email: "Email",
    phone: "Номер телефона",
    subject: "Тема",
    message: "Сообщение",
    submit: "Отправить",

    name_placeholder: "Введите ваше имя",
    email_placeholder: "Введите ваш email",
    phone_placeholder: "+996 (xxx) xxx-xxx",
    subject_placeholder: "Тема сообщения",
    message_placeholder: "Ваше сообщение...",

    success_banner: "Сообщение успешно отправлено! Мы свяжемся с вами в ближайшее время.",
    error_banner: "Ошибка при отправке сообщения. Пожалуйста, проверьте введенные данные.",

    donate_notice: "Функция доната находится в разработке. Спасибо за вашу поддержку!",
};

// ==================== English Labels ====================

pub const ENGLISH_LABELS: FormLabelSet = FormLabelSet {
    name: "Name",
    email: "Email",
    phone: "Phone Number",
    subject: "Subject",
    message: "Message",
    submit: "Send",

    name_placeholder: "Enter your name",
    email_placeholder: "Enter your email",
    phone_placeholder: "+1 (xxx) xxx-xxxx",
    subject_placeholder: "Message subject",
    message_placeholder: "Your message...",

    success_banner: "Message sent successfully! We will contact you soon.",
    error_banner: "Error sending message. Please check your input data.",

    donate_notice: "Donate functionality is under development. Thank you for your support!",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_locale_selects_table() {
        assert_eq!(FormLabelSet::for_locale(Locale::Ru).submit, "Отправить");
        assert_eq!(FormLabelSet::for_locale(Locale::En).submit, "Send");
    }

    #[test]
    fn test_phone_placeholders_show_masks() {
        assert_eq!(RUSSIAN_LABELS.phone_placeholder, "+996 (xxx) xxx-xxx");
        assert_eq!(ENGLISH_LABELS.phone_placeholder, "+1 (xxx) xxx-xxxx");
    }

    #[test]
    fn test_placeholder_for_known_fields() {
        let labels = FormLabelSet::for_locale(Locale::En);
        assert_eq!(labels.placeholder_for("name"), Some("Enter your name"));
        assert_eq!(labels.placeholder_for("message"), Some("Your message..."));
    }

    #[test]
    fn test_placeholder_for_unknown_field() {
        assert_eq!(RUSSIAN_LABELS.placeholder_for("submit"), None);
        assert_eq!(RUSSIAN_LABELS.placeholder_for(""), None);
    }

    #[test]
    fn test_all_strings_non_empty() {
        for locale in Locale::ALL {
            let labels = FormLabelSet::for_locale(locale);
            for text in [
                labels.name,
                labels.email,
                labels.phone,
                labels.subject,
                labels.message,
                labels.submit,
                labels.success_banner,
                labels.error_banner,
                labels.donate_notice,
            ] {
                assert!(!text.is_empty(), "empty label in {}", locale);
            }
        }
    }

    #[test]
    fn test_banners_differ_between_locales() {
        assert_ne!(RUSSIAN_LABELS.success_banner, ENGLISH_LABELS.success_banner);
        assert_ne!(RUSSIAN_LABELS.error_banner, ENGLISH_LABELS.error_banner);
    }
}
