// ==========================================
// Internationalization (i18n) module
// ==========================================
// Uses the rust-i18n crate
// Supported locales: English (default) and French
// ==========================================
// Note: the rust_i18n::i18n! macro is initialized in lib.rs
// ==========================================

/// Current locale
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Switch locale
///
/// # Arguments
/// - locale: locale code ("en" or "fr")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Translate a message (no arguments)
///
/// # Example
/// ```no_run
/// use volunteer_shift_scheduler::i18n::t;
/// let msg = t("schedule.warning.unfilled_slots");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Translate a message with arguments
///
/// # Example
/// ```no_run
/// use volunteer_shift_scheduler::i18n::t_with_args;
/// let msg = t_with_args("schedule.warning.unassigned_volunteers", &[("count", "3")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // rust-i18n's locale is global state and Rust tests run in parallel;
    // serialize locale-touching tests to keep them independent.
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_locale_is_english() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        let msg = t_with_args("schedule.warning.unassigned_volunteers", &[("count", "3")]);
        assert!(msg.contains("3 volunteer"));
    }

    #[test]
    fn test_french_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("fr");
        let msg = t_with_args("schedule.warning.unassigned_volunteers", &[("count", "2")]);
        assert!(msg.contains("bénévole"));
        set_locale("en");
    }
}
