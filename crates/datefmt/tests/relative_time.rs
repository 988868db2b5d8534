//! Integration tests for relative-time phrase resolution.

use datefmt::engine::render_relative;
use datefmt::{Locale, LocaleKey, LocaleRegistry, RelativeTimeKey, Tense};

fn locale(key: LocaleKey) -> Locale {
    LocaleRegistry::builtin().resolve(key).unwrap().clone()
}

// =============================================================================
// English phrases
// =============================================================================

#[test]
fn test_english_past_plural() {
    let en = locale(LocaleKey::En);
    assert_eq!(
        render_relative(RelativeTimeKey::Minutes, 2, Tense::Past, &en),
        "2 minutes ago",
    );
}

#[test]
fn test_english_future_plural() {
    let en = locale(LocaleKey::En);
    assert_eq!(
        render_relative(RelativeTimeKey::Hours, 3, Tense::Future, &en),
        "in 3 hours",
    );
}

#[test]
fn test_english_singular_day() {
    let en = locale(LocaleKey::En);
    assert_eq!(
        render_relative(RelativeTimeKey::Day, 1, Tense::Past, &en),
        "1 day ago",
    );
}

#[test]
fn test_english_seconds_has_no_count() {
    let en = locale(LocaleKey::En);
    assert_eq!(
        render_relative(RelativeTimeKey::Seconds, 42, Tense::Past, &en),
        "just now",
    );
    assert_eq!(
        render_relative(RelativeTimeKey::Seconds, 42, Tense::Future, &en),
        "in a few seconds",
    );
}

// =============================================================================
// Count handling
// =============================================================================

#[test]
fn test_zero_count_substitutes_verbatim() {
    let en = locale(LocaleKey::En);
    assert_eq!(
        render_relative(RelativeTimeKey::Minutes, 0, Tense::Past, &en),
        "0 minutes ago",
    );
}

#[test]
fn test_negative_count_substitutes_verbatim() {
    let en = locale(LocaleKey::En);
    assert_eq!(
        render_relative(RelativeTimeKey::Days, -3, Tense::Future, &en),
        "in -3 days",
    );
}

#[test]
fn test_fractional_count_substitutes_verbatim() {
    let en = locale(LocaleKey::En);
    assert_eq!(
        render_relative(RelativeTimeKey::Hours, 2.5, Tense::Past, &en),
        "2.5 hours ago",
    );
}

#[test]
fn test_whole_float_renders_without_fraction() {
    let en = locale(LocaleKey::En);
    assert_eq!(
        render_relative(RelativeTimeKey::Weeks, 2.0, Tense::Past, &en),
        "2 weeks ago",
    );
}

#[test]
fn test_singular_keys_ignore_count() {
    let en = locale(LocaleKey::En);
    for key in [
        RelativeTimeKey::Minute,
        RelativeTimeKey::Hour,
        RelativeTimeKey::Day,
        RelativeTimeKey::Week,
        RelativeTimeKey::Month,
        RelativeTimeKey::Year,
    ] {
        assert_eq!(
            render_relative(key, 99, Tense::Past, &en),
            render_relative(key, 1, Tense::Past, &en),
            "key {key}",
        );
    }
}

// =============================================================================
// Other locales
// =============================================================================

#[test]
fn test_spanish_phrases() {
    let es = locale(LocaleKey::Es);
    assert_eq!(
        render_relative(RelativeTimeKey::Minutes, 5, Tense::Past, &es),
        "hace 5 minutos",
    );
    assert_eq!(
        render_relative(RelativeTimeKey::Years, 2, Tense::Future, &es),
        "en 2 años",
    );
    assert_eq!(
        render_relative(RelativeTimeKey::Seconds, 1, Tense::Past, &es),
        "ahora mismo",
    );
}

#[test]
fn test_arabic_phrases() {
    let ar = locale(LocaleKey::Ar);
    assert_eq!(
        render_relative(RelativeTimeKey::Hours, 3, Tense::Future, &ar),
        "خلال 3 ساعات",
    );
    assert_eq!(
        render_relative(RelativeTimeKey::Minute, 1, Tense::Past, &ar),
        "منذ دقيقة",
    );
}

// =============================================================================
// Template data integrity
// =============================================================================

#[test]
fn test_every_template_has_at_most_one_placeholder() {
    let registry = LocaleRegistry::builtin();
    for key in registry.keys() {
        let locale = registry.resolve(key).unwrap();
        for rt_key in RelativeTimeKey::ALL {
            for tense in [Tense::Past, Tense::Future] {
                let template = locale.relative_template(rt_key, tense);
                assert!(!template.is_empty(), "{key} {rt_key} {tense}");
                assert!(
                    template.matches("{count}").count() <= 1,
                    "{key} {rt_key} {tense}: {template:?}",
                );
            }
        }
    }
}

#[test]
fn test_plural_keys_carry_placeholder_in_all_locales() {
    let registry = LocaleRegistry::builtin();
    let plural = [
        RelativeTimeKey::Minutes,
        RelativeTimeKey::Hours,
        RelativeTimeKey::Days,
        RelativeTimeKey::Weeks,
        RelativeTimeKey::Months,
        RelativeTimeKey::Years,
    ];
    for key in registry.keys() {
        let locale = registry.resolve(key).unwrap();
        for rt_key in plural {
            for tense in [Tense::Past, Tense::Future] {
                assert!(
                    locale.relative_template(rt_key, tense).contains("{count}"),
                    "{key} {rt_key} {tense}",
                );
            }
        }
    }
}
