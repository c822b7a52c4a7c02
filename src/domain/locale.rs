// ============================================================================
// Locale Context
// Numeric markers of the active locale, consumed by the permissive parser
// ============================================================================

use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Environment variables consulted by [`LocaleContext::from_env`], highest
/// priority first.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

/// Narrow no-break space, the French group separator in current locale data.
const NARROW_NO_BREAK_SPACE: char = '\u{202f}';

/// Space characters used to group digits. Text formatted by different
/// locale data versions mixes them, so they are interchangeable.
const SPACE_SEPARATORS: [char; 3] = [' ', '\u{a0}', NARROW_NO_BREAK_SPACE];

/// Decimal point and group separator of a locale.
///
/// The context is immutable once built and cheap to copy; callers pass it by
/// value into the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocaleContext {
    /// Character separating the integer and fractional parts
    pub decimal_point: char,

    /// Character grouping integer digits (thousands separator)
    pub group_separator: char,
}

impl LocaleContext {
    /// Create a context from explicit markers.
    pub const fn new(decimal_point: char, group_separator: char) -> Self {
        Self {
            decimal_point,
            group_separator,
        }
    }

    /// The "C" locale: `1,000.5`
    pub const fn c() -> Self {
        Self::new('.', ',')
    }

    /// German conventions: `1.000,5`
    pub const fn german() -> Self {
        Self::new(',', '.')
    }

    /// French conventions: `1 000,5` with a narrow no-break space
    pub const fn french() -> Self {
        Self::new(',', NARROW_NO_BREAK_SPACE)
    }

    /// Swiss conventions: `1'000.5`
    pub const fn swiss() -> Self {
        Self::new('.', '\'')
    }

    /// Builder method: Set the decimal point
    pub fn with_decimal_point(mut self, decimal_point: char) -> Self {
        self.decimal_point = decimal_point;
        self
    }

    /// Builder method: Set the group separator
    pub fn with_group_separator(mut self, group_separator: char) -> Self {
        self.group_separator = group_separator;
        self
    }

    /// Whether `ch` groups digits under this locale.
    ///
    /// When the separator is a space, every space separator matches, so
    /// `1\u{a0}000` and `1\u{202f}000` both read as one thousand.
    #[inline]
    pub fn is_group_separator(&self, ch: char) -> bool {
        ch == self.group_separator
            || (SPACE_SEPARATORS.contains(&self.group_separator) && SPACE_SEPARATORS.contains(&ch))
    }

    /// Validate the markers.
    ///
    /// Both markers must differ and neither may be a character that is part
    /// of a number itself (digits, signs, exponent markers).
    pub fn validate(&self) -> NumericResult<()> {
        if self.is_group_separator(self.decimal_point) {
            return Err(NumericError::InvalidLocale);
        }

        for marker in [self.decimal_point, self.group_separator] {
            if marker.is_ascii_digit() || matches!(marker, '+' | '-' | 'e' | 'E') {
                return Err(NumericError::InvalidLocale);
            }
        }

        Ok(())
    }

    /// Map a POSIX locale name such as `de_DE.UTF-8` or `fr_CH@euro` to its
    /// numeric conventions.
    ///
    /// Returns `None` for languages without a known mapping.
    pub fn from_posix_locale(name: &str) -> Option<Self> {
        let name = name.trim();
        // Strip codeset and modifier
        let base = name
            .split(['.', '@'])
            .next()
            .unwrap_or_default();

        if base.is_empty() || base == "C" || base == "POSIX" {
            return Some(Self::c());
        }

        let mut parts = base.splitn(2, ['_', '-']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let territory = parts.next().map(|t| t.to_ascii_uppercase());

        if territory.as_deref() == Some("CH") && matches!(language.as_str(), "de" | "fr" | "it")
        {
            return Some(Self::swiss());
        }

        match language.as_str() {
            "en" | "ja" | "zh" | "ko" | "he" | "th" => Some(Self::c()),
            "de" | "nl" | "es" | "it" | "pt" | "da" | "id" | "tr" | "el" => Some(Self::german()),
            "fr" | "sv" | "fi" | "nb" | "nn" | "no" | "ru" | "pl" | "cs" | "sk" | "uk" => {
                Some(Self::french())
            },
            _ => None,
        }
    }

    /// Resolve the process locale from `LC_ALL`, `LC_NUMERIC` and `LANG`.
    ///
    /// Unset, empty or unknown values fall through to the next variable; the
    /// C locale is used when nothing matches.
    pub fn from_env() -> Self {
        for var in LOCALE_ENV_VARS {
            let Ok(value) = std::env::var(var) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            if let Some(ctx) = Self::from_posix_locale(&value) {
                tracing::debug!("Resolved locale {:?} from {}={}", ctx, var, value);
                return ctx;
            }
            tracing::debug!("Unknown locale {}={}, trying next source", var, value);
        }

        Self::c()
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::c()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_c_locale() {
        let ctx = LocaleContext::default();
        assert_eq!(ctx.decimal_point, '.');
        assert_eq!(ctx.group_separator, ',');
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn test_presets_validate() {
        for ctx in [
            LocaleContext::c(),
            LocaleContext::german(),
            LocaleContext::french(),
            LocaleContext::swiss(),
        ] {
            assert!(ctx.validate().is_ok(), "{:?}", ctx);
        }
    }

    #[test]
    fn test_builder() {
        let ctx = LocaleContext::c()
            .with_decimal_point(',')
            .with_group_separator(' ');
        assert_eq!(ctx, LocaleContext::new(',', ' '));
    }

    #[test]
    fn test_validate_rejects_bad_markers() {
        assert_eq!(
            LocaleContext::new('.', '.').validate(),
            Err(NumericError::InvalidLocale)
        );
        assert_eq!(
            LocaleContext::new('.', '0').validate(),
            Err(NumericError::InvalidLocale)
        );
        assert_eq!(
            LocaleContext::new('-', ',').validate(),
            Err(NumericError::InvalidLocale)
        );
        assert_eq!(
            LocaleContext::new('.', 'e').validate(),
            Err(NumericError::InvalidLocale)
        );
    }

    #[test]
    fn test_space_separators_are_interchangeable() {
        let fr = LocaleContext::french();
        assert!(fr.is_group_separator('\u{202f}'));
        assert!(fr.is_group_separator('\u{a0}'));
        assert!(fr.is_group_separator(' '));
        assert!(!fr.is_group_separator(','));

        let c = LocaleContext::c();
        assert!(c.is_group_separator(','));
        assert!(!c.is_group_separator(' '));

        assert_eq!(
            LocaleContext::new(' ', '\u{a0}').validate(),
            Err(NumericError::InvalidLocale)
        );
    }

    #[test]
    fn test_from_posix_locale() {
        assert_eq!(LocaleContext::from_posix_locale("C"), Some(LocaleContext::c()));
        assert_eq!(
            LocaleContext::from_posix_locale("POSIX"),
            Some(LocaleContext::c())
        );
        assert_eq!(
            LocaleContext::from_posix_locale("en_US.UTF-8"),
            Some(LocaleContext::c())
        );
        assert_eq!(
            LocaleContext::from_posix_locale("de_DE.UTF-8"),
            Some(LocaleContext::german())
        );
        assert_eq!(
            LocaleContext::from_posix_locale("fr_FR@euro"),
            Some(LocaleContext::french())
        );
        assert_eq!(
            LocaleContext::from_posix_locale("de_CH"),
            Some(LocaleContext::swiss())
        );
        assert_eq!(
            LocaleContext::from_posix_locale("pt-BR"),
            Some(LocaleContext::german())
        );
        assert_eq!(LocaleContext::from_posix_locale("xx_YY"), None);
    }
}
