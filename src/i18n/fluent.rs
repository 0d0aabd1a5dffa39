use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let res = FluentResource::try_new(
                            String::from_utf8_lossy(content.data.as_ref()).to_string(),
                        )
                        .expect("Failed to parse FTL file.");
                        let mut bundle = FluentBundle::new(vec![locale.clone()]);
                        // Skip Unicode isolation marks; messages render in
                        // plain widgets, not bidi-aware HTML.
                        bundle.set_use_isolating(false);
                        bundle.add_resource(res).expect("Failed to add resource.");
                        bundles.insert(locale.clone(), bundle);
                        available_locales.push(locale);
                    }
                }
            }
        }

        available_locales.sort_by_key(|locale| locale.to_string());

        let default_locale: LanguageIdentifier = "en-US".parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(name.to_string(), value.to_string());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use unic_langid::LanguageIdentifier;

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(Some("fr".to_string()), &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let config = Config {
            language: Some("fr".to_string()),
            ..Config::default()
        };
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_unknown_cli_lang_is_ignored() {
        let config = Config::default();
        let available: Vec<LanguageIdentifier> = vec!["en-US".parse().unwrap()];
        let lang = resolve_locale(Some("xx-XX".to_string()), &config, &available);
        assert!(lang.is_none() || available.contains(&lang.unwrap()));
    }

    #[test]
    fn embedded_bundles_include_english_and_french() {
        let i18n = I18n::default();
        let en: LanguageIdentifier = "en-US".parse().unwrap();
        let fr: LanguageIdentifier = "fr".parse().unwrap();
        assert!(i18n.available_locales.contains(&en));
        assert!(i18n.available_locales.contains(&fr));
    }

    #[test]
    fn mismatch_messages_are_exact_in_english() {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().unwrap());
        assert_eq!(
            i18n.tr("toast-password-mismatch"),
            "Passwords do not match!"
        );
        assert_eq!(
            i18n.tr("toast-new-password-mismatch"),
            "New passwords do not match!"
        );
    }

    #[test]
    fn missing_key_is_flagged() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_are_interpolated() {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().unwrap());
        let message = i18n.tr_with_args("alert-account-created", &[("username", "alice")]);
        assert!(message.contains("alice"), "got: {message}");
    }

    #[test]
    fn set_locale_ignores_unknown_locales() {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().unwrap());
        let before = i18n.current_locale().clone();
        i18n.set_locale("zz".parse().unwrap());
        assert_eq!(i18n.current_locale(), &before);
    }
}
