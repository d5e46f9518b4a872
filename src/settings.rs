use derive_more::Constructor;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Spanish, Language::French];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
        }
    }

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, self)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Timezone {
    Utc,
    Est,
    Pst,
}

impl Timezone {
    pub const ALL: [Timezone; 3] = [Timezone::Utc, Timezone::Est, Timezone::Pst];

    pub fn label(&self) -> &'static str {
        match self {
            Timezone::Utc => "UTC",
            Timezone::Est => "EST",
            Timezone::Pst => "PST",
        }
    }

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, self)
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Timezone::Utc
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: &T) -> T {
    let pos = all.iter().position(|item| item == current).unwrap_or(0);
    all[(pos + 1) % all.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Constructor)]
#[serde(default)]
pub struct Settings {
    pub language: Language,
    pub timezone: Timezone,
    pub notifications: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            language: Language::default(),
            timezone: Timezone::default(),
            notifications: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Language,
    Timezone,
    Notifications,
    Save,
}

impl SettingsField {
    pub const ALL: [SettingsField; 4] = [
        SettingsField::Language,
        SettingsField::Timezone,
        SettingsField::Notifications,
        SettingsField::Save,
    ];

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, self)
    }

    pub fn prev(&self) -> Self {
        let pos = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Form state behind the settings view. Edits go to a draft, which only
/// becomes the applied settings on save.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    applied: Settings,
    draft: Settings,
    focus: SettingsField,
}

impl SettingsForm {
    pub fn new(settings: Settings) -> Self {
        SettingsForm {
            applied: settings,
            draft: settings,
            focus: SettingsField::Language,
        }
    }

    pub fn applied(&self) -> &Settings {
        &self.applied
    }

    pub fn draft(&self) -> &Settings {
        &self.draft
    }

    pub fn focus(&self) -> SettingsField {
        self.focus
    }

    pub fn is_dirty(&self) -> bool {
        self.applied != self.draft
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Acts on the focused field. Returns `true` if this saved the form.
    pub fn activate(&mut self) -> bool {
        match self.focus {
            SettingsField::Language => {
                self.draft.language = self.draft.language.next();
                false
            }
            SettingsField::Timezone => {
                self.draft.timezone = self.draft.timezone.next();
                false
            }
            SettingsField::Notifications => {
                self.draft.notifications = !self.draft.notifications;
                false
            }
            SettingsField::Save => {
                self.save();
                true
            }
        }
    }

    /// Returns whether anything changed.
    pub fn save(&mut self) -> bool {
        let changed = self.is_dirty();
        self.applied = self.draft;

        log::info!(
            "Settings saved: language={}, timezone={}, notifications={}",
            self.applied.language.code(),
            self.applied.timezone.label(),
            self.applied.notifications
        );

        changed
    }
}

impl Default for SettingsForm {
    fn default() -> Self {
        SettingsForm::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(
            settings,
            Settings::new(Language::English, Timezone::Utc, true)
        );
    }

    #[test]
    fn options_cycle() {
        assert_eq!(Language::French.next(), Language::English);
        assert_eq!(Timezone::Utc.next(), Timezone::Est);
        assert_eq!(SettingsField::Language.prev(), SettingsField::Save);
        assert_eq!(SettingsField::Save.next(), SettingsField::Language);
    }

    #[test]
    fn edits_stay_in_draft_until_saved() {
        let mut form = SettingsForm::default();

        form.activate();
        assert_eq!(form.draft().language, Language::Spanish);
        assert_eq!(form.applied().language, Language::English);
        assert!(form.is_dirty());

        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), SettingsField::Notifications);
        form.activate();
        assert!(!form.draft().notifications);

        assert!(form.save());
        assert!(!form.is_dirty());
        assert_eq!(
            *form.applied(),
            Settings::new(Language::Spanish, Timezone::Utc, false)
        );
    }

    #[test]
    fn save_button() {
        let mut form = SettingsForm::default();
        form.focus_prev();
        assert_eq!(form.focus(), SettingsField::Save);
        assert!(form.activate());
        assert!(!form.save());
    }

    #[test]
    fn deserialize_partial() {
        let settings: Settings = toml::from_str("language = \"fr\"\ntimezone = \"PST\"").unwrap();
        assert_eq!(settings.language, Language::French);
        assert_eq!(settings.timezone, Timezone::Pst);
        assert!(settings.notifications);
    }
}
