/// The session preference flags, addressable by name.
///
/// Consumers that bind a single flag to a widget (the settings page
/// checkboxes) use these instead of hardcoding field access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefFlag {
    SoundEnabled,
    WarnAtTenSeconds,
    AutoStart,
}

impl PrefFlag {
    /// Get all flags, in settings-page display order
    pub fn all() -> &'static [PrefFlag] {
        &[
            Self::SoundEnabled,
            Self::WarnAtTenSeconds,
            Self::AutoStart,
        ]
    }

    /// Get the checkbox label for this flag
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SoundEnabled => "Play sound when time is up",
            Self::WarnAtTenSeconds => "Warn at 10 seconds remaining",
            Self::AutoStart => "Auto-start the next round",
        }
    }
}

/// Session-scoped UI preferences.
///
/// One instance lives for the whole session, created in `main` and shared
/// as `Rc<RefCell<Preferences>>` with every consumer that needs it.
/// Nothing is written to disk; a restart begins from the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub sound_enabled: bool,
    pub warn_at_ten_seconds: bool,
    pub auto_start: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            warn_at_ten_seconds: true,
            auto_start: false,
        }
    }
}

impl Preferences {
    /// Current value of `flag`
    pub fn get(&self, flag: PrefFlag) -> bool {
        match flag {
            PrefFlag::SoundEnabled => self.sound_enabled,
            PrefFlag::WarnAtTenSeconds => self.warn_at_ten_seconds,
            PrefFlag::AutoStart => self.auto_start,
        }
    }

    /// Overwrite `flag` with `value`. Flags are independent; no other
    /// field is touched.
    pub fn set(&mut self, flag: PrefFlag, value: bool) {
        match flag {
            PrefFlag::SoundEnabled => self.sound_enabled = value,
            PrefFlag::WarnAtTenSeconds => self.warn_at_ten_seconds = value,
            PrefFlag::AutoStart => self.auto_start = value,
        }
    }
}
