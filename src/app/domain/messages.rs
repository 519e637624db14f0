use super::preferences::PrefFlag;

/// All messages that can be sent through the FLTK channel.
/// Each UI callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    Navigate(&'static str),

    // Preferences
    SetPreference(PrefFlag, bool),

    // External links
    OpenLink(&'static str),
}
