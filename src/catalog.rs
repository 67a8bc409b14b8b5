//! The shipped catalog of candidate notification sounds.
//!
//! The table is ordered; playback and display follow it top to bottom. The
//! blank-line groupings are purely editorial (style families the entries were
//! collected under) and carry no meaning at runtime.

/// One candidate sound: a file name under the configured base directory plus
/// a short note on its character and intended use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundEntry {
    /// File name relative to the base directory
    pub filename: &'static str,
    /// Human-readable description shown while the sound plays
    pub description: &'static str,
}

/// The fixed audition set, in playback order.
pub const CATALOG: &[SoundEntry] = &[
    // Modern/minimal
    SoundEntry {
        filename: "click_soft_tap.wav",
        description: "Very subtle tap - perfect for frequent notifications",
    },
    SoundEntry {
        filename: "pop_drip.wav",
        description: "Unique water drop - distinctive but not intrusive",
    },
    SoundEntry {
        filename: "glass_ping.wav",
        description: "Clean glass sound - modern and crisp",
    },
    SoundEntry {
        filename: "click_ting_glass.wav",
        description: "Glass click - sharp but pleasant",
    },
    // Pleasant/musical
    SoundEntry {
        filename: "music_marimba_note.wav",
        description: "Single marimba note - warm and friendly",
    },
    SoundEntry {
        filename: "chime_lite_ding_mid.wav",
        description: "Gentle chime - soft and welcoming",
    },
    SoundEntry {
        filename: "music_kalimba_on.wav",
        description: "Kalimba sound - unique and pleasant",
    },
    SoundEntry {
        filename: "chord_nice.wav",
        description: "Pleasant chord - positive feeling",
    },
    // Tech/digital
    SoundEntry {
        filename: "digi_ping_up.wav",
        description: "Digital ping up - futuristic",
    },
    SoundEntry {
        filename: "beep_digi_note.wav",
        description: "Digital beep - classic tech sound",
    },
    SoundEntry {
        filename: "digi_blip_up.wav",
        description: "Quick blip - minimal tech",
    },
    // Classic/traditional
    SoundEntry {
        filename: "bell_ding_hi.wav",
        description: "Classic bell - traditional notification",
    },
    SoundEntry {
        filename: "chime_done.wav",
        description: "Completion chime - satisfying",
    },
    SoundEntry {
        filename: "chime_clickbell_confirm.wav",
        description: "Confirmation bell - clear feedback",
    },
    // Unique/ambient
    SoundEntry {
        filename: "pad_soft_on.wav",
        description: "Ambient pad - very subtle and modern",
    },
];

/// Helper to find a catalog entry by file name
pub fn find_entry(filename: &str) -> Option<&'static SoundEntry> {
    CATALOG.iter().find(|e| e.filename == filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_filenames_are_unique() {
        let mut names = std::collections::HashSet::new();
        for entry in CATALOG {
            assert!(
                names.insert(entry.filename),
                "Duplicate catalog filename: {}",
                entry.filename
            );
        }
    }

    #[test]
    fn test_catalog_entries_are_well_formed() {
        for entry in CATALOG {
            assert!(!entry.filename.is_empty());
            assert!(
                entry.filename.ends_with(".wav"),
                "Unexpected extension on {}",
                entry.filename
            );
            assert!(!entry.description.is_empty());
        }
    }

    #[test]
    fn test_find_entry_by_name() {
        let entry = find_entry("chime_done.wav");
        assert!(entry.is_some());
        assert_eq!(entry.unwrap().description, "Completion chime - satisfying");

        let missing = find_entry("nonexistent.wav");
        assert!(missing.is_none());
    }

    #[test]
    fn test_catalog_order_is_stable() {
        // The audition order is part of the contract; pin the endpoints.
        assert_eq!(CATALOG.first().unwrap().filename, "click_soft_tap.wav");
        assert_eq!(CATALOG.last().unwrap().filename, "pad_soft_on.wav");
        assert_eq!(CATALOG.len(), 15);
    }
}
