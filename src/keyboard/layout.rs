use serde::{Deserialize, Serialize};

/// Letter rows of the on-screen keyboard. Only the 26 letters appear here;
/// the backspace key and the control buttons are placed by the diagram.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeyboardLayout {
    pub name: String,
    pub rows: Vec<Vec<char>>,
}

impl KeyboardLayout {
    pub const NAMES: [&'static str; 3] = ["qwerty", "dvorak", "colemak"];

    pub fn qwerty() -> Self {
        Self::from_rows("QWERTY", ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"])
    }

    pub fn dvorak() -> Self {
        Self::from_rows("Dvorak", ["PYFGCRL", "AOEUIDHTNS", "QJKXBMWVZ"])
    }

    pub fn colemak() -> Self {
        Self::from_rows("Colemak", ["QWFPGJLUY", "ARSTDHNEIO", "ZXCVBKM"])
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "qwerty" => Some(Self::qwerty()),
            "dvorak" => Some(Self::dvorak()),
            "colemak" => Some(Self::colemak()),
            _ => None,
        }
    }

    fn from_rows(name: &str, rows: [&str; 3]) -> Self {
        Self {
            name: name.to_string(),
            rows: rows.iter().map(|r| r.chars().collect()).collect(),
        }
    }
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self::qwerty()
    }
}
