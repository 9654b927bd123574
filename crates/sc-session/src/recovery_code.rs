use sc_config::RecoveryConfig;

use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const VISIBLE_SUFFIX: usize = 4;

/// Produces candidate recovery codes.
pub trait CodeSource {
    fn next_code(&self) -> String;
}

/// Uniform random codes: `<prefix>` followed by `length` characters of `A-Z0-9`.
#[derive(Debug, Clone)]
pub struct RecoveryCodeGenerator {
    prefix: String,
    length: usize,
}

impl RecoveryCodeGenerator {
    pub fn new(prefix: impl Into<String>, length: usize) -> Self {
        Self {
            prefix: prefix.into(),
            length,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RecoveryCodeGenerator {
    fn default() -> Self {
        Self::from(&RecoveryConfig::default())
    }
}

impl From<&RecoveryConfig> for RecoveryCodeGenerator {
    fn from(config: &RecoveryConfig) -> Self {
        Self::new(config.prefix.clone(), config.length)
    }
}

impl CodeSource for RecoveryCodeGenerator {
    fn next_code(&self) -> String {
        let mut rng = rand::rng();
        let mut code = String::with_capacity(self.prefix.len() + self.length);
        code.push_str(&self.prefix);

        for _ in 0..self.length {
            let idx = rng.random_range(0..ALPHABET.len());
            code.push(ALPHABET[idx] as char);
        }

        code
    }
}

/// Hides all but the last few characters, for logs.
pub fn mask_code(code: &str) -> String {
    let chars: Vec<char> = code.chars().collect();
    let visible = chars.len().min(VISIBLE_SUFFIX);
    let hidden = chars.len() - visible;

    let mut masked = "*".repeat(hidden);
    masked.extend(&chars[hidden..]);
    masked
}
