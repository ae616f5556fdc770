use ahash::AHashMap;

/// Description used when a profile names no industry.
pub const GENERIC_INDUSTRY: &str = "service business";
/// Phrase used when a profile has no known response-time code.
pub const GENERIC_RESPONSE_TIME: &str = "as soon as possible";

const BUILTIN_INDUSTRIES: &[(&str, &str)] = &[
    ("hot-tub-spa", "hot tub and spa service business"),
    ("hvac", "HVAC service business"),
    ("plumbing", "plumbing service business"),
];

const BUILTIN_RESPONSE_TIMES: &[(&str, &str)] = &[
    ("1_hour", "Within 1 hour"),
    ("4_hours", "Within 4 hours"),
];

/// Code-to-phrase tables used while normalizing a profile.
///
/// The built-in entries cover the industries and response-time codes the
/// onboarding flow is known to send. Anything else is added through
/// [`SynthesizerBuilder`](crate::synthesizer::SynthesizerBuilder) or a config file.
#[derive(Debug, Clone)]
pub struct LookupTables {
    industries: AHashMap<String, String>,
    response_times: AHashMap<String, String>,
}

impl Default for LookupTables {
    fn default() -> Self {
        let mut tables = Self::empty();
        for (key, description) in BUILTIN_INDUSTRIES {
            tables.insert_industry(key, description);
        }
        for (code, phrase) in BUILTIN_RESPONSE_TIMES {
            tables.insert_response_time(code, phrase);
        }
        tables
    }
}

impl LookupTables {
    /// Tables with no entries at all; every lookup falls through to the generic phrase.
    pub fn empty() -> Self {
        Self {
            industries: AHashMap::new(),
            response_times: AHashMap::new(),
        }
    }

    pub fn insert_industry(&mut self, key: &str, description: &str) {
        self.industries
            .insert(industry_key(key), description.to_string());
    }

    pub fn insert_response_time(&mut self, code: &str, phrase: &str) {
        self.response_times
            .insert(code.trim().to_string(), phrase.to_string());
    }

    /// Resolves an industry key to its description.
    ///
    /// Unknown keys still produce a readable sentence fragment built from the raw key,
    /// e.g. `"landscaping"` becomes `"service business specializing in landscaping"`.
    pub fn industry_description(&self, industry: Option<&str>) -> String {
        let Some(raw) = industry.map(str::trim).filter(|k| !k.is_empty()) else {
            return GENERIC_INDUSTRY.to_string();
        };
        match self.industries.get(&industry_key(raw)) {
            Some(description) => description.clone(),
            None => format!(
                "{} specializing in {}",
                GENERIC_INDUSTRY,
                raw.replace(['-', '_'], " ")
            ),
        }
    }

    /// Returns the mapped phrase for a code, if the code is known.
    pub fn response_time_phrase(&self, code: Option<&str>) -> Option<&str> {
        code.map(str::trim)
            .and_then(|c| self.response_times.get(c))
            .map(String::as_str)
    }

    pub fn industry_count(&self) -> usize {
        self.industries.len()
    }

    pub fn response_time_count(&self) -> usize {
        self.response_times.len()
    }
}

/// Industry keys arrive as `hot-tub-spa`, `Hot_Tub_Spa` and similar spellings.
fn industry_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace('_', "-")
}
