/// Veracity system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum characters of article text fed to the sentiment analyzer.
pub const MAX_ANALYZER_INPUT_CHARS: usize = 512;

/// Maximum keyword candidates looked up per fact-check pass.
pub const FACT_CHECK_LOOKUP_LIMIT: usize = 3;

/// A fact-check keyword candidate must be strictly longer than this.
pub const FACT_CHECK_KEYWORD_MIN_CHARS: usize = 3;

/// A trend keyword candidate must be strictly longer than this.
pub const TREND_KEYWORD_MIN_CHARS: usize = 5;
