// src/config/consts.rs

// Net config
pub const FETCH_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("page_wordfreq/", env!("CARGO_PKG_VERSION"));

// Ranking
pub const TOP_N: usize = 20;
pub const FUNNEL_N: usize = 10;

// Word cloud
pub const CLOUD_MAX_WORDS: usize = 200;
pub const CLOUD_WIDTH: f32 = 1000.0;
pub const CLOUD_HEIGHT: f32 = 600.0;
pub const CLOUD_SIZE_MIN: f32 = 20.0;
pub const CLOUD_SIZE_MAX: f32 = 100.0;

// Chart labels
pub const SERIES_NAME: &str = "Frequency";
pub const FUNNEL_SERIES_NAME: &str = "Frequency funnel";

// Segmenter: an out-of-lexicon stretch costs START once plus PER_CHAR per char.
// Keep START + (costliest word) < 3 * PER_CHAR so any known word of 3+ chars
// inside an unknown stretch is cheaper to split out.
pub const UNKNOWN_RUN_START: f64 = 4.0;
pub const UNKNOWN_RUN_PER_CHAR: f64 = 6.0;

// Debug log (temp dir)
pub const LOG_FILE_NAME: &str = "page_wordfreq-debug.log";

// GUI
pub const WINDOW_W: f32 = 1200.0;
pub const WINDOW_H: f32 = 900.0;
pub const CJK_FONT_CANDIDATES: &[&str] = &[
    "C:/Windows/Fonts/msyh.ttc",
    "C:/Windows/Fonts/simhei.ttf",
    "/System/Library/Fonts/PingFang.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
];
