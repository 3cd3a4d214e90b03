pub const DEFAULT_LLM_HOST: &str = "localhost";
pub const DEFAULT_LLM_PORT: u16 = 8000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_TEMPERATURE: f32 = 0.6;
pub const DEFAULT_TOP_P: f32 = 0.95;
pub const DEFAULT_SNIPPET_WINDOW_CHARS: usize = 500;
pub const DEFAULT_SNIPPETS_PER_TERM: usize = 2;
pub const DEFAULT_MAX_SNIPPETS: usize = 8;
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 4000;
pub const DEFAULT_CATALOG_PATH: &str = "catalog/engineering_catalog.txt";
